// ABOUTME: Re-export of domain constants from coachdesk-core
// ABOUTME: Classification keyword tables, event names, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

pub use coachdesk_core::constants::*;
