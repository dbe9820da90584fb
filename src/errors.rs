// ABOUTME: Re-export of the unified error system from coachdesk-core
// ABOUTME: Keeps `coachdesk::errors` as the import path for binaries and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

pub use coachdesk_core::errors::*;
