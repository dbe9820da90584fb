// ABOUTME: Re-export of session data models from coachdesk-core
// ABOUTME: Exercise assignments, log entries, and pending records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

pub use coachdesk_core::models::*;
