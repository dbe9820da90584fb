// ABOUTME: Configuration management module for workout session behaviour
// ABOUTME: Environment-only configuration, mirroring how logging is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors
//! Configuration module for coachdesk
//!
//! Configuration is read from environment variables only; there is no config file.
//!
//! - **Session**: draft trust policy and initial card expansion

/// Session behaviour configuration
pub mod session;

pub use session::{DraftPolicy, SessionConfig};
