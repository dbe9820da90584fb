// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the coachdesk platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Keyword tables driving exercise classification
pub mod classification;
/// Session event names and environment variable names
pub mod session;

/// Service identity used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const COACHDESK: &str = "coachdesk";
    /// CLI binary name
    pub const COACHDESK_CLI: &str = "coachdesk-cli";
}
