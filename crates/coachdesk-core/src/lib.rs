// ABOUTME: Core types and constants for the coachdesk workout logging platform
// ABOUTME: Foundation crate with error handling, session data models, and classification constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

#![deny(unsafe_code)]

//! # Coachdesk Core
//!
//! Foundation crate providing shared types and constants for the coachdesk
//! workout logging platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Classification keyword tables, event names, and environment defaults
//! - **models**: Exercise assignments, per-exercise log entries, and pending records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (exercise assignments, log entries, pending records)
pub mod models;
