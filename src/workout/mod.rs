// ABOUTME: Active-workout logging core: classification, session state machine, drafts, and staging
// ABOUTME: Everything here is synchronous, in-memory state transition logic with no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! # Workout Session
//!
//! - **classifier**: decides each exercise's effective logging type
//! - **machine**: the `idle -> initializing -> ready` session machine and its reducer
//! - **events**: events the machine accepts, with their JSON wire form
//! - **state**: the session aggregate
//! - **draft**: resumable draft snapshots and strict draft validation
//! - **staging**: pending-record derivation and progress for persistence flushers

/// Exercise classification
pub mod classifier;
/// Resumable drafts
pub mod draft;
/// Session events
pub mod events;
/// Session state machine
pub mod machine;
/// Pending-record staging and progress
pub mod staging;
/// Machine states and session aggregate
pub mod state;

pub use classifier::{
    classify, classify_with_signal, is_strength_exercise, Classification, ClassificationSignal,
};
pub use draft::{validate_draft, DraftSnapshot};
pub use events::SessionEvent;
pub use machine::{initialize, reduce, InitializedSession, Snapshot, WorkoutSessionMachine};
pub use staging::{collect_pending, PendingBatch, SessionProgress};
pub use state::{MachineState, SessionState};
