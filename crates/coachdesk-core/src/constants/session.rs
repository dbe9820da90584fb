// ABOUTME: Session-level constants: event wire names, defaults, and environment variables
// ABOUTME: Shared by the state machine, configuration loader, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

/// Minimum number of sets seeded for a strength exercise
pub const MIN_SEEDED_SETS: u32 = 1;

/// Maximum number of sets seeded for a strength exercise; larger prescriptions are clamped
pub const MAX_SEEDED_SETS: u32 = 100;

/// Order index used when an assignment has none
pub const DEFAULT_ORDER_INDEX: i64 = 0;

/// Whether freshly seeded exercise cards start expanded
pub const DEFAULT_EXPANDED: bool = true;

/// Event names as they appear on the wire
pub mod events {
    /// Populate the session from an exercise list or draft
    pub const INITIALIZE: &str = "INITIALIZE";
    /// Replace all exercise states
    pub const UPDATE_EXERCISE_STATES: &str = "UPDATE_EXERCISE_STATES";
    /// Replace the pending set buffer
    pub const UPDATE_PENDING_SETS: &str = "UPDATE_PENDING_SETS";
    /// Replace the pending cardio buffer
    pub const UPDATE_PENDING_CARDIO: &str = "UPDATE_PENDING_CARDIO";
    /// Replace the pending flexibility buffer
    pub const UPDATE_PENDING_FLEXIBILITY: &str = "UPDATE_PENDING_FLEXIBILITY";
    /// Replace the pending run buffer
    pub const UPDATE_PENDING_RUNS: &str = "UPDATE_PENDING_RUNS";
    /// Flip one exercise card's expanded flag
    pub const TOGGLE_EXERCISE_EXPANDED: &str = "TOGGLE_EXERCISE_EXPANDED";
}

/// Environment variable names read by the configuration loader
pub mod env_vars {
    /// `trust` or `strict`
    pub const DRAFT_POLICY: &str = "COACHDESK_DRAFT_POLICY";
    /// `true` or `false`
    pub const DEFAULT_EXPANDED: &str = "COACHDESK_DEFAULT_EXPANDED";
}
