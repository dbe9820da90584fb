// ABOUTME: Core data models for workout logging sessions
// ABOUTME: Re-exports exercise assignments, per-exercise log entries, and pending records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! # Data Models
//!
//! - `ExerciseAssignment`: one prescribed exercise inside a workout, as supplied by the workout loader
//! - `ExerciseLogEntry`: the live logging state of one exercise during a session
//! - `Pending*`: records staged for a persistence flusher
//!
//! Assignments use the snake_case field names of the backing store. Log entries
//! and drafts use camelCase, matching what the UI layer persists.

mod exercise;
mod log_entry;
mod pending;

pub use exercise::{
    decode_assignments, deserialize_assignment_list, DeclaredExerciseType, ExerciseAssignment,
    ExerciseDefinition,
};
pub use log_entry::{
    CardioData, EffectiveType, ExerciseLogEntry, ExercisePayload, ExerciseStates,
    FlexibilityData, RunData, SetEntry,
};
pub use pending::{PendingCardio, PendingFlexibility, PendingRun, PendingSet};
