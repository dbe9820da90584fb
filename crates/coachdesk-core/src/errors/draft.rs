// ABOUTME: Draft-specific error types raised by strict draft validation
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! # Draft Error Types
//!
//! Structured errors describing why a saved draft does not match the shape a
//! live session expects. Only produced when strict draft validation is enabled.

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Reasons a draft entry can be rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Draft key is empty
    EmptyExerciseId,
    /// Strength entry has no sets
    NoSets {
        /// Exercise the entry belongs to
        exercise_id: String,
    },
    /// Set numbers are not exactly `1..=N`
    SetNumbering {
        /// Exercise the entry belongs to
        exercise_id: String,
        /// Position in the set list (0-based)
        position: usize,
        /// Number found at that position
        found: u32,
    },
    /// Draft references an exercise the workout does not contain
    UnknownExercise {
        /// Exercise id found in the draft
        exercise_id: String,
    },
}

impl DraftError {
    /// Exercise id the error refers to, if any
    #[must_use]
    pub fn exercise_id(&self) -> Option<&str> {
        match self {
            Self::EmptyExerciseId => None,
            Self::NoSets { exercise_id }
            | Self::SetNumbering { exercise_id, .. }
            | Self::UnknownExercise { exercise_id } => Some(exercise_id),
        }
    }
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExerciseId => write!(f, "Draft contains an entry with an empty exercise id"),
            Self::NoSets { exercise_id } => {
                write!(f, "Strength entry '{exercise_id}' has no sets")
            }
            Self::SetNumbering {
                exercise_id,
                position,
                found,
            } => write!(
                f,
                "Strength entry '{exercise_id}' has set number {found} at position {position}, expected {}",
                position + 1
            ),
            Self::UnknownExercise { exercise_id } => {
                write!(f, "Draft entry '{exercise_id}' is not part of the workout")
            }
        }
    }
}

impl Error for DraftError {}

impl From<DraftError> for AppError {
    fn from(error: DraftError) -> Self {
        let mut app_error = Self::new(ErrorCode::InvalidInput, error.to_string());
        if let Some(id) = error.exercise_id() {
            app_error = app_error.with_resource_id(id);
        }
        app_error
    }
}
