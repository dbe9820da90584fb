// ABOUTME: Resumable draft snapshots of a session's exercise states and optional strict validation
// ABOUTME: Drafts are trusted verbatim unless the strict draft policy is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppResult, DraftError};
use crate::models::{ExercisePayload, ExerciseStates};

/// Serializable envelope for a saved draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    /// Workout the draft belongs to
    #[serde(default)]
    pub workout_id: Option<String>,
    /// When the draft was captured
    pub saved_at: DateTime<Utc>,
    /// Exercise states exactly as they were
    pub exercise_states: ExerciseStates,
}

impl DraftSnapshot {
    /// Capture the given states now
    #[must_use]
    pub fn capture(workout_id: Option<String>, exercise_states: &ExerciseStates) -> Self {
        Self {
            workout_id,
            saved_at: Utc::now(),
            exercise_states: exercise_states.clone(),
        }
    }

    /// Whether the draft holds anything to resume
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercise_states.is_empty()
    }

    /// Encode as JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the input is not a valid draft
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Check a draft's structure against the workout it is meant to resume
///
/// Every key must be non-empty and belong to `exercise_ids`, and every
/// strength entry must carry sets numbered exactly `1..=N` with `N >= 1`.
///
/// # Errors
///
/// Returns the first [`DraftError`] found, in key order
pub fn validate_draft(draft: &ExerciseStates, exercise_ids: &[String]) -> Result<(), DraftError> {
    let known: HashSet<&str> = exercise_ids.iter().map(String::as_str).collect();

    for (exercise_id, entry) in draft {
        if exercise_id.trim().is_empty() {
            return Err(DraftError::EmptyExerciseId);
        }
        if !known.contains(exercise_id.as_str()) {
            return Err(DraftError::UnknownExercise {
                exercise_id: exercise_id.clone(),
            });
        }
        if let ExercisePayload::Strength { sets } = &entry.payload {
            if sets.is_empty() {
                return Err(DraftError::NoSets {
                    exercise_id: exercise_id.clone(),
                });
            }
            for (position, set) in sets.iter().enumerate() {
                if usize::try_from(set.set_number).ok() != Some(position + 1) {
                    return Err(DraftError::SetNumbering {
                        exercise_id: exercise_id.clone(),
                        position,
                        found: set.set_number,
                    });
                }
            }
        }
    }

    Ok(())
}
