// ABOUTME: Machine states and the session aggregate owned by the workout session machine
// ABOUTME: Holds exercise states, display order, and the four pending staging buffers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{
    ExerciseLogEntry, ExerciseStates, PendingCardio, PendingFlexibility, PendingRun, PendingSet,
};

use super::draft::DraftSnapshot;
use super::staging::SessionProgress;

/// Lifecycle state of the session machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineState {
    /// Created, nothing loaded yet
    #[default]
    Idle,
    /// Populating exercise states
    Initializing,
    /// Accepting updates
    Ready,
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Initializing => f.write_str("initializing"),
            Self::Ready => f.write_str("ready"),
        }
    }
}

/// In-memory aggregate of an active workout session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Logging state per assignment id
    pub exercise_states: ExerciseStates,
    /// Display and logging order
    pub sorted_exercise_ids: Vec<String>,
    /// Sets awaiting a flush
    pub pending_sets: Vec<PendingSet>,
    /// Cardio entries awaiting a flush
    pub pending_cardio: Vec<PendingCardio>,
    /// Flexibility entries awaiting a flush
    pub pending_flexibility: Vec<PendingFlexibility>,
    /// Runs awaiting a flush
    pub pending_runs: Vec<PendingRun>,
    /// True once exercise states have been populated
    pub initialized: bool,
}

impl SessionState {
    /// Whether the session is usable
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Entry for an assignment id
    #[must_use]
    pub fn entry(&self, exercise_id: &str) -> Option<&ExerciseLogEntry> {
        self.exercise_states.get(exercise_id)
    }

    /// Entries in display order; ids without an entry are skipped
    pub fn ordered_entries(&self) -> impl Iterator<Item = (&str, &ExerciseLogEntry)> + '_ {
        self.sorted_exercise_ids.iter().filter_map(|id| {
            self.exercise_states
                .get(id)
                .map(|entry| (id.as_str(), entry))
        })
    }

    /// Completion summary over all exercise states
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::from_states(&self.exercise_states)
    }

    /// Capture the exercise states as a resumable draft
    #[must_use]
    pub fn to_draft(&self, workout_id: Option<String>) -> DraftSnapshot {
        DraftSnapshot::capture(workout_id, &self.exercise_states)
    }
}
