// ABOUTME: Events accepted by the workout session machine and their wire representation
// ABOUTME: Serialized as {"type": "INITIALIZE", ...} so hosts can queue and replay them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use serde::{Deserialize, Serialize};

use crate::constants::session::events;
use crate::models::{
    deserialize_assignment_list, ExerciseAssignment, ExerciseStates, PendingCardio,
    PendingFlexibility, PendingRun, PendingSet,
};

/// Event submitted to the session machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEvent {
    /// Populate the session from an exercise list, or from a draft when one is supplied
    Initialize {
        /// Assignments in the order the loader returned them
        #[serde(
            default,
            rename = "exerciseList",
            deserialize_with = "deserialize_assignment_list"
        )]
        exercise_list: Vec<ExerciseAssignment>,
        /// Previously saved exercise states
        #[serde(default, rename = "draftData")]
        draft_data: Option<ExerciseStates>,
    },
    /// Replace all exercise states
    UpdateExerciseStates {
        /// New states
        #[serde(rename = "newStates")]
        new_states: ExerciseStates,
    },
    /// Replace the pending set buffer
    UpdatePendingSets {
        /// New buffer contents
        entries: Vec<PendingSet>,
    },
    /// Replace the pending cardio buffer
    UpdatePendingCardio {
        /// New buffer contents
        entries: Vec<PendingCardio>,
    },
    /// Replace the pending flexibility buffer
    UpdatePendingFlexibility {
        /// New buffer contents
        entries: Vec<PendingFlexibility>,
    },
    /// Replace the pending run buffer
    UpdatePendingRuns {
        /// New buffer contents
        entries: Vec<PendingRun>,
    },
    /// Flip the expanded flag of one exercise
    ToggleExerciseExpanded {
        /// Assignment id to toggle
        #[serde(rename = "exerciseId")]
        exercise_id: String,
    },
}

impl SessionEvent {
    /// Fresh initialization from an exercise list
    #[must_use]
    pub fn initialize(exercise_list: Vec<ExerciseAssignment>) -> Self {
        Self::Initialize {
            exercise_list,
            draft_data: None,
        }
    }

    /// Initialization that resumes a draft
    #[must_use]
    pub fn resume(exercise_list: Vec<ExerciseAssignment>, draft_data: ExerciseStates) -> Self {
        Self::Initialize {
            exercise_list,
            draft_data: Some(draft_data),
        }
    }

    /// Toggle one exercise card
    #[must_use]
    pub fn toggle(exercise_id: impl Into<String>) -> Self {
        Self::ToggleExerciseExpanded {
            exercise_id: exercise_id.into(),
        }
    }

    /// Wire name of the event
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initialize { .. } => events::INITIALIZE,
            Self::UpdateExerciseStates { .. } => events::UPDATE_EXERCISE_STATES,
            Self::UpdatePendingSets { .. } => events::UPDATE_PENDING_SETS,
            Self::UpdatePendingCardio { .. } => events::UPDATE_PENDING_CARDIO,
            Self::UpdatePendingFlexibility { .. } => events::UPDATE_PENDING_FLEXIBILITY,
            Self::UpdatePendingRuns { .. } => events::UPDATE_PENDING_RUNS,
            Self::ToggleExerciseExpanded { .. } => events::TOGGLE_EXERCISE_EXPANDED,
        }
    }
}
