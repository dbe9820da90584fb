// ABOUTME: Workout session state machine: idle -> initializing -> ready, driven by session events
// ABOUTME: Pure reducer plus an owning wrapper; builds exercise states from a workout or a draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! # Workout Session Machine
//!
//! The machine owns the in-memory representation of an active workout. Every
//! event is applied to completion before the next one; nothing here performs
//! I/O or fails. Callers that dispatch from several places must serialize
//! their calls, the machine does no locking of its own.
//!
//! `INITIALIZE` moves the machine through `initializing` to `ready`, populating
//! the session either from a non-empty draft (taken as-is) or by classifying
//! each assignment in the workout. From `ready`, `INITIALIZE` may be sent again
//! to load a different workout.

use std::collections::HashSet;
use std::mem;

use tracing::debug;

use crate::config::{DraftPolicy, SessionConfig};
use crate::constants::session::{events, DEFAULT_ORDER_INDEX};
use crate::errors::AppError;
use crate::logging::SessionLogger;
use crate::models::{
    EffectiveType, ExerciseAssignment, ExerciseLogEntry, ExercisePayload, ExerciseStates, SetEntry,
};

use super::classifier::classify_with_signal;
use super::draft::validate_draft;
use super::events::SessionEvent;
use super::state::{MachineState, SessionState};

/// Machine state together with the session it governs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Lifecycle state
    pub state: MachineState,
    /// Session aggregate
    pub context: SessionState,
}

/// Result of an `INITIALIZE` computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializedSession {
    /// Populated exercise states
    pub exercise_states: ExerciseStates,
    /// Display order
    pub sorted_exercise_ids: Vec<String>,
    /// Whether the session is usable
    pub initialized: bool,
}

/// Apply one event to a snapshot
#[must_use]
pub fn reduce(snapshot: Snapshot, event: SessionEvent, config: &SessionConfig) -> Snapshot {
    let Snapshot { state, mut context } = snapshot;

    match (state, event) {
        (
            _,
            SessionEvent::Initialize {
                exercise_list,
                draft_data,
            },
        ) => {
            SessionLogger::log_transition(
                &state.to_string(),
                &MachineState::Initializing.to_string(),
                events::INITIALIZE,
            );
            let session = initialize(&exercise_list, draft_data, config);
            context.exercise_states = session.exercise_states;
            context.sorted_exercise_ids = session.sorted_exercise_ids;
            context.initialized = session.initialized;
            SessionLogger::log_transition(
                &MachineState::Initializing.to_string(),
                &MachineState::Ready.to_string(),
                events::INITIALIZE,
            );
            Snapshot {
                state: MachineState::Ready,
                context,
            }
        }
        (MachineState::Ready, event) => {
            apply_update(&mut context, event);
            Snapshot {
                state: MachineState::Ready,
                context,
            }
        }
        (state, event) => {
            SessionLogger::log_event_ignored(&state.to_string(), event.name());
            Snapshot { state, context }
        }
    }
}

fn apply_update(context: &mut SessionState, event: SessionEvent) {
    match event {
        SessionEvent::UpdateExerciseStates { new_states } => {
            context.exercise_states = new_states;
        }
        SessionEvent::UpdatePendingSets { entries } => context.pending_sets = entries,
        SessionEvent::UpdatePendingCardio { entries } => context.pending_cardio = entries,
        SessionEvent::UpdatePendingFlexibility { entries } => {
            context.pending_flexibility = entries;
        }
        SessionEvent::UpdatePendingRuns { entries } => context.pending_runs = entries,
        SessionEvent::ToggleExerciseExpanded { exercise_id } => {
            match context.exercise_states.get_mut(&exercise_id) {
                Some(entry) => entry.expanded = !entry.expanded,
                None => SessionLogger::log_unknown_toggle(&exercise_id),
            }
        }
        SessionEvent::Initialize { .. } => {
            debug!("Initialize reached the update path; handled by reduce");
        }
    }
}

/// Build the session for an `INITIALIZE` event
///
/// Assignments without an identity, and repeats of an identity already seen,
/// are logged and skipped. The remaining ids are stably sorted by order index,
/// a missing index counting as `0`. A non-empty draft then becomes the exercise
/// states as-is (unless the strict draft policy rejects it); otherwise every
/// assignment is classified and seeded. An empty workout with no draft yields
/// an uninitialized, empty session.
#[must_use]
pub fn initialize(
    exercise_list: &[ExerciseAssignment],
    draft_data: Option<ExerciseStates>,
    config: &SessionConfig,
) -> InitializedSession {
    let assignments = sorted_assignments(exercise_list);
    let sorted_exercise_ids: Vec<String> =
        assignments.iter().map(|(id, _)| (*id).to_owned()).collect();

    if let Some(draft) = draft_data.filter(|draft| !draft.is_empty()) {
        match accept_draft(&draft, &sorted_exercise_ids, config) {
            Ok(()) => {
                SessionLogger::log_initialized("draft", draft.len(), true);
                return InitializedSession {
                    exercise_states: draft,
                    sorted_exercise_ids,
                    initialized: true,
                };
            }
            Err(error) => SessionLogger::log_draft_rejected(&error),
        }
    }

    if assignments.is_empty() {
        SessionLogger::log_initialized("fresh", 0, false);
        return InitializedSession {
            exercise_states: ExerciseStates::new(),
            sorted_exercise_ids,
            initialized: false,
        };
    }

    let exercise_states: ExerciseStates = assignments
        .iter()
        .map(|(id, assignment)| ((*id).to_owned(), seed_entry(id, assignment, config)))
        .collect();

    SessionLogger::log_initialized("fresh", exercise_states.len(), true);
    InitializedSession {
        exercise_states,
        sorted_exercise_ids,
        initialized: true,
    }
}

fn accept_draft(
    draft: &ExerciseStates,
    exercise_ids: &[String],
    config: &SessionConfig,
) -> Result<(), AppError> {
    match config.draft_policy {
        DraftPolicy::Trust => Ok(()),
        DraftPolicy::Strict => validate_draft(draft, exercise_ids).map_err(AppError::from),
    }
}

/// Valid assignments paired with their identity, stably sorted by order index
fn sorted_assignments(exercise_list: &[ExerciseAssignment]) -> Vec<(&str, &ExerciseAssignment)> {
    let mut seen = HashSet::new();
    let mut assignments = Vec::with_capacity(exercise_list.len());

    for (position, assignment) in exercise_list.iter().enumerate() {
        let Some(id) = assignment.identity() else {
            SessionLogger::log_record_skipped(position, None, "missing identity");
            continue;
        };
        if !seen.insert(id) {
            SessionLogger::log_record_skipped(position, Some(id), "duplicate identity");
            continue;
        }
        assignments.push((id, assignment));
    }

    assignments
        .sort_by_key(|(_, assignment)| assignment.order_index.unwrap_or(DEFAULT_ORDER_INDEX));
    assignments
}

fn seed_entry(
    exercise_id: &str,
    assignment: &ExerciseAssignment,
    config: &SessionConfig,
) -> ExerciseLogEntry {
    let definition = assignment.exercise.as_ref();
    let classification = classify_with_signal(definition);
    SessionLogger::log_classified(
        exercise_id,
        classification.effective_type.as_str(),
        &format!("{:?}", classification.signal),
    );

    let prescribed_sets = assignment.sets.unwrap_or_default();
    if classification.effective_type == EffectiveType::Strength {
        let seeded = SetEntry::seeded_count(prescribed_sets);
        if assignment.sets.is_some_and(|sets| sets != i64::from(seeded)) {
            SessionLogger::log_sets_clamped(exercise_id, prescribed_sets, seeded);
        }
    }

    let payload = ExercisePayload::seed(
        classification.effective_type,
        prescribed_sets,
        assignment.reps.as_deref().unwrap_or_default(),
    );
    let exercise_ref_id = definition.and_then(|exercise| exercise.id.clone());

    ExerciseLogEntry::new(exercise_ref_id, payload).with_expanded(config.default_expanded)
}

/// Owning wrapper around [`reduce`]
#[derive(Debug, Clone, Default)]
pub struct WorkoutSessionMachine {
    snapshot: Snapshot,
    config: SessionConfig,
}

impl WorkoutSessionMachine {
    /// Idle machine with the given configuration
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            snapshot: Snapshot::default(),
            config,
        }
    }

    /// Apply an event and return the resulting state
    pub fn send(&mut self, event: SessionEvent) -> MachineState {
        let current = mem::take(&mut self.snapshot);
        self.snapshot = reduce(current, event, &self.config);
        self.snapshot.state
    }

    /// Apply events in order
    pub fn send_all(&mut self, events: impl IntoIterator<Item = SessionEvent>) -> MachineState {
        for event in events {
            self.send(event);
        }
        self.snapshot.state
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> MachineState {
        self.snapshot.state
    }

    /// Current session
    #[must_use]
    pub const fn context(&self) -> &SessionState {
        &self.snapshot.context
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consume the machine, keeping the session
    #[must_use]
    pub fn into_context(self) -> SessionState {
        self.snapshot.context
    }
}
