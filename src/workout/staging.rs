// ABOUTME: Derives pending records and completion progress from live exercise states
// ABOUTME: Pure helpers for the persistence flusher; the machine never flushes on its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{
    ExerciseLogEntry, ExercisePayload, ExerciseStates, PendingCardio, PendingFlexibility,
    PendingRun, PendingSet,
};

use super::events::SessionEvent;

/// Records ready to hand to the persistence flusher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingBatch {
    /// Completed sets
    pub sets: Vec<PendingSet>,
    /// Completed cardio entries
    pub cardio: Vec<PendingCardio>,
    /// Completed flexibility entries
    pub flexibility: Vec<PendingFlexibility>,
    /// Completed runs
    pub runs: Vec<PendingRun>,
}

impl PendingBatch {
    /// Total number of staged records
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len() + self.cardio.len() + self.flexibility.len() + self.runs.len()
    }

    /// Whether nothing is staged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The four buffer-replacement events that load this batch into a machine
    #[must_use]
    pub fn into_events(self) -> [SessionEvent; 4] {
        [
            SessionEvent::UpdatePendingSets { entries: self.sets },
            SessionEvent::UpdatePendingCardio {
                entries: self.cardio,
            },
            SessionEvent::UpdatePendingFlexibility {
                entries: self.flexibility,
            },
            SessionEvent::UpdatePendingRuns { entries: self.runs },
        ]
    }
}

/// Stage every completed set and completed cardio, flexibility, or run entry
///
/// Exercises are visited in `order` first; entries missing from `order` follow
/// in key order so nothing completed is dropped.
#[must_use]
pub fn collect_pending(
    states: &ExerciseStates,
    order: &[String],
    logged_at: DateTime<Utc>,
) -> PendingBatch {
    let mut batch = PendingBatch::default();
    for (exercise_id, entry) in ordered(states, order) {
        stage_entry(&mut batch, exercise_id, entry, logged_at);
    }
    batch
}

fn ordered<'a>(
    states: &'a ExerciseStates,
    order: &'a [String],
) -> impl Iterator<Item = (&'a str, &'a ExerciseLogEntry)> + 'a {
    let listed: HashSet<&str> = order.iter().map(String::as_str).collect();
    let in_order = order
        .iter()
        .filter_map(move |id| states.get(id).map(|entry| (id.as_str(), entry)));
    let rest = states
        .iter()
        .filter(move |(id, _)| !listed.contains(id.as_str()))
        .map(|(id, entry)| (id.as_str(), entry));
    in_order.chain(rest)
}

fn stage_entry(
    batch: &mut PendingBatch,
    exercise_id: &str,
    entry: &ExerciseLogEntry,
    logged_at: DateTime<Utc>,
) {
    let exercise_ref_id = entry.exercise_ref_id.clone();
    match &entry.payload {
        ExercisePayload::Strength { sets } => {
            batch.sets.extend(sets.iter().filter(|set| set.completed).map(|set| {
                PendingSet {
                    exercise_id: exercise_id.to_owned(),
                    exercise_ref_id: exercise_ref_id.clone(),
                    set_number: set.set_number,
                    weight: set.weight.clone(),
                    reps: set.reps.clone(),
                    logged_at,
                }
            }));
        }
        ExercisePayload::Cardio { cardio_data } if cardio_data.completed => {
            batch.cardio.push(PendingCardio {
                exercise_id: exercise_id.to_owned(),
                exercise_ref_id,
                distance: cardio_data.distance.clone(),
                duration: cardio_data.duration.clone(),
                location: cardio_data.location.clone(),
                logged_at,
            });
        }
        ExercisePayload::Flexibility { flexibility_data } if flexibility_data.completed => {
            batch.flexibility.push(PendingFlexibility {
                exercise_id: exercise_id.to_owned(),
                exercise_ref_id,
                duration: flexibility_data.duration.clone(),
                logged_at,
            });
        }
        ExercisePayload::Running { run_data } if run_data.completed => {
            batch.runs.push(PendingRun {
                exercise_id: exercise_id.to_owned(),
                exercise_ref_id,
                distance: run_data.distance.clone(),
                duration: run_data.duration.clone(),
                location: run_data.location.clone(),
                logged_at,
            });
        }
        ExercisePayload::Cardio { .. }
        | ExercisePayload::Flexibility { .. }
        | ExercisePayload::Running { .. } => {}
    }
}

/// Completion summary of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    /// Exercises in the session
    pub total_exercises: usize,
    /// Exercises fully completed (all sets, or the single entry)
    pub completed_exercises: usize,
    /// Strength sets in the session
    pub total_sets: usize,
    /// Strength sets ticked off
    pub completed_sets: usize,
}

impl SessionProgress {
    /// Summarise the given states
    #[must_use]
    pub fn from_states(states: &ExerciseStates) -> Self {
        states
            .values()
            .fold(Self::default(), |mut progress, entry| {
                progress.total_exercises += 1;
                let done = match &entry.payload {
                    ExercisePayload::Strength { sets } => {
                        let completed = sets.iter().filter(|set| set.completed).count();
                        progress.total_sets += sets.len();
                        progress.completed_sets += completed;
                        !sets.is_empty() && completed == sets.len()
                    }
                    ExercisePayload::Cardio { cardio_data } => cardio_data.completed,
                    ExercisePayload::Flexibility { flexibility_data } => {
                        flexibility_data.completed
                    }
                    ExercisePayload::Running { run_data } => run_data.completed,
                };
                if done {
                    progress.completed_exercises += 1;
                }
                progress
            })
    }

    /// Fraction of exercises completed, `0.0` for an empty session
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        if self.total_exercises == 0 {
            return 0.0;
        }
        self.completed_exercises as f64 / self.total_exercises as f64
    }

    /// Whether every exercise is completed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total_exercises > 0 && self.completed_exercises == self.total_exercises
    }
}
