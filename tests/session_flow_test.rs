// ABOUTME: End-to-end tests of a logging session: complete work, stage it, save and resume a draft
// ABOUTME: Covers pending-batch collection, progress summaries, and draft snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use chrono::{TimeZone, Utc};
use coachdesk::config::{DraftPolicy, SessionConfig};
use coachdesk::errors::{AppError, DraftError, ErrorCode};
use coachdesk::models::{ExercisePayload, ExerciseStates};
use coachdesk::workout::{
    collect_pending, validate_draft, DraftSnapshot, SessionEvent, SessionProgress,
    WorkoutSessionMachine,
};

use common::{mixed_workout, ready_machine};

/// Tick the first two squat sets and finish the run
fn log_some_work(states: &ExerciseStates) -> ExerciseStates {
    let mut states = states.clone();
    for entry in states.values_mut() {
        match &mut entry.payload {
            ExercisePayload::Strength { sets } => {
                for set in sets.iter_mut().take(2) {
                    set.weight = "100".to_owned();
                    set.completed = true;
                }
            }
            ExercisePayload::Running { run_data } => {
                run_data.distance = "5".to_owned();
                run_data.duration = "27:30".to_owned();
                run_data.completed = true;
            }
            ExercisePayload::Cardio { .. } | ExercisePayload::Flexibility { .. } => {}
        }
    }
    states
}

#[test]
fn test_collect_pending_stages_only_completed_work() {
    let machine = ready_machine(mixed_workout());
    let session = machine.context();
    let logged_at = Utc.with_ymd_and_hms(2025, 6, 1, 7, 30, 0).unwrap();

    let states = log_some_work(&session.exercise_states);
    let batch = collect_pending(&states, &session.sorted_exercise_ids, logged_at);

    assert_eq!(batch.len(), 3);
    assert_eq!(batch.sets.len(), 2);
    assert_eq!(
        batch.sets.iter().map(|set| set.set_number).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(batch.sets.iter().all(|set| set.exercise_id == "squat"));
    assert_eq!(batch.runs.len(), 1);
    assert_eq!(batch.runs[0].distance, "5");
    assert_eq!(batch.runs[0].logged_at, logged_at);
    assert!(batch.cardio.is_empty());
    assert!(batch.flexibility.is_empty());
}

#[test]
fn test_nothing_completed_stages_nothing() {
    let machine = ready_machine(mixed_workout());
    let session = machine.context();
    let batch = collect_pending(
        &session.exercise_states,
        &session.sorted_exercise_ids,
        Utc::now(),
    );
    assert!(batch.is_empty());
}

#[test]
fn test_pending_batch_loads_into_machine() {
    let mut machine = ready_machine(mixed_workout());
    let states = log_some_work(&machine.context().exercise_states);
    let order = machine.context().sorted_exercise_ids.clone();

    machine.send(SessionEvent::UpdateExerciseStates {
        new_states: states.clone(),
    });
    let batch = collect_pending(&states, &order, Utc::now());
    let expected = batch.clone();
    machine.send_all(batch.into_events());

    let session = machine.context();
    assert_eq!(session.pending_sets, expected.sets);
    assert_eq!(session.pending_runs, expected.runs);
    assert!(session.pending_cardio.is_empty());
    assert!(session.pending_flexibility.is_empty());
}

#[test]
fn test_progress_summary() {
    let machine = ready_machine(mixed_workout());
    let untouched = machine.context().progress();
    assert_eq!(untouched.total_exercises, 4);
    assert_eq!(untouched.completed_exercises, 0);
    assert_eq!(untouched.total_sets, 3);
    assert_eq!(untouched.completion_ratio(), 0.0);
    assert!(!untouched.is_complete());

    let progress = SessionProgress::from_states(&log_some_work(&machine.context().exercise_states));
    assert_eq!(progress.completed_sets, 2);
    // Squat has one set left, so only the run counts as done
    assert_eq!(progress.completed_exercises, 1);
    assert_eq!(progress.completion_ratio(), 0.25);
}

#[test]
fn test_empty_session_progress() {
    let progress = SessionProgress::from_states(&ExerciseStates::new());
    assert_eq!(progress.completion_ratio(), 0.0);
    assert!(!progress.is_complete());
}

#[test]
fn test_save_and_resume_draft() {
    let mut machine = ready_machine(mixed_workout());
    let states = log_some_work(&machine.context().exercise_states);
    machine.send(SessionEvent::UpdateExerciseStates { new_states: states });
    machine.send(SessionEvent::toggle("bike"));

    let draft = machine.context().to_draft(Some("workout-42".to_owned()));
    let json = draft.to_json().unwrap();
    let restored = DraftSnapshot::from_json(&json).unwrap();
    assert_eq!(restored.workout_id.as_deref(), Some("workout-42"));

    let mut resumed = WorkoutSessionMachine::new(
        SessionConfig::default().with_draft_policy(DraftPolicy::Strict),
    );
    resumed.send(SessionEvent::resume(mixed_workout(), restored.exercise_states));

    assert_eq!(
        resumed.context().exercise_states,
        machine.context().exercise_states
    );
    assert_eq!(
        resumed.context().sorted_exercise_ids,
        machine.context().sorted_exercise_ids
    );
    assert!(!resumed.context().entry("bike").unwrap().expanded);
}

#[test]
fn test_draft_json_uses_camel_case_and_type_tag() {
    let machine = ready_machine(mixed_workout());
    let json = machine.context().to_draft(None).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("savedAt").is_some());
    let squat = &value["exerciseStates"]["squat"];
    assert_eq!(squat["effectiveType"], "strength");
    assert_eq!(squat["expanded"], true);
    assert_eq!(squat["sets"][0]["setNumber"], 1);
    assert_eq!(value["exerciseStates"]["run"]["effectiveType"], "running");
}

#[test]
fn test_draft_validation_error_maps_to_invalid_input() {
    let machine = ready_machine(mixed_workout());
    let mut states = machine.context().exercise_states.clone();
    if let Some(ExercisePayload::Strength { sets }) =
        states.get_mut("squat").map(|entry| &mut entry.payload)
    {
        sets.clear();
    }

    let error = validate_draft(&states, &machine.context().sorted_exercise_ids).unwrap_err();
    assert_eq!(
        error,
        DraftError::NoSets {
            exercise_id: "squat".to_owned()
        }
    );

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::InvalidInput);
}
