// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and the exercise assignments used across tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `coachdesk`

use std::sync::Once;

use coachdesk::config::SessionConfig;
use coachdesk::models::{ExerciseAssignment, ExerciseDefinition};
use coachdesk::workout::{SessionEvent, WorkoutSessionMachine};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Strength assignment with sets, reps, and a named definition
pub fn strength(
    id: &str,
    order_index: i64,
    sets: i64,
    reps: &str,
    name: &str,
) -> ExerciseAssignment {
    ExerciseAssignment::new(id)
        .with_order_index(order_index)
        .with_sets(sets)
        .with_reps(reps)
        .with_exercise(ExerciseDefinition::named(name))
}

/// Assignment with only a named definition
pub fn named(id: &str, order_index: i64, name: &str) -> ExerciseAssignment {
    ExerciseAssignment::new(id)
        .with_order_index(order_index)
        .with_exercise(ExerciseDefinition::named(name))
}

/// A mixed workout: strength, run, cardio, and flexibility
pub fn mixed_workout() -> Vec<ExerciseAssignment> {
    vec![
        strength("squat", 2, 3, "8", "Back Squat"),
        named("run", 0, "Morning Run"),
        ExerciseAssignment::new("bike").with_order_index(1).with_exercise(
            ExerciseDefinition::named("Interval Session").with_type("cardio"),
        ),
        ExerciseAssignment::new("stretch").with_order_index(3).with_exercise(
            ExerciseDefinition::named("Hip Opener").with_type("flexibility"),
        ),
    ]
}

/// Machine already initialized with `exercise_list`
pub fn ready_machine(exercise_list: Vec<ExerciseAssignment>) -> WorkoutSessionMachine {
    init_test_logging();
    let mut machine = WorkoutSessionMachine::new(SessionConfig::default());
    machine.send(SessionEvent::initialize(exercise_list));
    machine
}
