// ABOUTME: Classify command for coachdesk-cli
// ABOUTME: Reports the effective type and deciding signal for one exercise definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use coachdesk::errors::{AppError, AppResult};
use coachdesk::models::ExerciseDefinition;
use coachdesk::workout::classify_with_signal;
use serde_json::json;

/// Classify one exercise and print the result as JSON
pub fn run(
    name: String,
    exercise_type: Option<String>,
    muscle_group: Option<String>,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Exercise name must not be empty"));
    }

    let mut definition = ExerciseDefinition::named(name);
    if let Some(exercise_type) = exercise_type {
        definition = definition.with_type(exercise_type);
    }
    if let Some(muscle_group) = muscle_group {
        definition = definition.with_muscle_group(muscle_group);
    }

    let classification = classify_with_signal(Some(&definition));
    let output = json!({
        "exercise": definition,
        "effective_type": classification.effective_type,
        "signal": classification.signal,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
