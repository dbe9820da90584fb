// ABOUTME: Output formatting helpers for coachdesk-cli
// ABOUTME: Renders a replayed session as a compact human-readable table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use coachdesk::models::ExercisePayload;
use coachdesk::workout::{MachineState, SessionState};

/// Print one line per exercise in display order, then totals
pub fn print_summary(state: MachineState, session: &SessionState) {
    println!("State: {state} (initialized: {})", session.initialized);
    println!("{}", "=".repeat(60));

    for (position, (exercise_id, entry)) in session.ordered_entries().enumerate() {
        let marker = if entry.expanded { "-" } else { "+" };
        let detail = match &entry.payload {
            ExercisePayload::Strength { sets } => {
                let done = sets.iter().filter(|set| set.completed).count();
                format!("{done}/{} sets", sets.len())
            }
            ExercisePayload::Cardio { cardio_data } => {
                format!("{} in {}", or_dash(&cardio_data.distance), or_dash(&cardio_data.duration))
            }
            ExercisePayload::Flexibility { flexibility_data } => {
                or_dash(&flexibility_data.duration).to_owned()
            }
            ExercisePayload::Running { run_data } => {
                format!("{} in {}", or_dash(&run_data.distance), or_dash(&run_data.duration))
            }
        };
        println!(
            "{marker} {:>2}. {exercise_id:<20} {:<12} {detail}",
            position + 1,
            entry.effective_type().as_str()
        );
    }

    let progress = session.progress();
    println!("{}", "=".repeat(60));
    println!(
        "Exercises: {}/{} complete, sets: {}/{}",
        progress.completed_exercises,
        progress.total_exercises,
        progress.completed_sets,
        progress.total_sets
    );
    let pending = session.pending_sets.len()
        + session.pending_cardio.len()
        + session.pending_flexibility.len()
        + session.pending_runs.len();
    if pending > 0 {
        println!("Pending records: {pending}");
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
