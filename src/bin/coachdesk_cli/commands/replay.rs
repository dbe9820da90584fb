// ABOUTME: Replay command for coachdesk-cli
// ABOUTME: Initializes a session machine from files, applies recorded events, and prints the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::path::PathBuf;

use coachdesk::config::SessionConfig;
use coachdesk::errors::AppResult;
use coachdesk::models::decode_assignments;
use coachdesk::workout::{DraftSnapshot, SessionEvent, WorkoutSessionMachine};
use serde_json::{json, Value};
use tracing::info;

use crate::helpers::display::print_summary;
use crate::helpers::files::{read_json, write_text};
use crate::OutputFormat;

/// Input and output files for a replay
pub struct ReplayFiles {
    /// Workout assignments
    pub workout: PathBuf,
    /// Draft to resume
    pub draft: Option<PathBuf>,
    /// Events to apply
    pub events: Option<PathBuf>,
    /// Where to save the resulting draft
    pub save_draft: Option<PathBuf>,
}

/// Replay a session and print it
pub fn run(
    config: SessionConfig,
    files: &ReplayFiles,
    workout_id: Option<String>,
    format: OutputFormat,
) -> AppResult<()> {
    let exercise_list = decode_assignments(read_json::<Vec<Value>>(&files.workout)?);
    let draft = files
        .draft
        .as_deref()
        .map(read_json::<DraftSnapshot>)
        .transpose()?;
    let events: Vec<SessionEvent> = files
        .events
        .as_deref()
        .map(read_json)
        .transpose()?
        .unwrap_or_default();

    info!(
        exercises = exercise_list.len(),
        events = events.len(),
        draft = draft.is_some(),
        "Replaying workout session"
    );

    let mut machine = WorkoutSessionMachine::new(config);
    machine.send(SessionEvent::Initialize {
        exercise_list,
        draft_data: draft.map(|snapshot| snapshot.exercise_states),
    });
    let state = machine.send_all(events);

    if let Some(path) = &files.save_draft {
        let snapshot = machine.context().to_draft(workout_id);
        write_text(path, &snapshot.to_json()?)?;
        info!(path = %path.display(), "Draft saved");
    }

    let session = machine.context();
    match format {
        OutputFormat::Json => {
            let output = json!({
                "state": state,
                "session": session,
                "progress": session.progress(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Summary => print_summary(state, session),
    }
    Ok(())
}
