// ABOUTME: Integration tests for the coachdesk-cli binary
// ABOUTME: Runs classify and replay against temporary JSON files and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const WORKOUT_JSON: &str = r#"[
    {"id": "a", "order_index": 1, "sets": 3, "reps": "8", "exercise": {"id": "lib-squat", "name": "Squat"}},
    {"id": "b", "order_index": 0, "exercise": {"name": "Morning Run"}}
]"#;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_coachdesk-cli"));
    command
        .env_remove("COACHDESK_DRAFT_POLICY")
        .env_remove("COACHDESK_DEFAULT_EXPANDED")
        .env("RUST_LOG", "off");
    command
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_classify_prints_type_and_signal() {
    let output = cli()
        .args(["classify", "--name", "Incline Bench Press"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["effective_type"], "strength");
    assert_eq!(json["signal"], "strength_heuristic");
}

#[test]
fn test_classify_with_declared_type() {
    let output = cli()
        .args(["classify", "--name", "Interval Session", "--exercise-type", "cardio"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["effective_type"], "cardio");
}

#[test]
fn test_classify_rejects_blank_name() {
    let output = cli().args(["classify", "--name", "  "]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], "INVALID_INPUT");
}

#[test]
fn test_replay_initializes_from_workout() {
    let dir = TempDir::new().unwrap();
    let workout = write(dir.path(), "workout.json", WORKOUT_JSON);

    let output = cli().args(["replay", "--workout", &workout]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["state"], "ready");
    assert_eq!(json["session"]["initialized"], true);
    assert_eq!(
        json["session"]["sortedExerciseIds"],
        serde_json::json!(["b", "a"])
    );
    let squat = &json["session"]["exerciseStates"]["a"];
    assert_eq!(squat["effectiveType"], "strength");
    assert_eq!(squat["exerciseRefId"], "lib-squat");
    assert_eq!(squat["sets"].as_array().unwrap().len(), 3);
    assert_eq!(
        json["session"]["exerciseStates"]["b"]["effectiveType"],
        "running"
    );
    assert_eq!(json["progress"]["total_exercises"], 2);
}

#[test]
fn test_replay_applies_events_and_saves_draft() {
    let dir = TempDir::new().unwrap();
    let workout = write(dir.path(), "workout.json", WORKOUT_JSON);
    let events = write(
        dir.path(),
        "events.json",
        r#"[{"type": "TOGGLE_EXERCISE_EXPANDED", "exerciseId": "a"}]"#,
    );
    let draft_path = dir.path().join("draft.json");
    let draft_arg = draft_path.display().to_string();

    let output = cli()
        .args([
            "replay",
            "--workout",
            &workout,
            "--events",
            &events,
            "--save-draft",
            &draft_arg,
            "--workout-id",
            "w-7",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["session"]["exerciseStates"]["a"]["expanded"],
        false
    );

    let draft: Value = serde_json::from_str(&fs::read_to_string(&draft_path).unwrap()).unwrap();
    assert_eq!(draft["workoutId"], "w-7");
    assert_eq!(draft["exerciseStates"]["a"]["expanded"], false);

    // Resuming the saved draft keeps the collapsed card
    let resumed = cli()
        .args(["replay", "--workout", &workout, "--draft", &draft_arg])
        .output()
        .unwrap();
    assert!(resumed.status.success());
    assert_eq!(
        stdout_json(&resumed)["session"]["exerciseStates"]["a"]["expanded"],
        false
    );
}

#[test]
fn test_replay_summary_format() {
    let dir = TempDir::new().unwrap();
    let workout = write(dir.path(), "workout.json", WORKOUT_JSON);

    let output = cli()
        .args(["replay", "--workout", &workout, "--format", "summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("State: ready"));
    assert!(stdout.contains("0/3 sets"));
    assert!(stdout.contains("Exercises: 0/2 complete"));
}

#[test]
fn test_replay_missing_workout_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json").display().to_string();

    let output = cli().args(["replay", "--workout", &missing]).output().unwrap();
    assert_eq!(output.status.code(), Some(3));

    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(error["error"]["resource_id"], missing);
}

#[test]
fn test_replay_rejects_malformed_workout() {
    let dir = TempDir::new().unwrap();
    let workout = write(dir.path(), "workout.json", "{ not json");

    let output = cli().args(["replay", "--workout", &workout]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], "SERIALIZATION_ERROR");
}

#[test]
fn test_invalid_draft_policy_is_config_error() {
    let dir = TempDir::new().unwrap();
    let workout = write(dir.path(), "workout.json", WORKOUT_JSON);

    let output = cli()
        .env("COACHDESK_DRAFT_POLICY", "lenient")
        .args(["replay", "--workout", &workout])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));

    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], "CONFIG_INVALID");
}

#[test]
fn test_classify_ignores_session_config() {
    let output = cli()
        .env("COACHDESK_DRAFT_POLICY", "lenient")
        .args(["classify", "--name", "Evening Run"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["effective_type"], "running");
}

#[test]
fn test_replay_skips_malformed_records() {
    let dir = TempDir::new().unwrap();
    let workout = write(
        dir.path(),
        "workout.json",
        r#"[
            {"id": "a", "order_index": "1", "sets": "3", "reps": 8, "exercise": {"name": "Squat"}},
            {"id": 17, "exercise": {"name": "Row"}},
            {"id": "b", "order_index": 0, "sets": "lots", "exercise": {"name": "Morning Run"}}
        ]"#,
    );

    let output = cli().args(["replay", "--workout", &workout]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json["session"]["sortedExerciseIds"],
        serde_json::json!(["b", "a"])
    );
    assert_eq!(
        json["session"]["exerciseStates"]["a"]["sets"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}
