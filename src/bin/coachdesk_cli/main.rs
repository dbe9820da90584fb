// ABOUTME: coachdesk CLI - classify exercises and replay workout session events offline
// ABOUTME: Drives the session machine from JSON files and prints the resulting session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors
//!
//! Usage:
//! ```bash
//! # Show how an exercise would be logged
//! coachdesk-cli classify --name "Incline Bench Press" --muscle-group chest
//!
//! # Initialize from a workout file and print the session as JSON
//! coachdesk-cli replay --workout workout.json
//!
//! # Resume a draft, apply recorded events, and save a new draft
//! coachdesk-cli replay --workout workout.json --draft draft.json \
//!     --events events.json --save-draft next-draft.json --format summary
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use coachdesk::config::SessionConfig;
use coachdesk::constants::service_names;
use coachdesk::errors::{AppResult, ErrorResponse};
use coachdesk::logging::{LogFormat, LoggingConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "coachdesk-cli",
    about = "coachdesk workout session tools",
    long_about = "Classify exercises and replay active-workout session events from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a single exercise definition
    Classify {
        /// Exercise name
        #[arg(long)]
        name: String,

        /// Declared exercise type (strength, bodyweight, cardio, flexibility, ...)
        #[arg(long)]
        exercise_type: Option<String>,

        /// Muscle group
        #[arg(long)]
        muscle_group: Option<String>,
    },

    /// Initialize a session from files and apply recorded events
    Replay {
        /// JSON array of exercise assignments
        #[arg(long)]
        workout: PathBuf,

        /// Saved draft to resume
        #[arg(long)]
        draft: Option<PathBuf>,

        /// JSON array of session events applied after initialization
        #[arg(long)]
        events: Option<PathBuf>,

        /// Write the final exercise states to this file as a draft
        #[arg(long)]
        save_draft: Option<PathBuf>,

        /// Workout id recorded in a saved draft
        #[arg(long)]
        workout_id: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// How replay results are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full session as pretty JSON
    Json,
    /// Human-readable table of exercises
    Summary,
}

fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Classify {
            name,
            exercise_type,
            muscle_group,
        } => commands::classify::run(name, exercise_type, muscle_group),
        Command::Replay {
            workout,
            draft,
            events,
            save_draft,
            workout_id,
            format,
        } => commands::replay::run(
            SessionConfig::from_env()?,
            &commands::replay::ReplayFiles {
                workout,
                draft,
                events,
                save_draft,
            },
            workout_id,
            format,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let mut logging = LoggingConfig::from_env()
        .with_level(level)
        .with_format(LogFormat::Compact);
    logging.service_name = service_names::COACHDESK_CLI.to_owned();
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error.code = ?e.code, "Command failed: {}", e);
            let code = e.code.exit_code();
            let response = ErrorResponse::from(e);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
