// ABOUTME: Logging configuration and structured logging setup for workout sessions
// ABOUTME: Configures log levels, formatters, and structured session lifecycle events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! Structured logging built on `tracing`

use std::env;
use std::io;

use serde_json::json;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::COACHDESK.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::COACHDESK.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level (the CLI's `--verbose` uses this)
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Override the output format
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the filter applied to every layer
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"))
            .add_directive(
                format!("coachdesk={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// Log output goes to stderr so command output on stdout stays machine-readable.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;
        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread
            }
        });

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {}",
            config_summary
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}

/// Structured events emitted by the workout session machine
pub struct SessionLogger;

impl SessionLogger {
    /// Session populated by an `INITIALIZE` event
    pub fn log_initialized(source: &str, exercise_count: usize, initialized: bool) {
        info!(
            session.source = %source,
            session.exercise_count = exercise_count,
            session.initialized = initialized,
            "Workout session initialized"
        );
    }

    /// Assignment skipped while building the session
    pub fn log_record_skipped(position: usize, exercise_id: Option<&str>, reason: &str) {
        warn!(
            record.position = position,
            record.exercise_id = exercise_id.unwrap_or("<missing>"),
            record.reason = %reason,
            "Skipping exercise assignment"
        );
    }

    /// Prescribed set count outside the seeding range
    pub fn log_sets_clamped(exercise_id: &str, prescribed: i64, seeded: u32) {
        warn!(
            exercise.id = %exercise_id,
            sets.prescribed = prescribed,
            sets.seeded = seeded,
            "Prescribed set count out of range, clamping"
        );
    }

    /// Effective type chosen for an exercise
    pub fn log_classified(exercise_id: &str, effective_type: &str, signal: &str) {
        debug!(
            exercise.id = %exercise_id,
            exercise.effective_type = %effective_type,
            exercise.signal = %signal,
            "Exercise classified"
        );
    }

    /// Machine state change
    pub fn log_transition(from: &str, to: &str, event: &str) {
        debug!(
            machine.from = %from,
            machine.to = %to,
            machine.event = %event,
            "Session machine transition"
        );
    }

    /// Event received in a state that does not handle it
    pub fn log_event_ignored(state: &str, event: &str) {
        debug!(
            machine.state = %state,
            machine.event = %event,
            "Event ignored in current state"
        );
    }

    /// Toggle for an id the session does not contain
    pub fn log_unknown_toggle(exercise_id: &str) {
        debug!(
            exercise.id = %exercise_id,
            "Toggle ignored for unknown exercise"
        );
    }

    /// Draft rejected by strict validation
    pub fn log_draft_rejected(error: &AppError) {
        warn!(
            draft.error_code = ?error.code,
            draft.resource_id = error.context.resource_id.as_deref().unwrap_or(""),
            "Draft rejected, classifying exercises from scratch: {}",
            error.message
        );
    }
}
