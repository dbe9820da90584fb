// ABOUTME: Main library entry point for the coachdesk workout logging core
// ABOUTME: Exposes the active-workout session machine, exercise classification, and ambient setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

#![deny(unsafe_code)]

//! # Coachdesk
//!
//! In-memory core of an active workout: while a client logs a session, the
//! session machine tracks each exercise card's expanded flag, its logging
//! input (strength sets, cardio, flexibility, or run data), the display order,
//! and the records staged for persistence.
//!
//! ## Architecture
//!
//! - **Workout**: classification, the session state machine, drafts, and staging
//! - **Models**: exercise assignments, log entries, and pending records (from `coachdesk-core`)
//! - **Config**: environment-driven session configuration
//! - **Logging**: `tracing` subscriber setup and structured session events
//!
//! Fetching workouts, persisting logged data, and rendering are left to the
//! host application, which talks to the machine only through events.
//!
//! ## Example Usage
//!
//! ```rust
//! use coachdesk::models::{EffectiveType, ExerciseAssignment, ExerciseDefinition};
//! use coachdesk::workout::{MachineState, SessionEvent, WorkoutSessionMachine};
//!
//! let mut machine = WorkoutSessionMachine::default();
//! let state = machine.send(SessionEvent::initialize(vec![
//!     ExerciseAssignment::new("a")
//!         .with_sets(3)
//!         .with_reps("8")
//!         .with_exercise(ExerciseDefinition::named("Back Squat")),
//! ]));
//!
//! assert_eq!(state, MachineState::Ready);
//! let entry = machine.context().entry("a").map(|entry| entry.effective_type());
//! assert_eq!(entry, Some(EffectiveType::Strength));
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants (re-exported from `coachdesk-core`)
pub mod constants;

/// Unified error handling (re-exported from `coachdesk-core`)
pub mod errors;

/// Structured logging setup and session log events
pub mod logging;

/// Session data models (re-exported from `coachdesk-core`)
pub mod models;

/// Active-workout session core
pub mod workout;
