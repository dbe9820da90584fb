// ABOUTME: Records staged for the persistence flusher before they reach durable storage
// ABOUTME: One record type per logging shape (sets, cardio, flexibility, runs)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed strength set awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSet {
    /// Assignment the set belongs to
    pub exercise_id: String,
    /// Library exercise, if any
    pub exercise_ref_id: Option<String>,
    /// 1-based set number
    pub set_number: u32,
    /// Weight as typed
    pub weight: String,
    /// Reps as typed
    pub reps: String,
    /// When the record was staged
    pub logged_at: DateTime<Utc>,
}

/// A completed cardio entry awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCardio {
    /// Assignment the entry belongs to
    pub exercise_id: String,
    /// Library exercise, if any
    pub exercise_ref_id: Option<String>,
    /// Distance as typed
    pub distance: String,
    /// Duration as typed
    pub duration: String,
    /// Location as typed
    pub location: String,
    /// When the record was staged
    pub logged_at: DateTime<Utc>,
}

/// A completed flexibility entry awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingFlexibility {
    /// Assignment the entry belongs to
    pub exercise_id: String,
    /// Library exercise, if any
    pub exercise_ref_id: Option<String>,
    /// Duration as typed
    pub duration: String,
    /// When the record was staged
    pub logged_at: DateTime<Utc>,
}

/// A completed run awaiting persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRun {
    /// Assignment the run belongs to
    pub exercise_id: String,
    /// Library exercise, if any
    pub exercise_ref_id: Option<String>,
    /// Distance as typed
    pub distance: String,
    /// Duration as typed
    pub duration: String,
    /// Route or venue
    pub location: String,
    /// When the record was staged
    pub logged_at: DateTime<Utc>,
}
