// ABOUTME: Per-exercise logging state held by an active workout session
// ABOUTME: Tagged payload union keyed by effective type, plus set seeding helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::session::{DEFAULT_EXPANDED, MAX_SEEDED_SETS, MIN_SEEDED_SETS};

/// Logging shape an exercise is recorded with for the duration of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveType {
    /// Weight/reps per set
    Strength,
    /// Distance, duration, and location
    Cardio,
    /// Duration only
    Flexibility,
    /// Distance, duration, and location for runs
    Running,
}

impl EffectiveType {
    /// Lower-case wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for EffectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged (or to-be-logged) strength set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// 1-based position within the exercise
    pub set_number: u32,
    /// Weight as typed by the user
    pub weight: String,
    /// Reps as typed by the user
    pub reps: String,
    /// Whether the user ticked the set off
    pub completed: bool,
}

impl SetEntry {
    /// Number of sets seeded for a prescribed count
    ///
    /// Clamped to `MIN_SEEDED_SETS..=MAX_SEEDED_SETS`.
    #[must_use]
    pub fn seeded_count(count: i64) -> u32 {
        let clamped = count.clamp(i64::from(MIN_SEEDED_SETS), i64::from(MAX_SEEDED_SETS));
        u32::try_from(clamped).unwrap_or(MIN_SEEDED_SETS)
    }

    /// Seed sets numbered `1..=N` for a prescribed count, each carrying the rep target
    ///
    /// `N` is [`SetEntry::seeded_count`] of `count`.
    #[must_use]
    pub fn seeded(count: i64, reps: &str) -> Vec<Self> {
        (1..=Self::seeded_count(count))
            .map(|set_number| Self {
                set_number,
                weight: String::new(),
                reps: reps.to_owned(),
                completed: false,
            })
            .collect()
    }
}

/// Cardio input state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardioData {
    /// Distance as typed
    pub distance: String,
    /// Duration as typed
    pub duration: String,
    /// Where the session happened
    pub location: String,
    /// Whether the user marked it done
    pub completed: bool,
}

/// Flexibility input state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexibilityData {
    /// Duration as typed
    pub duration: String,
    /// Whether the user marked it done
    pub completed: bool,
}

/// Run input state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunData {
    /// Distance as typed
    pub distance: String,
    /// Duration as typed
    pub duration: String,
    /// Route or venue
    pub location: String,
    /// Whether the user marked it done
    pub completed: bool,
}

/// Exactly one input shape per exercise, selected by effective type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effectiveType", rename_all = "lowercase")]
pub enum ExercisePayload {
    /// Strength sets
    Strength {
        /// Sets numbered `1..=N`
        sets: Vec<SetEntry>,
    },
    /// Cardio entry
    Cardio {
        /// Cardio fields
        #[serde(rename = "cardioData")]
        cardio_data: CardioData,
    },
    /// Flexibility entry
    Flexibility {
        /// Flexibility fields
        #[serde(rename = "flexibilityData")]
        flexibility_data: FlexibilityData,
    },
    /// Run entry
    Running {
        /// Run fields
        #[serde(rename = "runData")]
        run_data: RunData,
    },
}

impl ExercisePayload {
    /// Empty payload for `effective_type`; strength seeds `sets` sets with the rep target
    #[must_use]
    pub fn seed(effective_type: EffectiveType, sets: i64, reps: &str) -> Self {
        match effective_type {
            EffectiveType::Strength => Self::Strength {
                sets: SetEntry::seeded(sets, reps),
            },
            EffectiveType::Cardio => Self::Cardio {
                cardio_data: CardioData::default(),
            },
            EffectiveType::Flexibility => Self::Flexibility {
                flexibility_data: FlexibilityData::default(),
            },
            EffectiveType::Running => Self::Running {
                run_data: RunData::default(),
            },
        }
    }

    /// Effective type this payload belongs to
    #[must_use]
    pub const fn effective_type(&self) -> EffectiveType {
        match self {
            Self::Strength { .. } => EffectiveType::Strength,
            Self::Cardio { .. } => EffectiveType::Cardio,
            Self::Flexibility { .. } => EffectiveType::Flexibility,
            Self::Running { .. } => EffectiveType::Running,
        }
    }
}

/// Live logging state of one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLogEntry {
    /// Library exercise this entry logs, absent for ad hoc exercises
    #[serde(default)]
    pub exercise_ref_id: Option<String>,
    /// Whether the card is expanded in the UI
    pub expanded: bool,
    /// Input state for the effective type
    #[serde(flatten)]
    pub payload: ExercisePayload,
}

impl ExerciseLogEntry {
    /// New expanded entry
    #[must_use]
    pub fn new(exercise_ref_id: Option<String>, payload: ExercisePayload) -> Self {
        Self {
            exercise_ref_id,
            expanded: DEFAULT_EXPANDED,
            payload,
        }
    }

    /// Override the initial expanded flag
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Effective type, derived from the payload variant
    #[must_use]
    pub const fn effective_type(&self) -> EffectiveType {
        self.payload.effective_type()
    }

    /// Strength sets, if this is a strength entry
    #[must_use]
    pub fn sets(&self) -> Option<&[SetEntry]> {
        match &self.payload {
            ExercisePayload::Strength { sets } => Some(sets),
            _ => None,
        }
    }
}

/// Exercise states keyed by assignment id
pub type ExerciseStates = BTreeMap<String, ExerciseLogEntry>;
