// ABOUTME: Infers the logging type of an exercise from its free-text name, declared type, and muscle group
// ABOUTME: Degrades through independent signals before defaulting to strength
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

//! # Exercise Classification
//!
//! Exercise metadata is populated by hand and is often incomplete, so the
//! effective type is decided by checking signals in a fixed order:
//!
//! 1. a name containing `run` is a run
//! 2. a declared `cardio` type is cardio
//! 3. a declared `flexibility` type is flexibility
//! 4. the strength heuristic (name keyword, muscle group, declared strength/bodyweight)
//! 5. anything else falls back to strength
//!
//! Classification is a pure function of the definition: the same record always
//! yields the same type.

use serde::Serialize;

use crate::constants::classification::{
    RUNNING_NAME_FRAGMENT, STRENGTH_MUSCLE_GROUPS, STRENGTH_NAME_KEYWORDS,
};
use crate::models::{DeclaredExerciseType, EffectiveType, ExerciseDefinition};

/// Which signal decided a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSignal {
    /// Name contains the running fragment
    RunningName,
    /// Declared type is cardio
    DeclaredCardio,
    /// Declared type is flexibility
    DeclaredFlexibility,
    /// Strength heuristic matched
    StrengthHeuristic,
    /// Nothing matched
    DefaultFallback,
}

/// Outcome of classifying one exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Effective logging type
    pub effective_type: EffectiveType,
    /// Signal that decided it
    pub signal: ClassificationSignal,
}

/// Classify an exercise, reporting which signal decided it
#[must_use]
pub fn classify_with_signal(exercise: Option<&ExerciseDefinition>) -> Classification {
    let name = exercise.map(ExerciseDefinition::normalized_name).unwrap_or_default();
    let declared = exercise.and_then(|definition| definition.exercise_type.as_ref());

    let (effective_type, signal) = if name.contains(RUNNING_NAME_FRAGMENT) {
        (EffectiveType::Running, ClassificationSignal::RunningName)
    } else if declared == Some(&DeclaredExerciseType::Cardio) {
        (EffectiveType::Cardio, ClassificationSignal::DeclaredCardio)
    } else if declared == Some(&DeclaredExerciseType::Flexibility) {
        (
            EffectiveType::Flexibility,
            ClassificationSignal::DeclaredFlexibility,
        )
    } else if is_strength_exercise(exercise) {
        (EffectiveType::Strength, ClassificationSignal::StrengthHeuristic)
    } else {
        (EffectiveType::Strength, ClassificationSignal::DefaultFallback)
    };

    Classification {
        effective_type,
        signal,
    }
}

/// Effective logging type for an exercise definition
#[must_use]
pub fn classify(exercise: Option<&ExerciseDefinition>) -> EffectiveType {
    classify_with_signal(exercise).effective_type
}

/// Strength heuristic
///
/// Returns `true` when the definition is absent, when the lower-cased name
/// contains a strength keyword, when the lower-cased muscle group contains a
/// strength muscle group, or when the declared type is `strength` or `bodyweight`.
#[must_use]
pub fn is_strength_exercise(exercise: Option<&ExerciseDefinition>) -> bool {
    let Some(definition) = exercise else {
        return true;
    };

    let name = definition.normalized_name();
    if STRENGTH_NAME_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
    {
        return true;
    }

    let muscle_group = definition.normalized_muscle_group();
    if STRENGTH_MUSCLE_GROUPS
        .iter()
        .any(|group| muscle_group.contains(group))
    {
        return true;
    }

    matches!(
        definition.exercise_type,
        Some(DeclaredExerciseType::Strength | DeclaredExerciseType::Bodyweight)
    )
}
