// ABOUTME: Keyword tables used to infer an exercise's logging type from free text
// ABOUTME: Name fragments, muscle-group fragments, and declared type names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

/// Name fragment that marks an exercise as a run ("running" contains it)
pub const RUNNING_NAME_FRAGMENT: &str = "run";

/// Lower-case name fragments that identify strength movements
pub const STRENGTH_NAME_KEYWORDS: &[&str] = &[
    "press", "bench", "squat", "curl", "row", "deadlift", "overhead", "barbell", "dumbbell",
    "machine", "cable", "pushup", "pullup", "chinup", "extension", "flexion", "raise", "fly",
    "flye", "lateral", "front", "pushdown",
];

/// Lower-case muscle-group fragments that identify strength movements
pub const STRENGTH_MUSCLE_GROUPS: &[&str] = &[
    "chest",
    "back",
    "leg",
    "arm",
    "shoulder",
    "tricep",
    "bicep",
    "quad",
    "hamstring",
];

/// Declared exercise type names
pub mod declared_types {
    /// Strength training
    pub const STRENGTH: &str = "strength";
    /// Bodyweight training (logged like strength)
    pub const BODYWEIGHT: &str = "bodyweight";
    /// Cardio
    pub const CARDIO: &str = "cardio";
    /// Flexibility / mobility
    pub const FLEXIBILITY: &str = "flexibility";
}
