// ABOUTME: Exercise definition and workout assignment records supplied by the workout loader
// ABOUTME: Includes declared exercise type parsing and lenient decoding of rep targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::constants::classification::declared_types;

/// Exercise type as declared on the exercise definition
///
/// Coaches fill this field by hand, so anything outside the known set is kept
/// verbatim in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeclaredExerciseType {
    /// Strength training
    Strength,
    /// Bodyweight training
    Bodyweight,
    /// Cardio
    Cardio,
    /// Flexibility / mobility
    Flexibility,
    /// Any other declared value
    Other(String),
}

impl DeclaredExerciseType {
    /// Wire name of this type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Strength => declared_types::STRENGTH,
            Self::Bodyweight => declared_types::BODYWEIGHT,
            Self::Cardio => declared_types::CARDIO,
            Self::Flexibility => declared_types::FLEXIBILITY,
            Self::Other(value) => value,
        }
    }
}

impl From<String> for DeclaredExerciseType {
    fn from(value: String) -> Self {
        match value.as_str() {
            declared_types::STRENGTH => Self::Strength,
            declared_types::BODYWEIGHT => Self::Bodyweight,
            declared_types::CARDIO => Self::Cardio,
            declared_types::FLEXIBILITY => Self::Flexibility,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for DeclaredExerciseType {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<DeclaredExerciseType> for String {
    fn from(value: DeclaredExerciseType) -> Self {
        match value {
            DeclaredExerciseType::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for DeclaredExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise definition from the exercise library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDefinition {
    /// Library identity
    #[serde(default)]
    pub id: Option<String>,
    /// Free-text display name
    #[serde(default)]
    pub name: Option<String>,
    /// Declared type, if the coach set one
    #[serde(default)]
    pub exercise_type: Option<DeclaredExerciseType>,
    /// Free-text muscle group
    #[serde(default)]
    pub muscle_group: Option<String>,
}

impl ExerciseDefinition {
    /// Definition with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the library identity
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the declared type
    #[must_use]
    pub fn with_type(mut self, exercise_type: impl Into<DeclaredExerciseType>) -> Self {
        self.exercise_type = Some(exercise_type.into());
        self
    }

    /// Set the muscle group
    #[must_use]
    pub fn with_muscle_group(mut self, muscle_group: impl Into<String>) -> Self {
        self.muscle_group = Some(muscle_group.into());
        self
    }

    /// Lower-cased name, empty when the definition has none
    #[must_use]
    pub fn normalized_name(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }

    /// Lower-cased muscle group, empty when the definition has none
    #[must_use]
    pub fn normalized_muscle_group(&self) -> String {
        self.muscle_group
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// One exercise prescribed within a workout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseAssignment {
    /// Assignment identity; records without one are skipped at initialization
    #[serde(default)]
    pub id: Option<String>,
    /// Position within the workout, accepted as a number or a numeric string
    #[serde(default, deserialize_with = "deserialize_order_index")]
    pub order_index: Option<i64>,
    /// Prescribed set count, accepted as a number or a numeric string
    #[serde(default, deserialize_with = "deserialize_sets")]
    pub sets: Option<i64>,
    /// Prescribed rep target, accepted as a string or a number
    #[serde(default, deserialize_with = "deserialize_reps")]
    pub reps: Option<String>,
    /// Exercise definition, absent until the library lookup resolves
    #[serde(default)]
    pub exercise: Option<ExerciseDefinition>,
}

impl ExerciseAssignment {
    /// Assignment with only an identity
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the order index
    #[must_use]
    pub fn with_order_index(mut self, order_index: i64) -> Self {
        self.order_index = Some(order_index);
        self
    }

    /// Set the prescribed set count
    #[must_use]
    pub fn with_sets(mut self, sets: i64) -> Self {
        self.sets = Some(sets);
        self
    }

    /// Set the prescribed rep target
    #[must_use]
    pub fn with_reps(mut self, reps: impl Into<String>) -> Self {
        self.reps = Some(reps.into());
        self
    }

    /// Attach the exercise definition
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseDefinition) -> Self {
        self.exercise = Some(exercise);
        self
    }

    /// Identity when present and non-blank
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepsValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Unsupported(serde_json::Value),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
    Unsupported(serde_json::Value),
}

impl IntegerValue {
    fn into_integer(self, field: &str) -> Option<i64> {
        let parsed = match &self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(value) => whole_number(*value),
            Self::Text(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
            }
            Self::Unsupported(_) => None,
        };
        if parsed.is_none() {
            let raw = match self {
                Self::Text(text) => text,
                Self::Unsupported(value) => value.to_string(),
                Self::Decimal(value) => value.to_string(),
                Self::Integer(value) => value.to_string(),
            };
            warn!(
                assignment.field = field,
                assignment.value = %raw,
                "Ignoring unparseable assignment value"
            );
        }
        parsed
    }
}

// Largest magnitude at which every integer is exactly representable as f64
const MAX_EXACT_FLOAT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn whole_number(value: f64) -> Option<i64> {
    let in_range = value.abs() < MAX_EXACT_FLOAT_INTEGER;
    (value.is_finite() && in_range && value.fract().abs() < f64::EPSILON).then_some(value as i64)
}

fn deserialize_sets<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IntegerValue>::deserialize(deserializer)?;
    Ok(value.and_then(|sets| sets.into_integer("sets")))
}

fn deserialize_order_index<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IntegerValue>::deserialize(deserializer)?;
    Ok(value.and_then(|order_index| order_index.into_integer("order_index")))
}

fn deserialize_reps<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RepsValue>::deserialize(deserializer)?;
    Ok(value.and_then(|reps| match reps {
        RepsValue::Text(text) => Some(text),
        RepsValue::Integer(count) => Some(count.to_string()),
        RepsValue::Decimal(count) => Some(count.to_string()),
        RepsValue::Unsupported(raw) => {
            warn!(
                assignment.field = "reps",
                assignment.value = %raw,
                "Ignoring unparseable assignment value"
            );
            None
        }
    }))
}

/// Decode assignment records one at a time
///
/// A record that does not decode is logged and skipped so the rest of the
/// workout still loads.
#[must_use]
pub fn decode_assignments(records: Vec<serde_json::Value>) -> Vec<ExerciseAssignment> {
    records
        .into_iter()
        .enumerate()
        .filter_map(
            |(position, record)| match serde_json::from_value::<ExerciseAssignment>(record) {
                Ok(assignment) => Some(assignment),
                Err(error) => {
                    warn!(
                        record.position = position,
                        record.error = %error,
                        "Skipping undecodable exercise assignment"
                    );
                    None
                }
            },
        )
        .collect()
}

/// Serde adapter for assignment lists that skips undecodable records
///
/// # Errors
///
/// Fails only when the value is not a JSON array (or `null`)
pub fn deserialize_assignment_list<'de, D>(
    deserializer: D,
) -> Result<Vec<ExerciseAssignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(decode_assignments(records.unwrap_or_default()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_type_parses_known_and_other() {
        assert_eq!(
            DeclaredExerciseType::from("cardio"),
            DeclaredExerciseType::Cardio
        );
        assert_eq!(
            DeclaredExerciseType::from("Cardio"),
            DeclaredExerciseType::Other("Cardio".to_owned())
        );
    }

    #[test]
    fn test_assignment_accepts_numeric_reps() {
        let json = r#"{"id":"a","sets":3,"reps":8,"exercise":{"name":"Squat","exercise_type":"strength"}}"#;
        let assignment: ExerciseAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.reps.as_deref(), Some("8"));
        assert_eq!(
            assignment.exercise.unwrap().exercise_type,
            Some(DeclaredExerciseType::Strength)
        );
    }

    #[test]
    fn test_assignment_accepts_numeric_strings() {
        let json = r#"{"id":"a","order_index":" 2 ","sets":"3","reps":"8"}"#;
        let assignment: ExerciseAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.order_index, Some(2));
        assert_eq!(assignment.sets, Some(3));

        let json = r#"{"id":"a","order_index":1.0,"sets":4.0}"#;
        let assignment: ExerciseAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.order_index, Some(1));
        assert_eq!(assignment.sets, Some(4));
    }

    #[test]
    fn test_unparseable_numbers_become_missing() {
        let json = r#"{"id":"a","order_index":"first","sets":[3],"reps":{"min":8}}"#;
        let assignment: ExerciseAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.identity(), Some("a"));
        assert_eq!(assignment.order_index, None);
        assert_eq!(assignment.sets, None);
        assert_eq!(assignment.reps, None);

        let json = r#"{"id":"b","sets":2.5,"order_index":true}"#;
        let assignment: ExerciseAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.sets, None);
        assert_eq!(assignment.order_index, None);
    }

    #[test]
    fn test_decode_assignments_skips_bad_records() {
        let records: Vec<serde_json::Value> = serde_json::from_str(
            r#"[{"id":"a","sets":"3"},{"id":42},"not a record",{"id":"b","exercise":{"name":"Morning Run"}}]"#,
        )
        .unwrap();
        let assignments = decode_assignments(records);
        let ids: Vec<_> = assignments.iter().filter_map(ExerciseAssignment::identity).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(assignments[0].sets, Some(3));
    }

    #[test]
    fn test_assignment_missing_fields_default() {
        let assignment: ExerciseAssignment = serde_json::from_str("{}").unwrap();
        assert!(assignment.identity().is_none());
        assert!(assignment.reps.is_none());
        assert!(assignment.exercise.is_none());
    }

    #[test]
    fn test_blank_identity_is_missing() {
        assert!(ExerciseAssignment::new("  ").identity().is_none());
        assert_eq!(ExerciseAssignment::new("x").identity(), Some("x"));
    }
}
