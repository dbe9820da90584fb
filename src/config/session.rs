// ABOUTME: Session behaviour configuration loaded from environment variables
// ABOUTME: Controls draft trust policy and the initial expanded state of exercise cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::session::{env_vars, DEFAULT_EXPANDED};
use crate::errors::{AppError, AppResult};

/// How a supplied draft is treated at initialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftPolicy {
    /// Accept a non-empty draft verbatim
    #[default]
    Trust,
    /// Validate the draft against the workout and fall back to fresh classification on failure
    Strict,
}

impl FromStr for DraftPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "trust" => Ok(Self::Trust),
            "strict" => Ok(Self::Strict),
            _ => Err(AppError::config_invalid(
                env_vars::DRAFT_POLICY,
                value,
                "trust|strict",
            )),
        }
    }
}

impl fmt::Display for DraftPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trust => f.write_str("trust"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Workout session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Draft handling at initialization
    pub draft_policy: DraftPolicy,
    /// Expanded flag given to freshly seeded entries
    pub default_expanded: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            draft_policy: DraftPolicy::Trust,
            default_expanded: DEFAULT_EXPANDED,
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unrecognised value
    pub fn from_env() -> AppResult<Self> {
        let draft_policy = match env::var(env_vars::DRAFT_POLICY) {
            Ok(value) => value.parse()?,
            Err(_) => DraftPolicy::default(),
        };

        let default_expanded = match env::var(env_vars::DEFAULT_EXPANDED) {
            Ok(value) => parse_bool(env_vars::DEFAULT_EXPANDED, &value)?,
            Err(_) => DEFAULT_EXPANDED,
        };

        Ok(Self {
            draft_policy,
            default_expanded,
        })
    }

    /// Use a specific draft policy
    #[must_use]
    pub const fn with_draft_policy(mut self, draft_policy: DraftPolicy) -> Self {
        self.draft_policy = draft_policy;
        self
    }

    /// Use a specific initial expanded flag
    #[must_use]
    pub const fn with_default_expanded(mut self, default_expanded: bool) -> Self {
        self.default_expanded = default_expanded;
        self
    }
}

fn parse_bool(variable: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::config_invalid(variable, value, "true|false")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_policy_parse_is_case_insensitive() {
        assert_eq!("STRICT".parse::<DraftPolicy>().unwrap(), DraftPolicy::Strict);
        assert_eq!(" trust ".parse::<DraftPolicy>().unwrap(), DraftPolicy::Trust);
        assert!("lenient".parse::<DraftPolicy>().is_err());
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("X", "yes").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }
}
