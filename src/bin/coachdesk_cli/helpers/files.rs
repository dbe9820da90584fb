// ABOUTME: JSON file loading and writing for coachdesk-cli
// ABOUTME: Attaches the offending path to any I/O or decoding error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

use std::fs;
use std::path::Path;

use coachdesk::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;

/// Read and decode a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let display = path.display().to_string();
    let contents =
        fs::read_to_string(path).map_err(|e| AppError::from(e).with_resource_id(&display))?;
    serde_json::from_str(&contents).map_err(|e| AppError::from(e).with_resource_id(display))
}

/// Write text to a file, replacing it
pub fn write_text(path: &Path, contents: &str) -> AppResult<()> {
    fs::write(path, contents)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))
}
