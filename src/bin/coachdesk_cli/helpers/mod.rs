// ABOUTME: Helper modules for coachdesk-cli
// ABOUTME: File loading and terminal display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

pub mod display;
pub mod files;
