// ABOUTME: Re-exports command modules for coachdesk-cli
// ABOUTME: Provides the classify and replay commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachdesk Contributors

pub mod classify;
pub mod replay;
