// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Command syntax, user-facing messages, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.
//! Message strings are part of the observable contract of the interpreter,
//! so tests compare against these constants directly.

/// Command prefixes recognised by the argument tokenizer
pub mod syntax;

/// Validation, usage, and feedback messages
pub mod messages;

/// Accepted ranges for numeric profile fields
pub mod limits;

/// Storage defaults
pub mod storage {
    /// Application directory name under the platform data directory
    pub const APP_DIR_NAME: &str = "fitprofile";
    /// Default profile file name
    pub const DEFAULT_PROFILE_FILE: &str = "profile.json";
}

/// Service identification for structured logging
pub mod service_names {
    /// Binary name of the interactive shell
    pub const FITPROFILE_CLI: &str = "fitprofile-cli";
}
