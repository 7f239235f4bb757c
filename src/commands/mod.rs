// ABOUTME: Command objects produced by the command parsers
// ABOUTME: Each command executes into a CommandResult carrying user feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Select the current workout by index
pub mod current;

/// Report a completed profile modification
pub mod modify;

pub use current::CurrentCommand;
pub use modify::ModifyCommand;

use std::fmt;

/// Outcome of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback_to_user: String,
}

impl CommandResult {
    /// Create a result with the given feedback
    #[must_use]
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.feedback_to_user)
    }
}
