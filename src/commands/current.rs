// ABOUTME: Command selecting the current workout by its list index
// ABOUTME: Holds only the parsed one-based index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandResult;
use crate::parser::Index;

/// Select the workout at `target_index` as the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentCommand {
    target_index: Index,
}

impl CurrentCommand {
    /// Create for a parsed index
    #[must_use]
    pub const fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    /// Index of the selected workout
    #[must_use]
    pub const fn target_index(&self) -> Index {
        self.target_index
    }

    /// Build the user feedback for the selection
    #[must_use]
    pub fn execute(&self) -> CommandResult {
        CommandResult::new(format!(
            "Selected workout {} as current",
            self.target_index
        ))
    }
}
