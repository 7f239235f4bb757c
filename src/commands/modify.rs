// ABOUTME: Command reporting a completed profile modification
// ABOUTME: Carries the full seven-field snapshot, not only the fields that changed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandResult;
use crate::profile::ProfileSnapshot;
use fitprofile_core::constants::messages::MESSAGE_MODIFY_SUCCESS;

/// A profile modification that has been validated and persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyCommand {
    snapshot: ProfileSnapshot,
}

impl ModifyCommand {
    /// Wrap the post-update snapshot
    #[must_use]
    pub const fn new(snapshot: ProfileSnapshot) -> Self {
        Self { snapshot }
    }

    /// Profile after the modification
    #[must_use]
    pub const fn snapshot(&self) -> &ProfileSnapshot {
        &self.snapshot
    }

    /// Build the user feedback listing the whole profile
    #[must_use]
    pub fn execute(&self) -> CommandResult {
        CommandResult::new(format!("{MESSAGE_MODIFY_SUCCESS}\n{}", self.snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_lists_all_fields() {
        let snapshot = ProfileSnapshot {
            username: "Alice".into(),
            height: "1.70".into(),
            ..ProfileSnapshot::default()
        };
        let feedback = ModifyCommand::new(snapshot).execute().feedback_to_user;
        assert!(feedback.starts_with(MESSAGE_MODIFY_SUCCESS));
        assert!(feedback.contains("Username : Alice"));
        assert!(feedback.contains("Height : 1.70m"));
        assert!(feedback.contains("Gender : -"));
        assert_eq!(feedback.lines().count(), 8);
    }
}
