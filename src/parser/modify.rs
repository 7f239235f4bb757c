// ABOUTME: Parser for the `modify` command
// ABOUTME: Runs the profile update pipeline and wraps the resulting snapshot in a command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::commands::ModifyCommand;
use crate::profile::ProfileUpdater;
use crate::storage::ProfileStore;
use fitprofile_core::errors::CommandError;

/// Parses `modify` arguments against the live profile.
///
/// Parsing is not side-effect free: a successful parse has already validated,
/// persisted, and committed the change. The returned command only reports it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifyCommandParser;

impl ModifyCommandParser {
    /// Apply `args` through `updater` and build the resulting command
    pub fn parse<S: ProfileStore>(
        self,
        args: &str,
        updater: &mut ProfileUpdater<S>,
    ) -> Result<ModifyCommand, CommandError> {
        updater.update(args).map(ModifyCommand::new)
    }
}
