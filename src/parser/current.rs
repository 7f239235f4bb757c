// ABOUTME: Parser for the index-based `current` command
// ABOUTME: Wraps index parse failures in a malformed-command error carrying the usage text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::index::parse_index;
use crate::commands::CurrentCommand;
use fitprofile_core::constants::messages::CURRENT_USAGE;
use fitprofile_core::errors::CommandError;

/// Parses the argument of `current INDEX`
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentCommandParser;

impl CurrentCommandParser {
    /// Parse `args` into a [`CurrentCommand`]
    pub fn parse(self, args: &str) -> Result<CurrentCommand, CommandError> {
        parse_index(args)
            .map(CurrentCommand::new)
            .map_err(|source| CommandError::IndexFormat {
                usage: CURRENT_USAGE,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitprofile_core::constants::messages;
    use fitprofile_core::errors::IndexParseError;
    use std::error::Error as _;

    #[test]
    fn test_valid_index() {
        let command = CurrentCommandParser.parse(" 3").unwrap();
        assert_eq!(command.target_index().one_based(), 3);
    }

    #[test]
    fn test_invalid_index_wraps_cause() {
        let error = CurrentCommandParser.parse("zero").unwrap_err();
        assert_eq!(
            error.to_string(),
            messages::invalid_command_format(messages::CURRENT_USAGE)
        );
        let cause = error
            .source()
            .and_then(|s| s.downcast_ref::<IndexParseError>())
            .unwrap();
        assert_eq!(cause.to_string(), messages::MESSAGE_INVALID_INDEX);
    }
}
