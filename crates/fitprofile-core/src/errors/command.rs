// ABOUTME: Error taxonomy for profile command parsing and execution
// ABOUTME: Distinguishes malformed commands, field validation, persistence, and index errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use crate::constants::messages;
use crate::models::ProfileField;
use thiserror::Error;

/// Failure to read a one-based index from command text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexParseError {
    /// Input is empty, signed, non-numeric, zero, or too large
    #[error("{}", messages::MESSAGE_INVALID_INDEX)]
    NotPositiveInteger {
        /// The trimmed input that was rejected
        input: String,
    },
}

/// Errors raised while turning command text into a profile change.
///
/// Malformed commands and validation failures never touch the profile;
/// persistence failures are reported after validation succeeded but before
/// the new values are committed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No recognised prefix was given, or text appeared before the first prefix
    #[error("{}", messages::invalid_command_format(usage))]
    Malformed {
        /// Usage text of the command that was malformed
        usage: &'static str,
    },

    /// A single field failed its validation rule
    #[error("{}", messages::invalid_field(field.invalid_message(), field.valid_message()))]
    Validation {
        /// Field whose value was rejected
        field: ProfileField,
        /// The raw value as typed by the user
        value: String,
    },

    /// The profile could not be written to durable storage
    #[error("Profile could not be saved: {source}")]
    Persistence {
        /// Underlying storage failure
        #[source]
        source: AppError,
    },

    /// The argument of an index-based command was not a positive integer
    #[error("{}", messages::invalid_command_format(usage))]
    IndexFormat {
        /// Usage text of the index-based command
        usage: &'static str,
        /// Underlying index parse failure
        #[source]
        source: IndexParseError,
    },
}

impl CommandError {
    /// Create a malformed-command error for the given usage text
    #[must_use]
    pub const fn malformed(usage: &'static str) -> Self {
        Self::Malformed { usage }
    }

    /// Create a validation error for a rejected field value
    #[must_use]
    pub fn validation(field: ProfileField, value: impl Into<String>) -> Self {
        Self::Validation {
            field,
            value: value.into(),
        }
    }

    /// Field that failed validation, if this is a validation error
    #[must_use]
    pub const fn field(&self) -> Option<ProfileField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Error code used when this error crosses into the application layer
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Malformed { .. } | Self::IndexFormat { .. } => ErrorCode::InvalidFormat,
            Self::Validation { .. } => ErrorCode::InvalidInput,
            Self::Persistence { .. } => ErrorCode::StorageError,
        }
    }
}

impl From<CommandError> for AppError {
    fn from(error: CommandError) -> Self {
        let code = error.code();
        Self::new(code, error.to_string()).with_source(error)
    }
}
