// ABOUTME: One-based index parsing for index-based commands
// ABOUTME: Accepts only non-zero unsigned integers after trimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitprofile_core::errors::IndexParseError;
use std::fmt;
use std::num::NonZeroUsize;

/// Position of an item in a displayed list, counted from one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Create from a one-based position, `None` for zero
    #[must_use]
    pub fn from_one_based(position: usize) -> Option<Self> {
        NonZeroUsize::new(position).map(Self)
    }

    /// One-based position, as shown to users
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a one-based index, rejecting signs, zero, and non-digits
pub fn parse_index(raw: &str) -> Result<Index, IndexParseError> {
    let trimmed = raw.trim();
    let rejected = || IndexParseError::NotPositiveInteger {
        input: trimmed.to_owned(),
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(rejected());
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(rejected)
}
