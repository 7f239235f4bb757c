// ABOUTME: In-process profile store for tests and ephemeral sessions
// ABOUTME: Counts writes and can be switched to fail them on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileRecord, ProfileStore};
use fitprofile_core::errors::{AppError, AppResult};

/// Keeps the last saved record in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<ProfileRecord>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `record`
    #[must_use]
    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: Some(record),
            ..Self::default()
        }
    }

    /// Number of successful saves
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Last saved record
    #[must_use]
    pub const fn record(&self) -> Option<&ProfileRecord> {
        self.record.as_ref()
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> AppResult<Option<ProfileRecord>> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &ProfileRecord) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::storage("memory store is set to fail writes"));
        }
        self.record = Some(record.clone());
        self.writes += 1;
        Ok(())
    }
}
