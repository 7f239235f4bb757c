// ABOUTME: Single-writer service boundary around the profile update pipeline
// ABOUTME: Holds one lock across tokenize, validate, merge, persist, and commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shared access to one profile.
//!
//! [`ProfileUpdater`] assumes a single caller. When several callers share a
//! profile, every update must hold the same lock from parsing to commit,
//! otherwise two merges could interleave with their writes.

use crate::display::ProfileObserver;
use crate::profile::{ProfileSnapshot, ProfileUpdater};
use crate::storage::ProfileStore;
use fitprofile_core::errors::{AppError, AppResult};
use std::sync::{Mutex, MutexGuard};

/// Thread-safe handle to a profile updater
pub struct ProfileService<S: ProfileStore> {
    updater: Mutex<ProfileUpdater<S>>,
}

impl<S: ProfileStore> ProfileService<S> {
    /// Wrap an updater
    #[must_use]
    pub fn new(updater: ProfileUpdater<S>) -> Self {
        Self {
            updater: Mutex::new(updater),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, ProfileUpdater<S>>> {
        self.updater
            .lock()
            .map_err(|_| AppError::internal("profile lock poisoned by a panicked update"))
    }

    /// Apply `prefix/value` arguments while holding the writer lock
    pub fn update(&self, args: &str) -> AppResult<ProfileSnapshot> {
        let mut updater = self.lock()?;
        updater.update(args).map_err(AppError::from)
    }

    /// Current profile
    pub fn snapshot(&self) -> AppResult<ProfileSnapshot> {
        Ok(self.lock()?.state().snapshot())
    }

    /// Current BMI
    pub fn bmi(&self) -> AppResult<Option<f64>> {
        Ok(self.lock()?.state().bmi())
    }

    /// Register an observer for committed changes
    pub fn subscribe(&self, observer: Box<dyn ProfileObserver>) -> AppResult<()> {
        self.lock()?.subscribe(observer);
        Ok(())
    }

    /// Run `f` with the underlying store
    pub fn with_store<R>(&self, f: impl FnOnce(&S) -> R) -> AppResult<R> {
        Ok(f(self.lock()?.store()))
    }

    /// Unwrap the updater
    pub fn into_inner(self) -> AppResult<ProfileUpdater<S>> {
        self.updater
            .into_inner()
            .map_err(|_| AppError::internal("profile lock poisoned by a panicked update"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use fitprofile_core::errors::ErrorCode;
    use std::thread;

    #[test]
    fn test_errors_keep_their_category() {
        let service = ProfileService::new(ProfileUpdater::load(MemoryStore::new()).unwrap());
        assert_eq!(
            service.update("nonsense").unwrap_err().code,
            ErrorCode::InvalidFormat
        );
        assert_eq!(
            service.update("height/9").unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }

    #[test]
    fn test_concurrent_updates_are_serialized() {
        let service = ProfileService::new(ProfileUpdater::load(MemoryStore::new()).unwrap());
        thread::scope(|scope| {
            for i in 0..8 {
                let service = &service;
                scope.spawn(move || {
                    service
                        .update(&format!("calories/{i} height/1.8 weight/72"))
                        .unwrap();
                });
            }
        });

        assert_eq!(service.with_store(MemoryStore::writes).unwrap(), 8);
        assert_eq!(service.bmi().unwrap(), Some(22.2));
        let stored = service
            .with_store(|store| store.record().cloned())
            .unwrap()
            .unwrap();
        assert_eq!(stored.calories.as_deref(), Some(service.snapshot().unwrap().calories.as_str()));
    }
}
