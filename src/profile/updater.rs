// ABOUTME: Orchestrates a profile update from raw argument text to a persisted snapshot
// ABOUTME: Any malformed command, invalid field, or failed write leaves the profile untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Profile Update Orchestrator
//!
//! One call to [`ProfileUpdater::update`] runs a linear pipeline:
//!
//! 1. tokenize the argument text against the seven field prefixes
//! 2. reject the command if no field is present or a preamble was given
//! 3. validate every present field, stopping at the first failure
//! 4. merge the validated values into a copy of the current state
//! 5. recompute BMI on the merged copy
//! 6. persist the merged copy
//! 7. commit it as the live state and notify observers
//!
//! Because the merge happens on a copy and the copy only becomes live after
//! the write succeeds, a failure at any step leaves both the in-memory state
//! and the stored record exactly as they were.

use super::snapshot::ProfileSnapshot;
use super::state::ProfileState;
use super::values::FieldValue;
use crate::display::{labels_for, ProfileObserver};
use crate::parser::{tokenize, validate_field};
use crate::storage::{ProfileRecord, ProfileStore};
use fitprofile_core::constants::messages::MODIFY_USAGE;
use fitprofile_core::errors::{AppResult, CommandError};
use fitprofile_core::models::ProfileField;
use tracing::{debug, error, info, warn};

/// Owns the live profile, its store, and the observers told about changes
pub struct ProfileUpdater<S: ProfileStore> {
    state: ProfileState,
    store: S,
    observers: Vec<Box<dyn ProfileObserver>>,
}

impl<S: ProfileStore> ProfileUpdater<S> {
    /// Create an updater around an already-loaded state
    #[must_use]
    pub fn new(state: ProfileState, store: S) -> Self {
        Self {
            state,
            store,
            observers: Vec::new(),
        }
    }

    /// Load the stored profile, or start from an empty one if none exists
    pub fn load(store: S) -> AppResult<Self> {
        let state = match store.load()? {
            Some(record) => {
                let state = record.into_state()?;
                info!(bmi = ?state.bmi(), "Loaded stored profile");
                state
            }
            None => {
                info!("No stored profile found, starting with an empty profile");
                ProfileState::new()
            }
        };
        Ok(Self::new(state, store))
    }

    /// Register an observer for committed changes
    pub fn subscribe(&mut self, observer: Box<dyn ProfileObserver>) {
        self.observers.push(observer);
    }

    /// Current profile state
    #[must_use]
    pub const fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Apply `prefix/value` arguments to the profile.
    ///
    /// Returns all seven fields after the update: new values for the fields
    /// given, current values for the rest.
    pub fn update(&mut self, args: &str) -> Result<ProfileSnapshot, CommandError> {
        let changes = Self::parse_changes(args).inspect_err(|e| {
            warn!(error = %e, "Rejected profile update");
        })?;

        let mut candidate = self.state.clone();
        for change in &changes {
            candidate.set(change.clone());
        }
        candidate.recompute_bmi();

        self.store
            .save(&ProfileRecord::from(&candidate))
            .map_err(|source| {
                error!(error = %source, "Failed to persist profile, keeping previous state");
                CommandError::Persistence { source }
            })?;

        let changed: Vec<ProfileField> = changes.iter().map(FieldValue::field).collect();
        self.state = candidate;
        self.notify(&changed);

        info!(
            fields = ?changed,
            bmi = ?self.state.bmi(),
            "Profile updated"
        );
        Ok(self.state.snapshot())
    }

    /// Tokenize and validate without touching any state
    fn parse_changes(args: &str) -> Result<Vec<FieldValue>, CommandError> {
        let prefixes = ProfileField::prefixes();
        let arguments = tokenize(args, &prefixes);

        if !arguments.contains_any(&prefixes) || !arguments.preamble().is_empty() {
            return Err(CommandError::malformed(MODIFY_USAGE));
        }

        let mut changes = Vec::new();
        for field in ProfileField::ALL {
            if let Some(raw) = arguments.value(field.prefix()) {
                let given = arguments.all_values(field.prefix()).len();
                if given > 1 {
                    debug!(field = %field, given, "Field repeated, using the last value");
                }
                debug!(field = %field, value = raw, "Validating field");
                changes.push(validate_field(field, raw)?);
            }
        }
        Ok(changes)
    }

    fn notify(&mut self, changed: &[ProfileField]) {
        if self.observers.is_empty() {
            return;
        }
        let labels = labels_for(&self.state, changed);
        for observer in &mut self.observers {
            observer.profile_changed(&labels);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{FieldLabel, LabelKey};
    use crate::storage::MemoryStore;
    use fitprofile_core::constants::messages;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingObserver {
        notifications: usize,
        last: Vec<FieldLabel>,
    }

    impl ProfileObserver for CountingObserver {
        fn profile_changed(&mut self, labels: &[FieldLabel]) {
            self.notifications += 1;
            self.last = labels.to_vec();
        }
    }

    fn updater() -> ProfileUpdater<MemoryStore> {
        ProfileUpdater::new(ProfileState::new(), MemoryStore::new())
    }

    #[test]
    fn test_multi_field_update() {
        let mut updater = updater();
        let snapshot = updater
            .update(" username/Alice height/1.70 weight/65")
            .unwrap();

        assert_eq!(snapshot.username, "Alice");
        assert_eq!(snapshot.height, "1.70");
        assert_eq!(snapshot.weight, "65");
        assert_eq!(snapshot.gender, "");
        assert_eq!(updater.state().bmi(), Some(22.5));
        assert_eq!(updater.store().writes(), 1);
    }

    #[test]
    fn test_malformed_commands_are_rejected() {
        let mut updater = updater();
        for args in ["", "   ", "hello", "hello username/Alice", "colour/red"] {
            let error = updater.update(args).unwrap_err();
            assert!(matches!(error, CommandError::Malformed { .. }), "{args}");
            assert_eq!(
                error.to_string(),
                messages::invalid_command_format(messages::MODIFY_USAGE)
            );
        }
        assert_eq!(updater.store().writes(), 0);
        assert_eq!(updater.state(), &ProfileState::new());
    }

    #[test]
    fn test_invalid_field_aborts_whole_update() {
        let mut updater = updater();
        updater.update("username/Alice gender/female").unwrap();
        let before = updater.state().clone();

        let error = updater
            .update("username/Bob height/1.9 gender/X")
            .unwrap_err();
        assert_eq!(error.field(), Some(ProfileField::Gender));
        assert_eq!(updater.state(), &before);
        assert_eq!(updater.store().writes(), 1);
    }

    #[test]
    fn test_last_repeated_value_wins() {
        let mut updater = updater();
        let snapshot = updater.update("calories/100 calories/250").unwrap();
        assert_eq!(snapshot.calories, "250");
    }

    #[test]
    fn test_persistence_failure_keeps_previous_state() {
        let mut updater = updater();
        updater.update("height/1.8 weight/72").unwrap();
        let before = updater.state().clone();

        updater.store_mut().fail_writes(true);
        let error = updater.update("weight/90").unwrap_err();
        assert!(matches!(error, CommandError::Persistence { .. }));
        assert_eq!(updater.state(), &before);
        assert_eq!(updater.state().bmi(), Some(22.2));

        updater.store_mut().fail_writes(false);
        updater.update("weight/90").unwrap();
        assert_eq!(updater.state().bmi(), Some(27.8));
    }

    #[test]
    fn test_observers_hear_only_committed_updates() {
        let mut updater = updater();
        let observer = Arc::new(Mutex::new(CountingObserver::default()));
        updater.subscribe(Box::new(Arc::clone(&observer)));

        updater.store_mut().fail_writes(true);
        assert!(updater.update("height/1.8 weight/72").is_err());
        assert!(updater.update("height/tall").is_err());
        assert!(updater.update("nothing").is_err());
        assert_eq!(observer.lock().unwrap().notifications, 0);

        updater.store_mut().fail_writes(false);
        updater.update("height/1.8 weight/72").unwrap();

        let observer = observer.lock().unwrap();
        assert_eq!(observer.notifications, 1);
        let keys: Vec<LabelKey> = observer.last.iter().map(|label| label.key).collect();
        assert_eq!(
            keys,
            vec![
                LabelKey::Field(ProfileField::Height),
                LabelKey::Field(ProfileField::Weight),
                LabelKey::Bmi
            ]
        );
    }
}
