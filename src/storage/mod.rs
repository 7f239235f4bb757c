// ABOUTME: Durable persistence of the profile as a flat record
// ABOUTME: ProfileStore trait with JSON file and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile persistence
//!
//! The stored record is deliberately flat: seven optional text fields plus
//! the BMI they produced. Loading runs every stored value back through the
//! field validators, so a hand-edited file cannot smuggle an invalid value
//! into the live profile.

/// Atomic JSON file store
pub mod json_file;

/// In-process store
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::parser::validate_field;
use crate::profile::ProfileState;
use fitprofile_core::errors::{AppError, AppResult};
use fitprofile_core::models::ProfileField;
use serde::{Deserialize, Serialize};

/// Persistence target for the profile
pub trait ProfileStore: Send {
    /// Read the stored record, or `None` if nothing has been saved yet
    fn load(&self) -> AppResult<Option<ProfileRecord>>;

    /// Durably replace the stored record.
    ///
    /// Saving the same record twice must leave the same durable state.
    fn save(&mut self, record: &ProfileRecord) -> AppResult<()>;
}

/// Flat on-disk representation of the profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Preferred difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Calorie target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    /// Workout duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// BMI derived from height and weight; informational, recomputed on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

impl ProfileRecord {
    fn get(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Username => self.username.as_deref(),
            ProfileField::Gender => self.gender.as_deref(),
            ProfileField::Height => self.height.as_deref(),
            ProfileField::Weight => self.weight.as_deref(),
            ProfileField::Difficulty => self.difficulty.as_deref(),
            ProfileField::Calories => self.calories.as_deref(),
            ProfileField::Duration => self.duration.as_deref(),
        }
    }

    /// Rebuild a profile state, validating every stored field
    pub fn into_state(self) -> AppResult<ProfileState> {
        let mut state = ProfileState::new();
        for field in ProfileField::ALL {
            if let Some(raw) = self.get(field) {
                let value = validate_field(field, raw).map_err(|e| {
                    AppError::storage(format!("stored {field} value '{raw}' is invalid"))
                        .with_source(e)
                })?;
                state.set(value);
            }
        }
        state.recompute_bmi();
        Ok(state)
    }
}

impl From<&ProfileState> for ProfileRecord {
    fn from(state: &ProfileState) -> Self {
        Self {
            username: state.get(ProfileField::Username),
            gender: state.get(ProfileField::Gender),
            height: state.get(ProfileField::Height),
            weight: state.get(ProfileField::Weight),
            difficulty: state.get(ProfileField::Difficulty),
            calories: state.get(ProfileField::Calories),
            duration: state.get(ProfileField::Duration),
            bmi: state.bmi(),
        }
    }
}
