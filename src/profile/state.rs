// ABOUTME: The live fitness profile and its derived BMI
// ABOUTME: Holds only validated values; BMI is recomputed from the stored height and weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::bmi::calculate_bmi;
use super::snapshot::ProfileSnapshot;
use super::values::{Calories, DurationMinutes, FieldValue, Height, Username, Weight};
use fitprofile_core::models::{Difficulty, Gender, ProfileField};

/// Current profile values. Every field is unset until first validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    username: Option<Username>,
    gender: Option<Gender>,
    height: Option<Height>,
    weight: Option<Weight>,
    difficulty: Option<Difficulty>,
    calories: Option<Calories>,
    duration: Option<DurationMinutes>,
    bmi: Option<f64>,
}

impl ProfileState {
    /// Create an empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field with a validated value.
    ///
    /// BMI is not touched; call [`Self::recompute_bmi`] once all values are set.
    pub fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::Username(v) => self.username = Some(v),
            FieldValue::Gender(v) => self.gender = Some(v),
            FieldValue::Height(v) => self.height = Some(v),
            FieldValue::Weight(v) => self.weight = Some(v),
            FieldValue::Difficulty(v) => self.difficulty = Some(v),
            FieldValue::Calories(v) => self.calories = Some(v),
            FieldValue::Duration(v) => self.duration = Some(v),
        }
    }

    /// Display text of a field, or `None` if it has never been set
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<String> {
        match field {
            ProfileField::Username => self.username.as_ref().map(ToString::to_string),
            ProfileField::Gender => self.gender.map(|v| v.to_string()),
            ProfileField::Height => self.height.as_ref().map(ToString::to_string),
            ProfileField::Weight => self.weight.as_ref().map(ToString::to_string),
            ProfileField::Difficulty => self.difficulty.map(|v| v.to_string()),
            ProfileField::Calories => self.calories.map(|v| v.to_string()),
            ProfileField::Duration => self.duration.map(|v| v.to_string()),
        }
    }

    /// Recompute BMI from the current height and weight.
    ///
    /// Idempotent. BMI is `None` until both height and weight are known.
    pub fn recompute_bmi(&mut self) {
        self.bmi = match (&self.height, &self.weight) {
            (Some(height), Some(weight)) => {
                Some(calculate_bmi(height.metres(), weight.kilograms()))
            }
            _ => None,
        };
    }

    /// Body mass index, rounded to one decimal
    #[must_use]
    pub const fn bmi(&self) -> Option<f64> {
        self.bmi
    }

    /// All seven fields as display text
    #[must_use]
    pub fn snapshot(&self) -> ProfileSnapshot {
        let text = |field| self.get(field).unwrap_or_default();
        ProfileSnapshot {
            username: text(ProfileField::Username),
            gender: text(ProfileField::Gender),
            height: text(ProfileField::Height),
            weight: text(ProfileField::Weight),
            difficulty: text(ProfileField::Difficulty),
            calories: text(ProfileField::Calories),
            duration: text(ProfileField::Duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_field;

    fn with(state: &mut ProfileState, field: ProfileField, raw: &str) {
        state.set(validate_field(field, raw).unwrap());
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = ProfileState::new();
        assert_eq!(state.snapshot(), ProfileSnapshot::default());
        assert_eq!(state.bmi(), None);
    }

    #[test]
    fn test_bmi_needs_height_and_weight() {
        let mut state = ProfileState::new();
        with(&mut state, ProfileField::Height, "1.8");
        state.recompute_bmi();
        assert_eq!(state.bmi(), None);

        with(&mut state, ProfileField::Weight, "72");
        state.recompute_bmi();
        assert_eq!(state.bmi(), Some(22.2));

        state.recompute_bmi();
        assert_eq!(state.bmi(), Some(22.2));
    }

    #[test]
    fn test_set_overwrites_single_field() {
        let mut state = ProfileState::new();
        with(&mut state, ProfileField::Username, "Alice");
        with(&mut state, ProfileField::Difficulty, "hard");
        let before = state.snapshot();

        with(&mut state, ProfileField::Username, "Bob");
        let after = state.snapshot();
        assert_eq!(after.changed_fields(&before), vec![ProfileField::Username]);
        assert_eq!(state.get(ProfileField::Difficulty).as_deref(), Some("Hard"));
    }
}
