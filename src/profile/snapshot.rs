// ABOUTME: Complete post-update view of the seven profile fields
// ABOUTME: Returned by every successful update, whichever fields actually changed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitprofile_core::models::ProfileField;
use std::fmt;

/// All seven profile fields as display text; unset fields are empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    /// Username
    pub username: String,
    /// Gender (`Male` or `Female`)
    pub gender: String,
    /// Height in metres, as typed
    pub height: String,
    /// Weight in kilograms, as typed
    pub weight: String,
    /// Difficulty (`Easy`, `Medium` or `Hard`)
    pub difficulty: String,
    /// Calorie target
    pub calories: String,
    /// Duration in minutes
    pub duration: String,
}

impl ProfileSnapshot {
    /// Text of a single field
    #[must_use]
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::Gender => &self.gender,
            ProfileField::Height => &self.height,
            ProfileField::Weight => &self.weight,
            ProfileField::Difficulty => &self.difficulty,
            ProfileField::Calories => &self.calories,
            ProfileField::Duration => &self.duration,
        }
    }

    /// Fields whose text differs between `self` and `other`
    #[must_use]
    pub fn changed_fields(&self, other: &Self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.get(*field) != other.get(*field))
            .collect()
    }
}

impl fmt::Display for ProfileSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in ProfileField::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match self.get(field) {
                "" => write!(f, "{} : -", field.label())?,
                value => write!(f, "{} : {value}{}", field.label(), field.unit())?,
            }
        }
        Ok(())
    }
}
