// ABOUTME: Profile field identifiers with their command prefixes and display labels
// ABOUTME: Single source of truth for which fields a profile command may touch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{messages, syntax};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven user-editable profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    /// Display name of the user
    Username,
    /// Gender used for profile display
    Gender,
    /// Height in metres
    Height,
    /// Weight in kilograms
    Weight,
    /// Preferred workout difficulty
    Difficulty,
    /// Calorie target per workout
    Calories,
    /// Workout duration in minutes
    Duration,
}

impl ProfileField {
    /// All fields, in the order they are validated and rendered
    pub const ALL: [Self; 7] = [
        Self::Username,
        Self::Gender,
        Self::Height,
        Self::Weight,
        Self::Difficulty,
        Self::Calories,
        Self::Duration,
    ];

    /// Command prefix marking this field, e.g. `height/`
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Username => syntax::PREFIX_USERNAME,
            Self::Gender => syntax::PREFIX_GENDER,
            Self::Height => syntax::PREFIX_HEIGHT,
            Self::Weight => syntax::PREFIX_WEIGHT,
            Self::Difficulty => syntax::PREFIX_DIFFICULTY,
            Self::Calories => syntax::PREFIX_CALORIES,
            Self::Duration => syntax::PREFIX_DURATION,
        }
    }

    /// All command prefixes, in field order
    #[must_use]
    pub fn prefixes() -> [&'static str; 7] {
        Self::ALL.map(Self::prefix)
    }

    /// Human-readable label used on the display surface
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Gender => "Gender",
            Self::Height => "Height",
            Self::Weight => "Weight",
            Self::Difficulty => "Difficulty",
            Self::Calories => "Calories",
            Self::Duration => "Duration",
        }
    }

    /// Unit suffix appended to the displayed value
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Height => "m",
            Self::Weight => "kg",
            Self::Calories => "kcal",
            Self::Duration => "min",
            Self::Username | Self::Gender | Self::Difficulty => "",
        }
    }

    /// First half of the validation failure message: what was invalid
    #[must_use]
    pub const fn invalid_message(self) -> &'static str {
        match self {
            Self::Username => messages::MESSAGE_INVALID_USERNAME,
            Self::Gender => messages::MESSAGE_INVALID_GENDER,
            Self::Height => messages::MESSAGE_INVALID_HEIGHT,
            Self::Weight => messages::MESSAGE_INVALID_WEIGHT,
            Self::Difficulty => messages::MESSAGE_INVALID_DIFFICULTY,
            Self::Calories => messages::MESSAGE_INVALID_CALORIES,
            Self::Duration => messages::MESSAGE_INVALID_DURATION,
        }
    }

    /// Second half of the validation failure message: what is accepted
    #[must_use]
    pub const fn valid_message(self) -> &'static str {
        match self {
            Self::Username => messages::MESSAGE_VALID_USERNAME,
            Self::Gender => messages::MESSAGE_VALID_GENDER,
            Self::Height => messages::MESSAGE_VALID_HEIGHT,
            Self::Weight => messages::MESSAGE_VALID_WEIGHT,
            Self::Difficulty => messages::MESSAGE_VALID_DIFFICULTY,
            Self::Calories => messages::MESSAGE_VALID_CALORIES,
            Self::Duration => messages::MESSAGE_VALID_DURATION,
        }
    }

    /// Whether a change to this field requires the BMI to be recomputed
    #[must_use]
    pub const fn affects_bmi(self) -> bool {
        matches!(self, Self::Height | Self::Weight)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}
