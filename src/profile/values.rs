// ABOUTME: Typed profile field values produced by validation
// ABOUTME: Each type can only be built from text that satisfies its field rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitprofile_core::constants::limits;
use fitprofile_core::models::{Difficulty, Gender, ProfileField};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static USERNAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _.\-]*$").ok());

static DECIMAL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\d+(\.\d{{1,{}}})?$",
        limits::MAX_FRACTION_DIGITS
    ))
    .ok()
});

/// Display name of the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Parse a username, enforcing length and character rules
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let length = raw.chars().count();
        let matches = USERNAME_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(raw));
        (matches && (1..=limits::MAX_USERNAME_LEN).contains(&length)).then(|| Self(raw.to_owned()))
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bounded decimal measurement that remembers the text it was typed as
#[derive(Debug, Clone, PartialEq)]
struct Measurement {
    value: f64,
    text: String,
}

impl Measurement {
    fn parse(raw: &str, min: f64, max: f64) -> Option<Self> {
        if !DECIMAL_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(raw))
        {
            return None;
        }
        let value: f64 = raw.parse().ok()?;
        (min..=max).contains(&value).then(|| Self {
            value,
            text: raw.to_owned(),
        })
    }
}

/// Height in metres
#[derive(Debug, Clone, PartialEq)]
pub struct Height(Measurement);

impl Height {
    /// Parse a height in metres within the accepted human range
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Measurement::parse(raw, limits::MIN_HEIGHT_M, limits::MAX_HEIGHT_M).map(Self)
    }

    /// Height in metres
    #[must_use]
    pub fn metres(&self) -> f64 {
        self.0.value
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.text)
    }
}

/// Weight in kilograms
#[derive(Debug, Clone, PartialEq)]
pub struct Weight(Measurement);

impl Weight {
    /// Parse a weight in kilograms within the accepted human range
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Measurement::parse(raw, limits::MIN_WEIGHT_KG, limits::MAX_WEIGHT_KG).map(Self)
    }

    /// Weight in kilograms
    #[must_use]
    pub fn kilograms(&self) -> f64 {
        self.0.value
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.text)
    }
}

fn parse_whole_number(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Calorie target per workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Calories(u32);

impl Calories {
    /// Parse a non-negative whole number of calories
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_whole_number(raw).map(Self)
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workout duration in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Parse a non-negative whole number of minutes
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_whole_number(raw).map(Self)
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated value for exactly one profile field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// New username
    Username(Username),
    /// New gender
    Gender(Gender),
    /// New height
    Height(Height),
    /// New weight
    Weight(Weight),
    /// New preferred difficulty
    Difficulty(Difficulty),
    /// New calorie target
    Calories(Calories),
    /// New workout duration
    Duration(DurationMinutes),
}

impl FieldValue {
    /// Field this value belongs to
    #[must_use]
    pub const fn field(&self) -> ProfileField {
        match self {
            Self::Username(_) => ProfileField::Username,
            Self::Gender(_) => ProfileField::Gender,
            Self::Height(_) => ProfileField::Height,
            Self::Weight(_) => ProfileField::Weight,
            Self::Difficulty(_) => ProfileField::Difficulty,
            Self::Calories(_) => ProfileField::Calories,
            Self::Duration(_) => ProfileField::Duration,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(v) => fmt::Display::fmt(v, f),
            Self::Gender(v) => fmt::Display::fmt(v, f),
            Self::Height(v) => fmt::Display::fmt(v, f),
            Self::Weight(v) => fmt::Display::fmt(v, f),
            Self::Difficulty(v) => fmt::Display::fmt(v, f),
            Self::Calories(v) => fmt::Display::fmt(v, f),
            Self::Duration(v) => fmt::Display::fmt(v, f),
        }
    }
}
