// ABOUTME: Per-field validation of raw command values
// ABOUTME: Turns raw text into a typed FieldValue or a field-specific CommandError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::profile::values::{Calories, DurationMinutes, FieldValue, Height, Username, Weight};
use fitprofile_core::errors::CommandError;
use fitprofile_core::models::{Difficulty, Gender, ProfileField};
use tracing::debug;

/// Validate `raw` as a value for `field`.
///
/// Pure: no profile state is read or written. The error carries the field so
/// the caller can render its invalid/valid message pair.
pub fn validate_field(field: ProfileField, raw: &str) -> Result<FieldValue, CommandError> {
    let value = match field {
        ProfileField::Username => Username::parse(raw).map(FieldValue::Username),
        ProfileField::Gender => Gender::parse(raw).map(FieldValue::Gender),
        ProfileField::Height => Height::parse(raw).map(FieldValue::Height),
        ProfileField::Weight => Weight::parse(raw).map(FieldValue::Weight),
        ProfileField::Difficulty => Difficulty::parse(raw).map(FieldValue::Difficulty),
        ProfileField::Calories => Calories::parse(raw).map(FieldValue::Calories),
        ProfileField::Duration => DurationMinutes::parse(raw).map(FieldValue::Duration),
    };

    value.ok_or_else(|| {
        debug!(field = %field, value = raw, "Field value rejected");
        CommandError::validation(field, raw)
    })
}
