// ABOUTME: Accepted ranges for numeric profile fields
// ABOUTME: Bounds are inclusive and expressed in the field's display unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shortest accepted height in metres
pub const MIN_HEIGHT_M: f64 = 0.5;
/// Tallest accepted height in metres
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Lightest accepted weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 10.0;
/// Heaviest accepted weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Maximum fraction digits accepted for height and weight
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Maximum username length in characters
pub const MAX_USERNAME_LEN: usize = 30;
