// ABOUTME: Body mass index calculation with fixed one-decimal rounding
// ABOUTME: BMI = weight / height^2, rounded half-up to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI calculation
//!
//! Rounding uses [`f64::round`], which rounds halves away from zero. Height and
//! weight are always positive, so this is round-half-up: `22.25` becomes
//! `22.3`. Every BMI shown or stored goes through [`calculate_bmi`], so the
//! same rule applies everywhere.

/// Calculate BMI from height in metres and weight in kilograms
#[must_use]
pub fn calculate_bmi(height_m: f64, weight_kg: f64) -> f64 {
    round_to_1(weight_kg / (height_m * height_m))
}

/// Format a BMI with at most one decimal, dropping a trailing `.0`
#[must_use]
pub fn format_bmi(bmi: f64) -> String {
    let text = format!("{bmi:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_owned(),
        None => text,
    }
}

fn round_to_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
