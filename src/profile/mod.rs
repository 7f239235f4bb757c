// ABOUTME: Profile state, derived BMI, and the update orchestrator
// ABOUTME: Validated values only; updates are all-or-nothing and persisted before commit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body mass index calculation and formatting
pub mod bmi;

/// Full seven-field view returned after each update
pub mod snapshot;

/// The live profile record
pub mod state;

/// Tokenize, validate, merge, recompute, persist, commit
pub mod updater;

/// Typed, validated field values
pub mod values;

pub use bmi::{calculate_bmi, format_bmi};
pub use snapshot::ProfileSnapshot;
pub use state::ProfileState;
pub use updater::ProfileUpdater;
pub use values::FieldValue;
