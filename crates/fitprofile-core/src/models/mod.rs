// ABOUTME: Core domain models shared across the workspace
// ABOUTME: Closed enumerations for profile fields, gender, and workout difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core domain models
//!
//! String-typed values only exist at the command boundary. Once a value has
//! been validated it is carried as one of these types.

/// Profile field identifiers, prefixes, and display metadata
pub mod field;

/// Gender and workout difficulty enumerations
pub mod profile;

pub use field::ProfileField;
pub use profile::{Difficulty, Gender};
