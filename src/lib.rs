// ABOUTME: Main library entry point for the fitprofile command interpreter
// ABOUTME: Parses profile commands, validates fields, recomputes BMI, and persists atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitprofile
//!
//! A text-command interpreter that maintains a single fitness profile
//! (username, gender, height, weight, difficulty, calories, duration) and
//! its derived BMI, saving the profile after every successful change.
//!
//! ## Architecture
//!
//! The update pipeline runs leaves first:
//! - **Parser**: tokenizes `prefix/value` arguments and validates each field
//! - **Profile**: the live profile state, its BMI, and the update orchestrator
//! - **Storage**: durable write-then-rename persistence of the flat profile record
//! - **Display**: observers notified with formatted labels after a committed change
//! - **Service**: single-writer wrapper for callers sharing one profile
//!
//! ## Example Usage
//!
//! ```rust
//! use fitprofile::profile::ProfileUpdater;
//! use fitprofile::storage::MemoryStore;
//!
//! let mut updater = ProfileUpdater::load(MemoryStore::new())?;
//! let snapshot = updater.update("username/Alice height/1.70 weight/65")?;
//! assert_eq!(snapshot.username, "Alice");
//! assert_eq!(updater.state().bmi(), Some(22.5));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Command objects produced by the parsers
pub mod commands;

/// Environment-based configuration
pub mod config;

/// Display surface notified after committed profile changes
pub mod display;

/// Production logging and structured output
pub mod logging;

/// Argument tokenizer, field validators, and command parsers
pub mod parser;

/// Profile state, BMI calculation, and the update orchestrator
pub mod profile;

/// Single-writer service boundary around the update orchestrator
pub mod service;

/// Durable profile persistence
pub mod storage;

/// Re-export of core constants
pub use fitprofile_core::constants;

/// Re-export of the unified error types
pub use fitprofile_core::errors;

/// Re-export of core domain enumerations
pub use fitprofile_core::models;
