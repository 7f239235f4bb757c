// ABOUTME: Command argument parsing for profile commands
// ABOUTME: Tokenizer, per-field validators, and the modify/current command parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Command argument parsing
//!
//! Raw argument text flows through [`tokenizer::tokenize`] into an
//! [`ArgumentMultimap`], and each present field value is then checked by
//! [`validators::validate_field`] before anything touches the profile.

/// Index-based `current` command parser
pub mod current;

/// One-based index parsing
pub mod index;

/// `modify` command parser
pub mod modify;

/// `prefix/value` argument tokenizer
pub mod tokenizer;

/// Per-field validation rules
pub mod validators;

pub use current::CurrentCommandParser;
pub use index::{parse_index, Index};
pub use modify::ModifyCommandParser;
pub use tokenizer::{tokenize, ArgumentMultimap};
pub use validators::validate_field;
