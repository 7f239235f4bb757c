// ABOUTME: Core types and constants for the fitprofile command interpreter
// ABOUTME: Foundation crate with error handling, user-facing messages, and domain enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitprofile Core
//!
//! Foundation crate providing shared types and constants for the fitprofile
//! command interpreter. It has no I/O of its own, so everything here can be
//! used from the parser, the profile state, and the storage layer alike.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode` plus the command-level `CommandError` taxonomy
//! - **constants**: Command prefixes, usage text, and validation messages
//! - **models**: Closed enumerations (`Gender`, `Difficulty`, `ProfileField`)

/// Unified error handling with standard error codes and command errors
pub mod errors;

/// Command syntax, usage text, and validation message constants
pub mod constants;

/// Core domain models shared by the parser and the profile state
pub mod models;
