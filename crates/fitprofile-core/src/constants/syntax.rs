// ABOUTME: Command-line syntax prefixes for profile commands
// ABOUTME: Each prefix marks which profile field the following value belongs to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Prefix for the username field
pub const PREFIX_USERNAME: &str = "username/";
/// Prefix for the gender field
pub const PREFIX_GENDER: &str = "gender/";
/// Prefix for the height field (metres)
pub const PREFIX_HEIGHT: &str = "height/";
/// Prefix for the weight field (kilograms)
pub const PREFIX_WEIGHT: &str = "weight/";
/// Prefix for the preferred workout difficulty
pub const PREFIX_DIFFICULTY: &str = "difficulty/";
/// Prefix for the calorie target
pub const PREFIX_CALORIES: &str = "calories/";
/// Prefix for the workout duration (minutes)
pub const PREFIX_DURATION: &str = "duration/";

/// Command word that modifies the profile
pub const COMMAND_MODIFY: &str = "modify";
/// Command word that selects the current workout by index
pub const COMMAND_CURRENT: &str = "current";
