// ABOUTME: User-facing messages for command parsing and validation failures
// ABOUTME: Each field failure is an invalid/valid pair rendered through a fixed template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Prefix of every malformed-command message, followed by the command usage
pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! ";

/// Message for an index that is not a non-zero unsigned integer
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Message for an unrecognised command word
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// First line of a rejected username message
pub const MESSAGE_INVALID_USERNAME: &str = "Invalid username entered!";
/// Accepted username format, shown after [`MESSAGE_INVALID_USERNAME`]
pub const MESSAGE_VALID_USERNAME: &str = "Username should be 1 to 30 characters long, start with a \
letter or digit, and contain only letters, digits, spaces, '_', '-' or '.'.";

/// First line of a rejected gender message
pub const MESSAGE_INVALID_GENDER: &str = "Invalid gender entered!";
/// Accepted gender format, shown after [`MESSAGE_INVALID_GENDER`]
pub const MESSAGE_VALID_GENDER: &str =
    "Gender should be either Male or Female (M/F accepted, case-insensitive).";

/// First line of a rejected height message
pub const MESSAGE_INVALID_HEIGHT: &str = "Invalid height entered!";
/// Accepted height format, shown after [`MESSAGE_INVALID_HEIGHT`]
pub const MESSAGE_VALID_HEIGHT: &str = "Height should be in metres with at most 2 decimal \
places, between 0.5 and 3.0, e.g. height/1.75";

/// First line of a rejected weight message
pub const MESSAGE_INVALID_WEIGHT: &str = "Invalid weight entered!";
/// Accepted weight format, shown after [`MESSAGE_INVALID_WEIGHT`]
pub const MESSAGE_VALID_WEIGHT: &str = "Weight should be in kilograms with at most 2 decimal \
places, between 10 and 500, e.g. weight/65.5";

/// First line of a rejected difficulty message
pub const MESSAGE_INVALID_DIFFICULTY: &str = "Invalid difficulty entered!";
/// Accepted difficulty format, shown after [`MESSAGE_INVALID_DIFFICULTY`]
pub const MESSAGE_VALID_DIFFICULTY: &str =
    "Difficulty should be one of Easy, Medium or Hard (case-insensitive).";

/// First line of a rejected calories message
pub const MESSAGE_INVALID_CALORIES: &str = "Invalid calories entered!";
/// Accepted calories format, shown after [`MESSAGE_INVALID_CALORIES`]
pub const MESSAGE_VALID_CALORIES: &str =
    "Calories should be a non-negative whole number, e.g. calories/300";

/// First line of a rejected duration message
pub const MESSAGE_INVALID_DURATION: &str = "Invalid duration entered!";
/// Accepted duration format, shown after [`MESSAGE_INVALID_DURATION`]
pub const MESSAGE_VALID_DURATION: &str =
    "Duration should be a non-negative whole number of minutes, e.g. duration/45";

/// Usage text of the `modify` command
pub const MODIFY_USAGE: &str = "modify: Modifies the user profile. \
At least one field must be given; fields not given keep their current value.\n\
Parameters: [username/USERNAME] [gender/GENDER] [height/HEIGHT] [weight/WEIGHT] \
[difficulty/DIFFICULTY] [calories/CALORIES] [duration/DURATION]\n\
Example: modify username/Alice height/1.70 weight/65";

/// Usage text of the `current` command
pub const CURRENT_USAGE: &str = "current: Selects the workout identified by the index \
number used in the displayed workout list as the current workout.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: current 1";

/// Feedback prefix of a successful profile modification
pub const MESSAGE_MODIFY_SUCCESS: &str = "Profile updated:";

/// Render a malformed-command message for the given usage text
#[must_use]
pub fn invalid_command_format(usage: &str) -> String {
    format!("{MESSAGE_INVALID_COMMAND_FORMAT}\n{usage}")
}

/// Render a field validation failure from its invalid/valid pair
#[must_use]
pub fn invalid_field(invalid: &str, valid: &str) -> String {
    format!("{invalid}\n{valid}")
}
