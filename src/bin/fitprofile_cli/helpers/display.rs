// ABOUTME: Output formatting helpers for fitprofile-cli
// ABOUTME: Renders the profile panel and the shell help text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitprofile::constants::messages::{CURRENT_USAGE, MODIFY_USAGE};
use fitprofile::display::ProfilePanel;
use fitprofile::profile::ProfileState;

/// Print every set field of the profile, with BMI
pub fn print_profile(state: &ProfileState) {
    println!("{}", ProfilePanel::from_state(state));
}

/// Help text listing the shell commands
pub fn help_text() -> String {
    format!(
        "{MODIFY_USAGE}\n\n{CURRENT_USAGE}\n\nshow: Shows the profile.\n\
help: Shows this message.\nexit: Leaves the shell."
    )
}
