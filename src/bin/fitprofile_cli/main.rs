// ABOUTME: fitprofile CLI - interactive shell and one-shot commands for the fitness profile
// ABOUTME: Loads configuration and logging, opens the profile store, and dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive shell
//! fitprofile-cli
//!
//! # One-shot modification
//! fitprofile-cli modify username/Alice height/1.70 weight/65
//!
//! # Print the stored profile
//! fitprofile-cli show
//!
//! # Use a specific profile file
//! fitprofile-cli --data-file ./profile.json show
//! ```

mod helpers;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitprofile::config::AppConfig;
use fitprofile::logging::LoggingConfig;
use fitprofile::parser::ModifyCommandParser;
use fitprofile::profile::ProfileUpdater;
use fitprofile::storage::{JsonFileStore, MemoryStore, ProfileStore};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitprofile-cli",
    about = "Fitness profile command interpreter",
    long_about = "Maintains a single fitness profile and its BMI, saving it after every successful change."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Profile file override (defaults to FITPROFILE_DATA_FILE or the platform data directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Keep the profile in memory only; nothing is written to disk
    #[arg(long, global = true, conflicts_with = "data_file")]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive shell (default)
    Shell,

    /// Modify the profile once and exit
    Modify {
        /// Field arguments, e.g. `height/1.70 weight/65`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },

    /// Print the profile and exit
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    info!("fitprofile CLI");

    if cli.ephemeral {
        info!("Using in-memory profile store");
        return run(cli.command, MemoryStore::new());
    }

    let mut config = AppConfig::from_env()?;
    if let Some(data_file) = cli.data_file {
        config = config.with_data_file(data_file);
    }
    let store = JsonFileStore::new(config.data_file);
    info!(data_file = %store.path().display(), "Using profile file");
    run(cli.command, store)
}

fn run<S: ProfileStore>(command: Option<Command>, store: S) -> Result<()> {
    let mut updater = ProfileUpdater::load(store).context("failed to load the stored profile")?;

    match command.unwrap_or(Command::Shell) {
        Command::Shell => shell::run(&mut updater, io::stdin().lock(), io::stdout().lock())?,
        Command::Modify { args } => {
            let command = ModifyCommandParser.parse(&args.join(" "), &mut updater)?;
            println!("{}", command.execute());
        }
        Command::Show => helpers::display::print_profile(updater.state()),
    }
    Ok(())
}
