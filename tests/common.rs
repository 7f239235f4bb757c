// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, store builders, and updater helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitprofile`

use fitprofile::profile::ProfileUpdater;
use fitprofile::storage::{JsonFileStore, MemoryStore};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Updater over an empty in-memory store
pub fn memory_updater() -> ProfileUpdater<MemoryStore> {
    init_test_logging();
    ProfileUpdater::load(MemoryStore::new()).expect("empty memory store loads")
}

/// Updater over an in-memory store, with `args` already applied
pub fn memory_updater_with(args: &str) -> ProfileUpdater<MemoryStore> {
    let mut updater = memory_updater();
    updater.update(args).expect("setup update succeeds");
    updater
}

/// Sorted file names in `dir`
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Updater over a JSON file at `path`
pub fn file_updater(path: &Path) -> ProfileUpdater<JsonFileStore> {
    init_test_logging();
    ProfileUpdater::load(JsonFileStore::new(path)).expect("profile file loads")
}
