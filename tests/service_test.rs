// ABOUTME: Integration tests for the single-writer profile service
// ABOUTME: Concurrent updates against a file store, observer delivery, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitprofile::display::{LabelKey, ProfilePanel};
use fitprofile::errors::ErrorCode;
use fitprofile::models::ProfileField;
use fitprofile::service::ProfileService;
use fitprofile::storage::{JsonFileStore, ProfileStore};
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

#[test]
fn test_concurrent_updates_leave_a_consistent_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    let service = ProfileService::new(common::file_updater(&path));

    thread::scope(|scope| {
        for weight in [60, 65, 70, 75, 80, 85] {
            let service = &service;
            scope.spawn(move || {
                service
                    .update(&format!("height/1.75 weight/{weight}"))
                    .unwrap();
            });
        }
    });

    let snapshot = service.snapshot().unwrap();
    let record = JsonFileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(record.weight.as_deref(), Some(snapshot.weight.as_str()));
    assert_eq!(record.bmi, service.bmi().unwrap());
    assert_eq!(common::dir_entries(dir.path()), ["profile.json"]);
}

#[test]
fn test_subscribed_panel_sees_only_committed_changes() {
    let service = ProfileService::new(common::memory_updater());
    let panel = Arc::new(Mutex::new(ProfilePanel::default()));
    service.subscribe(Box::new(Arc::clone(&panel))).unwrap();

    service.update("height/1.70 weight/65").unwrap();
    assert!(service.update("height/0.2").is_err());

    let panel = panel.lock().unwrap();
    assert_eq!(panel.label(LabelKey::Field(ProfileField::Height)), Some("Height : 1.70m"));
    assert_eq!(panel.label(LabelKey::Bmi), Some("BMI : 22.5"));
}

#[test]
fn test_errors_carry_application_codes() {
    let service = ProfileService::new(common::memory_updater());

    assert_eq!(
        service.update("nothing here").unwrap_err().code,
        ErrorCode::InvalidFormat
    );
    assert_eq!(
        service.update("gender/other").unwrap_err().code,
        ErrorCode::InvalidInput
    );

    let mut updater = service.into_inner().unwrap();
    updater.store_mut().fail_writes(true);
    let service = ProfileService::new(updater);
    assert_eq!(
        service.update("gender/male").unwrap_err().code,
        ErrorCode::StorageError
    );
    assert_eq!(service.with_store(|store| store.writes()).unwrap(), 0);
}
