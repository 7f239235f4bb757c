// ABOUTME: JSON file profile store with write-then-rename replacement
// ABOUTME: Readers see either the previous file or the complete new one, never a partial write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ProfileRecord, ProfileStore};
use fitprofile_core::errors::{AppError, AppResult};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, warn};

/// Stores the profile as pretty-printed JSON at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for `path`; nothing is touched until the first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the profile file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Write `contents` to a uniquely named file next to the profile and flush it to disk.
    ///
    /// The file is deleted when the returned handle is dropped without being persisted.
    fn write_synced(&self, contents: &[u8]) -> io::Result<NamedTempFile> {
        let prefix = format!(
            ".{}.",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        );
        let mut temp = Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(self.directory())?;
        temp.write_all(contents)?;
        temp.as_file().sync_all()?;
        Ok(temp)
    }
}

#[cfg(unix)]
fn sync_directory(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_directory(_dir: &Path) -> io::Result<()> {
    Ok(())
}

impl ProfileStore for JsonFileStore {
    fn load(&self) -> AppResult<Option<ProfileRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!("failed to read {}", self.path.display())).with_source(e)
        })?;
        let record = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), "Read profile file");
        Ok(Some(record))
    }

    fn save(&mut self, record: &ProfileRecord) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(record)?;

        let dir = self.directory();
        fs::create_dir_all(dir).map_err(|e| {
            AppError::storage(format!("failed to create {}", dir.display())).with_source(e)
        })?;

        // A failed persist hands the temp file back inside the error; dropping it deletes the file
        self.write_synced(contents.as_bytes())
            .and_then(|temp| temp.persist(&self.path).map_err(|e| e.error))
            .map_err(|e| {
                AppError::storage(format!("failed to write {}", self.path.display()))
                    .with_source(e)
            })?;

        if let Err(e) = sync_directory(dir) {
            warn!(path = %dir.display(), error = %e, "Failed to sync profile directory");
        }
        debug!(path = %self.path.display(), "Wrote profile file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("profile.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("profile.json");
        let mut store = JsonFileStore::new(&path);
        let record = ProfileRecord {
            username: Some("Alice".into()),
            ..ProfileRecord::default()
        };

        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record));
        assert_eq!(entries(store.path().parent().unwrap()), ["profile.json"]);
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut store = JsonFileStore::new(&path);
        let record = ProfileRecord {
            height: Some("1.8".into()),
            weight: Some("72".into()),
            bmi: Some(22.2),
            ..ProfileRecord::default()
        };

        store.save(&record).unwrap();
        let first = fs::read(&path).unwrap();
        store.save(&record).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn test_failed_replace_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        // A non-empty directory at the target path makes the rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut store = JsonFileStore::new(&path);
        let error = store.save(&ProfileRecord::default()).unwrap_err();
        assert_eq!(error.code, fitprofile_core::errors::ErrorCode::StorageError);
        assert_eq!(entries(dir.path()), ["profile.json"]);
        assert_eq!(entries(&path), ["keep"]);
    }

    #[test]
    fn test_concurrent_writers_never_publish_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        JsonFileStore::new(&path)
            .save(&ProfileRecord::default())
            .unwrap();

        thread::scope(|scope| {
            for name in ["Alice", "Bob"] {
                let path = &path;
                scope.spawn(move || {
                    let mut store = JsonFileStore::new(path);
                    for i in 0..50 {
                        let record = ProfileRecord {
                            username: Some(format!("{name} {i}")),
                            calories: Some(i.to_string()),
                            ..ProfileRecord::default()
                        };
                        store.save(&record).unwrap();
                    }
                });
            }
            scope.spawn(|| {
                let reader = JsonFileStore::new(&path);
                for _ in 0..200 {
                    assert!(reader.load().unwrap().is_some());
                }
            });
        });

        assert_eq!(entries(dir.path()), ["profile.json"]);
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        let error = JsonFileStore::new(&path).load().unwrap_err();
        assert_eq!(
            error.code,
            fitprofile_core::errors::ErrorCode::SerializationError
        );
    }
}
