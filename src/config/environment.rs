// ABOUTME: Environment-based configuration for data location and deployment environment
// ABOUTME: Defaults the profile file to the platform data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitprofile_core::constants::storage::{APP_DIR_NAME, DEFAULT_PROFILE_FILE};
use fitprofile_core::errors::{AppError, AppResult, ErrorCode};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Environment variable overriding the profile file location
pub const DATA_FILE_ENV: &str = "FITPROFILE_DATA_FILE";

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_ENV: &str = "FITPROFILE_ENVIRONMENT";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the profile is persisted
    pub data_file: PathBuf,
    /// Deployment environment (development, production, ...)
    pub environment: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let data_file = match env::var(DATA_FILE_ENV) {
            Ok(path) if path.trim().is_empty() => {
                return Err(AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("{DATA_FILE_ENV} is set but empty"),
                ));
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => Self::default_data_file()?,
        };

        let config = Self {
            data_file,
            environment: env_var_or(ENVIRONMENT_ENV, "development"),
        };
        debug!(data_file = %config.data_file.display(), environment = %config.environment, "Configuration loaded");
        Ok(config)
    }

    /// Override the profile file location
    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// `<platform data dir>/fitprofile/profile.json`
    pub fn default_data_file() -> AppResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_PROFILE_FILE))
            .ok_or_else(|| AppError::config("no platform data directory available"))
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
