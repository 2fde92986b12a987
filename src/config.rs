use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::Deserialize;

use crate::error::AppError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const CONFIG_ENV: &str = "FITTRACKER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "fittracker.json";

/// Upper bound for every configured delay: one day.
pub const MAX_DELAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub font_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub login_delay_ms: i64,
    pub reply_delay_ms: i64,
    pub import_status_ms: i64,
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: 1280.0,
            window_height: 820.0,
            font_path: None,
            catalog_path: None,
            login_delay_ms: 1000,
            reply_delay_ms: 1500,
            import_status_ms: 3000,
            dark_mode: true,
        }
    }
}

impl AppConfig {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Reads `$FITTRACKER_CONFIG`, then `./fittracker.json`, falling back to defaults.
    pub fn discover() -> Self {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("no config file, using defaults");
                    return Self::default();
                }
                local
            }
        };
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default config");
                Self::default()
            }
        }
    }

    pub fn login_delay(&self) -> Duration {
        clamp_delay(self.login_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        clamp_delay(self.reply_delay_ms)
    }

    pub fn import_status_lifetime(&self) -> Duration {
        clamp_delay(self.import_status_ms)
    }
}

fn clamp_delay(ms: i64) -> Duration {
    Duration::milliseconds(ms.clamp(0, MAX_DELAY_MS))
}
