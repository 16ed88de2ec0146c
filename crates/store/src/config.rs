//! Configuration for Taskpad
//!
//! A small JSON object controlling the backing-file path and display
//! defaults. All fields have defaults so a missing or partial file
//! loads cleanly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Default backing-file path when no configuration overrides it
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Default configuration path relative to the user's home directory
pub const DEFAULT_CONFIG_SUBPATH: &str = ".taskpad/config.json";

/// Number of backups kept when pruning, unless configured otherwise
const DEFAULT_BACKUP_COUNT: u32 = 5;

/// Recognized setting names, in display order
pub const SETTING_NAMES: [&str; 4] = [
    "tasks_file",
    "default_categories",
    "auto_backup",
    "backup_count",
];

/// Taskpad configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the active tasks file
    pub tasks_file: PathBuf,

    /// Categories offered as display defaults
    pub default_categories: Vec<String>,

    /// Whether mutating commands create a backup first
    pub auto_backup: bool,

    /// How many backups to keep when pruning
    pub backup_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            default_categories: Vec::new(),
            auto_backup: false,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

/// Parse a boolean-like configuration value.
///
/// Accepts true/false, yes/no, on/off, 1/0, case-insensitively.
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated category list, trimming entries and
/// dropping empty ones.
fn parse_categories(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Load configuration from the given path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read,
    /// `StoreError::Parse` if the content is not valid JSON.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Persist the configuration to the given path, creating the parent
    /// directory if needed.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        fs::write(path, content).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply a setting by name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownSetting` for an unrecognized name and
    /// `StoreError::InvalidValue` for a malformed value; in both cases
    /// the configuration is left unchanged.
    pub fn set(&mut self, name: &str, value: &str) -> StoreResult<()> {
        match name {
            "tasks_file" => {
                if value.trim().is_empty() {
                    return Err(StoreError::InvalidValue {
                        name: name.to_string(),
                        value: value.to_string(),
                        reason: "expected a non-empty file path".to_string(),
                    });
                }
                self.tasks_file = PathBuf::from(value);
            }
            "default_categories" => {
                self.default_categories = parse_categories(value);
            }
            "auto_backup" => {
                self.auto_backup = parse_bool(value).ok_or_else(|| StoreError::InvalidValue {
                    name: name.to_string(),
                    value: value.to_string(),
                    reason: "expected true/false, yes/no, on/off, or 1/0".to_string(),
                })?;
            }
            "backup_count" => {
                self.backup_count = value.trim().parse().map_err(|_| StoreError::InvalidValue {
                    name: name.to_string(),
                    value: value.to_string(),
                    reason: "expected a non-negative integer".to_string(),
                })?;
            }
            _ => {
                return Err(StoreError::UnknownSetting {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Read a setting by name as its display string.
    pub fn get(&self, name: &str) -> StoreResult<String> {
        match name {
            "tasks_file" => Ok(self.tasks_file.display().to_string()),
            "default_categories" => Ok(self.default_categories.join(",")),
            "auto_backup" => Ok(self.auto_backup.to_string()),
            "backup_count" => Ok(self.backup_count.to_string()),
            _ => Err(StoreError::UnknownSetting {
                name: name.to_string(),
            }),
        }
    }

    /// Get the default configuration path based on the user's home
    /// directory.
    ///
    /// Returns `~/.taskpad/config.json` expanded to the actual home
    /// directory path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidPath` if the home directory cannot
    /// be determined.
    pub fn default_path() -> StoreResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_CONFIG_SUBPATH))
            .ok_or_else(|| StoreError::InvalidPath {
                path: PathBuf::from("~"),
                reason: "Could not determine home directory".to_string(),
            })
    }
}
