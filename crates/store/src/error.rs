use std::path::PathBuf;
use thiserror::Error;

/// Store error types for Taskpad
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error reading or writing a store file
    #[error("Failed to access file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a store file as JSON
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error creating a directory for a store file
    #[error("Failed to create directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error with a store file path (invalid or unresolvable)
    #[error("Invalid path: {path} - {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Error when a file required by a copy operation does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Error when a configuration setting name is not recognized
    #[error("Unknown setting '{name}'. Valid settings: tasks_file, default_categories, auto_backup, backup_count")]
    UnknownSetting { name: String },

    /// Error when a configuration value cannot be parsed for its setting
    #[error("Invalid value '{value}' for setting '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl StoreError {
    /// Get the full error message including nested error details.
    ///
    /// Walks the source chain so the CLI can print one line with
    /// all available context.
    pub fn full_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let detail = err.to_string();
            if !message.contains(&detail) {
                message.push_str(&format!(" ({})", detail));
            }
            source = err.source();
        }
        message
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
