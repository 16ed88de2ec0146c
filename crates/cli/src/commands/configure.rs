//! Configure command for reading and updating the configuration file
//!
//! With no arguments prints the full configuration; with `--setting`
//! alone prints one value; with `--setting` and `--value` validates,
//! applies, and persists the change.

use std::path::Path;

use clap::Args;
use taskpad_store::{Config, StoreError};

use crate::output;

/// Read or update configuration settings
#[derive(Debug, Args)]
pub struct ConfigureCommand {
    /// Setting to read or write (tasks_file, default_categories,
    /// auto_backup, backup_count)
    #[arg(long)]
    pub setting: Option<String>,

    /// New value for the setting
    #[arg(long, requires = "setting")]
    pub value: Option<String>,
}

impl ConfigureCommand {
    /// Execute the configure command against the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownSetting` or `StoreError::InvalidValue`
    /// for a bad setting name or value; the file on disk is not touched
    /// in either case. Returns `StoreError::Io` if persisting a valid
    /// change fails.
    pub fn execute(&self, config: &Config, config_path: &Path) -> Result<String, StoreError> {
        match (&self.setting, &self.value) {
            (None, _) => Ok(output::format_config(config)),
            (Some(setting), None) => {
                let value = config.get(setting)?;
                Ok(format!("{} = {}", setting, value))
            }
            (Some(setting), Some(value)) => {
                // Validate against a copy so a rejected value leaves the
                // active configuration untouched.
                let mut updated = config.clone();
                updated.set(setting, value)?;
                updated.save(config_path)?;
                Ok(format!("Set {} = {}", setting, updated.get(setting)?))
            }
        }
    }
}
