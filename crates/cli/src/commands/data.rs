//! Data-management command group
//!
//! File-copy conveniences over the active tasks file: switching to the
//! seed/test/demo data sets, inspecting data files, and creating,
//! listing, or restoring backups.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use taskpad_store::backup;
use taskpad_store::{StoreError, TaskStore};

/// Path of the seed data set, relative to the working directory
pub const SEED_FILE: &str = "data/tasks_seed.json";

/// Path of the test data set, relative to the working directory
pub const TEST_DATA_FILE: &str = "data/test_data.json";

/// Path of the demo data set, relative to the working directory
pub const DEMO_FILE: &str = "data/sample_demo.json";

/// Manage data files and backups
#[derive(Debug, Args)]
pub struct DataCommand {
    #[command(subcommand)]
    pub action: DataAction,
}

/// Data-management actions
#[derive(Debug, Subcommand)]
pub enum DataAction {
    /// Reset the tasks file to the seed data
    Seed,
    /// Reset the tasks file to the test data
    Test,
    /// Reset the tasks file to the demo data
    Demo,
    /// Show task counts and categories for all data files
    Info,
    /// Preview the first tasks of each data file
    Sample,
    /// Create a backup of the current tasks file
    Backup,
    /// List available backup files
    Backups,
    /// Restore the tasks file from a backup
    Restore {
        /// Backup file to restore from
        backup_file: PathBuf,
    },
}

/// The data files reported by `info`, including the active tasks file.
fn info_files(tasks_file: &Path) -> Vec<(&'static str, PathBuf)> {
    vec![
        ("Current Tasks", tasks_file.to_path_buf()),
        ("Seed Data", PathBuf::from(SEED_FILE)),
        ("Test Data", PathBuf::from(TEST_DATA_FILE)),
        ("Demo Data", PathBuf::from(DEMO_FILE)),
    ]
}

/// The data files previewed by `sample`.
fn sample_files() -> Vec<(&'static str, PathBuf)> {
    vec![
        ("Seed Data", PathBuf::from(SEED_FILE)),
        ("Test Data", PathBuf::from(TEST_DATA_FILE)),
        ("Demo Data", PathBuf::from(DEMO_FILE)),
    ]
}

/// Describe one data file for `info`: task count and distinct
/// categories, or why it could not be read.
fn describe_file(name: &str, path: &Path) -> String {
    if !path.exists() {
        return format!("{} ({}): file not found", name, path.display());
    }

    match TaskStore::new(path).load() {
        Ok(tasks) => {
            let categories: BTreeSet<&str> = tasks.iter().map(|t| t.category.as_str()).collect();
            if categories.is_empty() {
                format!("{} ({}): 0 tasks", name, path.display())
            } else {
                format!(
                    "{} ({}): {} tasks, categories: {}",
                    name,
                    path.display(),
                    tasks.len(),
                    categories.into_iter().collect::<Vec<_>>().join(", ")
                )
            }
        }
        Err(_) => format!("{} ({}): invalid JSON", name, path.display()),
    }
}

/// Preview one data file for `sample`: its first three tasks.
fn preview_file(name: &str, path: &Path) -> String {
    let mut out = format!("{} ({}):", name, path.display());

    if !path.exists() {
        out.push_str("\n  file not found");
        return out;
    }

    match TaskStore::new(path).load() {
        Ok(tasks) => {
            if tasks.is_empty() {
                out.push_str("\n  no tasks");
            }
            for task in tasks.iter().take(3) {
                out.push_str(&format!("\n  {}", task));
            }
            if tasks.len() > 3 {
                out.push_str(&format!("\n  ... and {} more tasks", tasks.len() - 3));
            }
            out
        }
        Err(_) => {
            out.push_str("\n  invalid JSON");
            out
        }
    }
}

impl DataCommand {
    /// Execute the data-management action against the active tasks file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileNotFound` when a seed/restore source is
    /// missing, `StoreError::Io` on copy or directory-listing failures.
    pub fn execute(&self, store: &TaskStore) -> Result<String, StoreError> {
        match &self.action {
            DataAction::Seed => {
                backup::install_data_file(Path::new(SEED_FILE), store.path())?;
                Ok("Reset to seed data.".to_string())
            }
            DataAction::Test => {
                backup::install_data_file(Path::new(TEST_DATA_FILE), store.path())?;
                Ok("Reset to test data.".to_string())
            }
            DataAction::Demo => {
                backup::install_data_file(Path::new(DEMO_FILE), store.path())?;
                Ok("Reset to demo data.".to_string())
            }
            DataAction::Info => Ok(info_files(store.path())
                .iter()
                .map(|(name, path)| describe_file(name, path))
                .collect::<Vec<_>>()
                .join("\n")),
            DataAction::Sample => Ok(sample_files()
                .iter()
                .map(|(name, path)| preview_file(name, path))
                .collect::<Vec<_>>()
                .join("\n")),
            DataAction::Backup => match backup::create_backup(store.path())? {
                Some(path) => Ok(format!("Backup created: {}", path.display())),
                None => Ok("No tasks file to back up.".to_string()),
            },
            DataAction::Backups => {
                let backups = backup::list_backups(&backup::backup_dir(store.path()))?;
                if backups.is_empty() {
                    Ok("No backup files found.".to_string())
                } else {
                    let mut out = String::from("Available backups:");
                    for path in backups {
                        out.push_str(&format!("\n  {}", path.display()));
                    }
                    Ok(out)
                }
            }
            DataAction::Restore { backup_file } => {
                backup::restore_backup(backup_file, store.path())?;
                Ok(format!("Restored from: {}", backup_file.display()))
            }
        }
    }
}
