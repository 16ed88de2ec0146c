//! Backup and data-file utilities
//!
//! Whole-file copy conveniences over the active tasks file: timestamped
//! backups, restore, pruning, and switching the active file to a seed or
//! sample data set. These sit outside the store's CRUD contract.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// File-name prefix shared by all backup files
pub const BACKUP_PREFIX: &str = "tasks_backup_";

/// Directory that holds backups for the given tasks file (its parent,
/// or the current directory for a bare file name).
pub fn backup_dir(tasks_file: &Path) -> PathBuf {
    match tasks_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Create a backup of the tasks file beside it.
///
/// The backup is named `tasks_backup_<mtime-secs>.json` from the tasks
/// file's modification time. Returns `Ok(None)` when no tasks file
/// exists to back up (a reported condition, not an error).
pub fn create_backup(tasks_file: &Path) -> StoreResult<Option<PathBuf>> {
    if !tasks_file.exists() {
        debug!(path = %tasks_file.display(), "no tasks file to back up");
        return Ok(None);
    }

    let metadata = fs::metadata(tasks_file).map_err(|e| StoreError::Io {
        path: tasks_file.to_path_buf(),
        source: e,
    })?;
    let mtime_secs = metadata
        .modified()
        .map_err(|e| StoreError::Io {
            path: tasks_file.to_path_buf(),
            source: e,
        })?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let backup_path = backup_dir(tasks_file).join(format!("{}{}.json", BACKUP_PREFIX, mtime_secs));

    fs::copy(tasks_file, &backup_path).map_err(|e| StoreError::Io {
        path: backup_path.clone(),
        source: e,
    })?;

    debug!(backup = %backup_path.display(), "backup created");
    Ok(Some(backup_path))
}

/// List backup files in the given directory, sorted by file name.
///
/// Backup names embed the source file's modification time in seconds,
/// so name order is age order. A missing directory yields an empty list.
pub fn list_backups(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| StoreError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut backups: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with(BACKUP_PREFIX) && name.ends_with(".json") {
            backups.push(entry.path());
        }
    }

    backups.sort();
    Ok(backups)
}

/// Restore the tasks file from a backup by copying over it.
///
/// # Errors
///
/// Returns `StoreError::FileNotFound` when the backup does not exist.
pub fn restore_backup(backup: &Path, tasks_file: &Path) -> StoreResult<()> {
    install_data_file(backup, tasks_file)
}

/// Delete the oldest backups beyond `keep`, returning how many were
/// removed.
pub fn prune_backups(dir: &Path, keep: usize) -> StoreResult<usize> {
    let backups = list_backups(dir)?;
    if backups.len() <= keep {
        return Ok(0);
    }

    let excess = backups.len() - keep;
    for backup in &backups[..excess] {
        fs::remove_file(backup).map_err(|e| StoreError::Io {
            path: backup.clone(),
            source: e,
        })?;
        debug!(backup = %backup.display(), "pruned backup");
    }
    Ok(excess)
}

/// Copy a designated data file over the active tasks file.
///
/// Used for seed/test/demo switching and for restore. Creates the tasks
/// file's parent directory if needed.
///
/// # Errors
///
/// Returns `StoreError::FileNotFound` when the source does not exist.
pub fn install_data_file(source: &Path, tasks_file: &Path) -> StoreResult<()> {
    if !source.exists() {
        return Err(StoreError::FileNotFound {
            path: source.to_path_buf(),
        });
    }

    if let Some(parent) = tasks_file.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::copy(source, tasks_file).map_err(|e| StoreError::Io {
        path: tasks_file.to_path_buf(),
        source: e,
    })?;

    debug!(source = %source.display(), target = %tasks_file.display(), "installed data file");
    Ok(())
}
