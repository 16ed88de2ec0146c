//! Task store over a flat JSON backing file
//!
//! Every operation is a complete load/mutate/save cycle against the
//! backing file. No state is held between operations; two concurrent
//! invocations race last-writer-wins by design.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::Task;

/// Task store backed by a JSON array file
///
/// The store holds only the backing-file path. The full task sequence is
/// read at the start of every operation and written back in its entirety
/// by every mutating operation.
pub struct TaskStore {
    /// Path to the backing JSON file
    path: PathBuf,
}

impl TaskStore {
    /// Create a store over the given backing file.
    ///
    /// The file does not need to exist yet; a missing file reads as an
    /// empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full task sequence from the backing file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read.
    /// Returns `StoreError::Parse` if the content is not a valid JSON
    /// array of tasks; no recovery is attempted.
    pub fn load(&self) -> StoreResult<Vec<Task>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "backing file missing, loading empty store");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Persist the full task sequence, overwriting the backing file.
    ///
    /// Creates the parent directory if it does not exist. The write is a
    /// direct overwrite; no atomicity is guaranteed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CreateDirectory` if the parent directory
    /// cannot be created, `StoreError::Io` if the write fails.
    pub fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Two-space indentation, matching the on-disk format the
        // store has always used.
        let content = serde_json::to_string_pretty(tasks).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), count = tasks.len(), "saving tasks");
        fs::write(&self.path, content).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Add a new task and return it.
    ///
    /// The id is one more than the maximum id currently in the store,
    /// or 1 when the store is empty.
    pub fn add(&self, description: &str, category: &str) -> StoreResult<Task> {
        let mut tasks = self.load()?;

        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(id, description, category);
        tasks.push(task.clone());

        self.save(&tasks)?;
        Ok(task)
    }

    /// Remove the task with the given id.
    ///
    /// Returns the removed task, or `None` when no task matched. On a
    /// miss the backing file is not rewritten.
    pub fn remove(&self, id: u64) -> StoreResult<Option<Task>> {
        let mut tasks = self.load()?;

        let Some(position) = tasks.iter().position(|t| t.id == id) else {
            debug!(id, "remove: no matching task");
            return Ok(None);
        };

        let removed = tasks.remove(position);
        self.save(&tasks)?;
        Ok(Some(removed))
    }

    /// List tasks, optionally filtered by category.
    ///
    /// Category matching is case-insensitive; the result preserves store
    /// order. An empty vec means no tasks exist or none matched.
    pub fn list(&self, category: Option<&str>) -> StoreResult<Vec<Task>> {
        let tasks = self.load()?;

        match category {
            Some(filter) => Ok(tasks
                .into_iter()
                .filter(|t| t.category_matches(filter))
                .collect()),
            None => Ok(tasks),
        }
    }

    /// Reassign ids 1..N in ascending order of current id.
    ///
    /// Returns the number of tasks renumbered; 0 on an empty store, in
    /// which case the backing file is left untouched.
    pub fn renumber(&self) -> StoreResult<usize> {
        let mut tasks = self.load()?;

        if tasks.is_empty() {
            return Ok(0);
        }

        tasks.sort_by_key(|t| t.id);
        for (index, task) in tasks.iter_mut().enumerate() {
            task.id = index as u64 + 1;
        }

        self.save(&tasks)?;
        Ok(tasks.len())
    }
}

// Ensure TaskStore can be shared across threads
static_assertions::assert_impl_all!(TaskStore: Send, Sync);
