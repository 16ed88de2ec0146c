//! List command for displaying tasks
//!
//! Implements the `tsk list` command with optional category filtering.

use clap::Args;
use taskpad_store::{StoreError, Task, TaskStore};

/// List tasks, optionally filtered by category
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Filter by category (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    ///
    /// Returns the matching tasks in store order. An empty vec means no
    /// tasks exist or none matched the filter; callers render that as
    /// the distinguished empty result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing file cannot be read or parsed.
    pub fn execute(&self, store: &TaskStore) -> Result<Vec<Task>, StoreError> {
        store.list(self.category.as_deref())
    }
}
