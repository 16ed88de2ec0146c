//! Add command for creating new tasks
//!
//! Implements the `tsk add` command to append a task to the store.

use clap::Args;
use taskpad_store::{StoreError, Task, TaskStore};

/// Add a new task
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Task description
    #[arg(required = true)]
    pub description: String,

    /// Task category
    #[arg(required = true)]
    pub category: String,
}

impl AddCommand {
    /// Execute the add command.
    ///
    /// The store assigns the id (one more than the current maximum).
    /// Returns the created task.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing file cannot be read, parsed,
    /// or written.
    pub fn execute(&self, store: &TaskStore) -> Result<Task, StoreError> {
        store.add(&self.description, &self.category)
    }
}
