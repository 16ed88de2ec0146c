//! Remove command for deleting tasks by id

use clap::Args;
use taskpad_store::{StoreError, Task, TaskStore};

/// Remove a task by id
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Id of the task to remove
    #[arg(required = true)]
    pub id: u64,
}

impl RemoveCommand {
    /// Execute the remove command.
    ///
    /// Returns the removed task, or `None` when no task has the given
    /// id; a miss leaves the backing file untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing file cannot be read, parsed,
    /// or written.
    pub fn execute(&self, store: &TaskStore) -> Result<Option<Task>, StoreError> {
        store.remove(self.id)
    }
}
