//! Renumber command for reassigning sequential ids

use clap::Args;
use taskpad_store::{StoreError, TaskStore};

/// Reassign ids 1..N in ascending order of current id
#[derive(Debug, Args)]
pub struct RenumberCommand {}

impl RenumberCommand {
    /// Execute the renumber command.
    ///
    /// Returns the number of tasks renumbered; 0 means the store was
    /// empty and nothing was written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing file cannot be read, parsed,
    /// or written.
    pub fn execute(&self, store: &TaskStore) -> Result<usize, StoreError> {
        store.renumber()
    }
}
