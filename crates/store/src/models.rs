//! Data models for Taskpad task management
//!
//! Defines the task record persisted in the backing JSON file.

use serde::{Deserialize, Serialize};

/// A task in the Taskpad store
///
/// Tasks are flat records persisted as a JSON array. Ids are assigned
/// by the store (one more than the current maximum), never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the store
    pub id: u64,

    /// Free-form task description
    pub description: String,

    /// Category used for filtering (matched case-insensitively,
    /// stored case-preserved)
    pub category: String,
}

impl Task {
    /// Create a new task with the given id, description, and category
    pub fn new(id: u64, description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Whether this task's category matches the given filter,
    /// ignoring case
    pub fn category_matches(&self, filter: &str) -> bool {
        self.category.to_lowercase() == filter.to_lowercase()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.id, self.description, self.category)
    }
}
