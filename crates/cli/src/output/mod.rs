//! Output formatting module for Taskpad
//!
//! Renders command results into the strings the CLI prints, keeping
//! presentation out of the command logic.

use taskpad_store::{Config, SETTING_NAMES, Task};

/// Format tasks as one `id: description [category]` line each.
///
/// Returns the distinguished empty-result message when there are no
/// tasks to show.
pub fn format_task_lines(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    tasks
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the confirmation for a newly created task.
pub fn format_added(task: &Task) -> String {
    format!(
        "Added task {}: {} [{}]",
        task.id, task.description, task.category
    )
}

/// Format the outcome of a remove, hit or miss.
pub fn format_removed(id: u64, removed: Option<&Task>) -> String {
    match removed {
        Some(_) => format!("Removed task {}.", id),
        None => format!("Task {} not found.", id),
    }
}

/// Format the outcome of a renumber.
pub fn format_renumbered(count: usize) -> String {
    if count == 0 {
        "No tasks to renumber.".to_string()
    } else {
        format!("Renumbered {} tasks.", count)
    }
}

/// Format the full configuration, one `name = value` line per setting.
pub fn format_config(config: &Config) -> String {
    SETTING_NAMES
        .into_iter()
        .map(|name| {
            // SETTING_NAMES only holds recognized names
            let value = config.get(name).expect("recognized setting");
            format!("{} = {}", name, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
