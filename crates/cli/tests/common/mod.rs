//! Test infrastructure for integration tests
//!
//! Provides isolated store setup/teardown and command builder helpers.
//! Each test gets its own temp directory to ensure no shared state.

use std::path::PathBuf;

use taskpad_cli::commands::{
    AddCommand, AppContext, ConfigureCommand, ListCommand, RemoveCommand, RenumberCommand,
};
use taskpad_store::{Config, Task, TaskStore};

/// Test context owning an isolated temp directory for the tasks and
/// configuration files
pub struct TestContext {
    pub temp_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context with an isolated directory.
    ///
    /// Each call creates a uniquely named temp directory using process
    /// ID, thread ID, and nanosecond timestamp to guarantee isolation.
    pub fn new() -> Self {
        let temp_dir = std::env::temp_dir().join(format!(
            "tsk-integration-test-{}-{:?}-{}",
            std::process::id(),
            std::thread::current().id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&temp_dir).unwrap();

        Self { temp_dir }
    }

    /// Path of the tasks file inside this context.
    pub fn tasks_file(&self) -> PathBuf {
        self.temp_dir.join("tasks.json")
    }

    /// Path of the configuration file inside this context.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.join("config.json")
    }

    /// A store over this context's tasks file.
    pub fn store(&self) -> TaskStore {
        TaskStore::new(self.tasks_file())
    }

    /// A full command context (store + loaded config) for dispatch-level
    /// tests.
    pub fn app_context(&self) -> AppContext {
        AppContext {
            store: self.store(),
            config: Config::load(&self.config_path()).unwrap(),
            config_path: self.config_path(),
        }
    }

    /// Seed the tasks file with the given tasks.
    pub fn seed(&self, tasks: &[Task]) {
        self.store().save(tasks).unwrap();
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Auto-cleanup on drop
        let _ = std::fs::remove_dir_all(&self.temp_dir);
    }
}

// =============================================================================
// Command Builder Helpers
// =============================================================================

/// Create an AddCommand.
pub fn add_cmd(description: &str, category: &str) -> AddCommand {
    AddCommand {
        description: description.to_string(),
        category: category.to_string(),
    }
}

/// Create a RemoveCommand.
pub fn remove_cmd(id: u64) -> RemoveCommand {
    RemoveCommand { id }
}

/// Create a ListCommand with an optional category filter.
pub fn list_cmd(category: Option<&str>) -> ListCommand {
    ListCommand {
        category: category.map(str::to_string),
    }
}

/// Create a RenumberCommand.
pub fn renumber_cmd() -> RenumberCommand {
    RenumberCommand {}
}

/// Create a ConfigureCommand.
pub fn configure_cmd(setting: Option<&str>, value: Option<&str>) -> ConfigureCommand {
    ConfigureCommand {
        setting: setting.map(str::to_string),
        value: value.map(str::to_string),
    }
}
