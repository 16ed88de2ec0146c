//! CLI commands for Taskpad
//!
//! This module contains all subcommand implementations for the tsk CLI.

pub mod add;
pub mod configure;
pub mod data;
pub mod list;
pub mod remove;
pub mod renumber;

pub use add::AddCommand;
pub use configure::ConfigureCommand;
pub use data::{DataAction, DataCommand};
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use renumber::RenumberCommand;

use std::path::PathBuf;

use clap::Subcommand;
use taskpad_store::{Config, StoreError, TaskStore};

use crate::output;

/// Everything a command needs: the task store over the resolved tasks
/// file, the loaded configuration, and where that configuration lives.
pub struct AppContext {
    pub store: TaskStore,
    pub config: Config,
    pub config_path: PathBuf,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new task
    Add(AddCommand),
    /// Remove a task by id
    Remove(RemoveCommand),
    /// List tasks, optionally filtered by category
    List(ListCommand),
    /// Reassign sequential ids to all tasks
    Renumber(RenumberCommand),
    /// Read or update configuration settings
    Configure(ConfigureCommand),
    /// Manage data files and backups
    Data(DataCommand),
}

impl Command {
    /// Execute the command and return the message to print.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the command execution fails. Not-found
    /// conditions (removing an absent id, filtering an absent category)
    /// are messages, not errors.
    pub fn execute(&self, ctx: &AppContext) -> Result<String, StoreError> {
        match self {
            Command::Add(cmd) => {
                let task = cmd.execute(&ctx.store)?;
                Ok(output::format_added(&task))
            }
            Command::Remove(cmd) => {
                let removed = cmd.execute(&ctx.store)?;
                Ok(output::format_removed(cmd.id, removed.as_ref()))
            }
            Command::List(cmd) => {
                let tasks = cmd.execute(&ctx.store)?;
                Ok(output::format_task_lines(&tasks))
            }
            Command::Renumber(cmd) => {
                let count = cmd.execute(&ctx.store)?;
                Ok(output::format_renumbered(count))
            }
            Command::Configure(cmd) => cmd.execute(&ctx.config, &ctx.config_path),
            Command::Data(cmd) => cmd.execute(&ctx.store),
        }
    }

    /// Whether this command rewrites the task sequence through the
    /// store. Gates the auto-backup performed before execution.
    pub fn mutates_tasks(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Remove(_) | Command::Renumber(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Test struct to parse commands
    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_command_add_parses() {
        let cli = TestCli::try_parse_from(["test", "add", "Buy milk", "Personal"]).unwrap();
        match cli.command {
            Command::Add(cmd) => {
                assert_eq!(cmd.description, "Buy milk");
                assert_eq!(cmd.category, "Personal");
            }
            other => panic!("expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_command_remove_parses() {
        let cli = TestCli::try_parse_from(["test", "remove", "7"]).unwrap();
        match cli.command {
            Command::Remove(cmd) => assert_eq!(cmd.id, 7),
            other => panic!("expected Remove, got {:?}", other),
        }
    }

    #[test]
    fn test_command_list_parses_with_category() {
        let cli = TestCli::try_parse_from(["test", "list", "--category", "Work"]).unwrap();
        match cli.command {
            Command::List(cmd) => assert_eq!(cmd.category, Some("Work".to_string())),
            other => panic!("expected List, got {:?}", other),
        }
    }

    #[test]
    fn test_command_renumber_parses() {
        let cli = TestCli::try_parse_from(["test", "renumber"]).unwrap();
        assert!(matches!(cli.command, Command::Renumber(_)));
    }

    #[test]
    fn test_command_configure_parses() {
        let cli = TestCli::try_parse_from([
            "test",
            "configure",
            "--setting",
            "auto_backup",
            "--value",
            "true",
        ])
        .unwrap();
        match cli.command {
            Command::Configure(cmd) => {
                assert_eq!(cmd.setting, Some("auto_backup".to_string()));
                assert_eq!(cmd.value, Some("true".to_string()));
            }
            other => panic!("expected Configure, got {:?}", other),
        }
    }

    #[test]
    fn test_command_data_parses() {
        let cli = TestCli::try_parse_from(["test", "data", "backup"]).unwrap();
        match cli.command {
            Command::Data(cmd) => assert!(matches!(cmd.action, DataAction::Backup)),
            other => panic!("expected Data, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(TestCli::try_parse_from(["test", "frobnicate"]).is_err());
    }

    #[test]
    fn test_mutates_tasks_gates_store_mutations() {
        let mutating = [
            vec!["test", "add", "Buy milk", "Personal"],
            vec!["test", "remove", "1"],
            vec!["test", "renumber"],
        ];
        for argv in mutating {
            let cli = TestCli::try_parse_from(argv.clone()).unwrap();
            assert!(cli.command.mutates_tasks(), "{:?} should mutate", argv);
        }

        let read_only = [
            vec!["test", "list"],
            vec!["test", "configure"],
            vec!["test", "data", "info"],
        ];
        for argv in read_only {
            let cli = TestCli::try_parse_from(argv.clone()).unwrap();
            assert!(!cli.command.mutates_tasks(), "{:?} should not mutate", argv);
        }
    }

    #[test]
    fn test_command_debug() {
        let cli = TestCli::try_parse_from(["test", "add", "Debug test", "Misc"]).unwrap();
        let debug_str = format!("{:?}", cli.command);
        assert!(debug_str.contains("Add"));
        assert!(debug_str.contains("Debug test"));
    }
}
