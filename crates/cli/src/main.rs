use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{AppContext, Command};
use taskpad_store::{Config, StoreResult, TaskStore, backup};

/// Environment variable name for the tasks-file path
const TASKS_FILE_ENV: &str = "TASKPAD_TASKS_FILE";

/// Environment variable name for the configuration-file path
const CONFIG_ENV: &str = "TASKPAD_CONFIG";

/// Taskpad - a simple to-do list CLI
#[derive(Parser)]
#[command(name = "tsk")]
#[command(version = "0.1.0")]
#[command(about = "A simple to-do list CLI", long_about = None)]
struct Args {
    /// Path to the tasks file (can also be set via TASKPAD_TASKS_FILE)
    #[arg(long, global = true)]
    tasks_file: Option<PathBuf>,

    /// Path to the configuration file (can also be set via TASKPAD_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the configuration path from command line, environment variable,
/// or default.
///
/// Priority:
/// 1. Command line --config argument
/// 2. TASKPAD_CONFIG environment variable (if non-empty)
/// 3. Default path (~/.taskpad/config.json)
fn resolve_config_path(cli_config: Option<PathBuf>) -> StoreResult<PathBuf> {
    if let Some(path) = cli_config {
        return Ok(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(PathBuf::from(env_path));
    }

    Config::default_path()
}

/// Get the tasks-file path from command line, environment variable, or
/// the loaded configuration.
///
/// Priority:
/// 1. Command line --tasks-file argument
/// 2. TASKPAD_TASKS_FILE environment variable (if non-empty)
/// 3. tasks_file from the configuration (defaults to tasks.json)
fn resolve_tasks_file(cli_tasks_file: Option<PathBuf>, config: &Config) -> PathBuf {
    if let Some(path) = cli_tasks_file {
        return path;
    }

    if let Ok(env_path) = std::env::var(TASKS_FILE_ENV)
        && !env_path.is_empty()
    {
        return PathBuf::from(env_path);
    }

    config.tasks_file.clone()
}

/// Initialize logging based on the RUST_LOG environment variable,
/// falling back to warn.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> StoreResult<()> {
    let args = Args::parse();
    run_with_args(&args)
}

/// Run the application with the given arguments
fn run_with_args(args: &Args) -> StoreResult<()> {
    // Resolve configuration first; it supplies the default tasks file
    let config_path = resolve_config_path(args.config.clone())?;
    let config = Config::load(&config_path)?;

    // Determine the tasks file using priority: CLI arg > env var > config
    let tasks_file = resolve_tasks_file(args.tasks_file.clone(), &config);
    debug!(config = %config_path.display(), tasks = %tasks_file.display(), "resolved paths");

    let ctx = AppContext {
        store: TaskStore::new(tasks_file),
        config,
        config_path,
    };

    // Run the command or show usage help
    match &args.command {
        Some(cmd) => {
            if ctx.config.auto_backup
                && cmd.mutates_tasks()
                && backup::create_backup(ctx.store.path())?.is_some()
            {
                backup::prune_backups(
                    &backup::backup_dir(ctx.store.path()),
                    ctx.config.backup_count as usize,
                )?;
            }

            let result = cmd.execute(&ctx)?;
            println!("{}", result);
        }
        None => {
            let _ = Args::command().print_help();
        }
    }

    Ok(())
}
