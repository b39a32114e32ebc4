//! CLI entry point and dispatch logic
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Builds CliArgs and discovers Config
//! - Initializes tracing
//! - Dispatches to command handlers
//! - Handles all error output

use clap::Parser;
use tracing::debug;

use super::args::{Cli, Commands};
use super::commands;

use crate::error_reporter::create_contextual_report;
use crate::{CliArgs, Config, ExitCode, VidflowError};
use vidflow_utils::logging::init_tracing;

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Main CLI execution function.
///
/// Handles ALL output including errors and returns the exit code to use on
/// failure. main.rs only calls `std::process::exit(code.as_i32())`.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_path: cli.config.clone(),
        index_path: cli.index.clone(),
        manuscript_dir: cli.manuscript_dir.clone(),
        no_color: cli.no_color || no_color_env(),
        verbose: cli.verbose.then_some(true),
    };

    let operation = cli.command.operation();

    let config = match Config::discover(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            let err = VidflowError::from(err);
            eprintln!("{}", create_contextual_report(&err, operation));
            return Err(err.to_exit_code());
        }
    };

    if let Err(e) = init_tracing(config.verbose) {
        eprintln!("⚠ Failed to initialize logging: {e}");
    }
    debug!(
        index = %config.index_path,
        manuscript_dir = %config.manuscript_dir,
        operation,
        "Configuration resolved"
    );

    let result = match cli.command {
        Commands::Phases { json } => commands::execute_phases_command(json, &config),
        Commands::List { phase, json } => {
            commands::execute_list_command(phase.as_deref(), json, &config)
        }
        Commands::Status {
            path,
            explain,
            json,
        } => commands::execute_status_command(&path, explain, json, &config),
        Commands::Tui => commands::execute_tui_command(&config),
        Commands::Config { json } => commands::execute_config_command(json, &config),
    };

    if let Err(error) = result {
        if let Some(vidflow_error) = error.downcast_ref::<VidflowError>() {
            eprintln!("{}", create_contextual_report(vidflow_error, operation));
            return Err(vidflow_error.to_exit_code());
        }

        eprintln!("✗ Unexpected error: {error:#}");
        eprintln!("\n  Run with --verbose for more detailed output");
        return Err(ExitCode::INTERNAL);
    }

    Ok(())
}
