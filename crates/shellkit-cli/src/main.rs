//! shellkit CLI
//!
//! Idempotent section editing and small filesystem/git helpers for shell
//! scripts.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialise logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::UpdateSection {
            remove,
            dry_run,
            args,
        } => commands::run_update_section(remove, dry_run, &args),
        Commands::Apply { manifest, dry_run } => commands::run_apply(&manifest, dry_run),
        Commands::EnsureDir { dirs } => commands::run_ensure_dir(&dirs),
        Commands::CurrentBranch { path } => commands::run_current_branch(&path),
    }
}
