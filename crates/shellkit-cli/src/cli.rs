//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// shellkit - Idempotent file editing and helpers for shell scripts
#[derive(Parser, Debug)]
#[command(name = "shellkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert, update or remove a marker-delimited section of a file
    ///
    /// Only the first section with matching markers is touched. A missing
    /// file is left alone.
    ///
    /// Examples:
    ///   shellkit update-section ~/.bashrc '# >>> kit >>>' '# <<< kit <<<' 'export A=1'
    ///   shellkit update-section --remove ~/.bashrc '# >>> kit >>>' '# <<< kit <<<'
    UpdateSection {
        /// Remove the section instead of inserting or updating it
        #[arg(long)]
        remove: bool,

        /// Print the change as a diff without writing
        #[arg(long)]
        dry_run: bool,

        /// <FILE> <START> <END> [LINE]...
        #[arg(
            value_name = "ARGS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },

    /// Apply every section edit declared in a manifest (TOML, JSON or YAML)
    Apply {
        /// Path to the manifest
        #[arg(env = "SHELLKIT_MANIFEST")]
        manifest: PathBuf,

        /// Print the changes as diffs without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Create directories and their parents if missing
    EnsureDir {
        /// Directories to create
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },

    /// Print the current git branch (nothing when HEAD is detached)
    CurrentBranch {
        /// Path inside the repository
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
