//! Command-line interface.

pub mod check;
pub mod completions;
pub mod list;
pub mod output;
pub mod push;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

/// Hoist - bulk-register CI secrets from an env file.
#[derive(Parser)]
#[command(
    name = "hoist",
    about = "Bulk-register CI secrets from an env file",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Register every KEY=VALUE pair from a secrets file
    Push {
        /// Path to the secrets file (one KEY=VALUE per line)
        file: Option<PathBuf>,

        /// Target repository (owner/name); defaults to the current repo
        #[arg(short = 'R', long, env = "HOIST_REPO")]
        repo: Option<String>,
    },

    /// List registered secret names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Target repository (owner/name); defaults to the current repo
        #[arg(short = 'R', long, env = "HOIST_REPO")]
        repo: Option<String>,
    },

    /// Check that the registry client is installed and authenticated
    Check {
        /// Target repository (owner/name); defaults to the current repo
        #[arg(short = 'R', long, env = "HOIST_REPO")]
        repo: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Push { file, repo } => push::execute(file, repo),
        Command::List { json, repo } => list::execute(json, repo),
        Command::Check { repo } => check::execute(repo),
        Command::Completions { shell } => completions::execute(shell),
    }
}
