//! Hoist - bulk-register CI secrets from an env file.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hoist::cli::output;
use hoist::cli::{execute, Cli};
use hoist::error::{Error, RegistryError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("HOIST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hoist=debug")
        } else {
            EnvFilter::new("hoist=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Registry(RegistryError::ToolNotFound(_)) => {
                Some("install the GitHub CLI: https://cli.github.com")
            }
            Error::Registry(RegistryError::Unauthenticated(_)) => Some("run: gh auth login"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
