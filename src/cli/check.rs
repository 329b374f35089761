//! Check command - verify the registry client is usable.
//!
//! An environment doctor for CI onboarding: is the GitHub CLI installed,
//! is it authenticated, and which repository would secrets land in.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::registry::GhClient;
use crate::error::{RegistryError, Result};

/// Check that the registry client is installed and authenticated.
pub fn execute(repo: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let repo = repo.or(config.repo);
    let client = GhClient::new(repo.clone());

    output::section("Registry client");

    let program = client.locate()?;
    output::kv("client", program.display());

    if !client.auth_ok() {
        output::kv("auth", "not authenticated");
        return Err(RegistryError::Unauthenticated(
            client.program().display().to_string(),
        )
        .into());
    }
    output::kv("auth", "ok");

    match &repo {
        Some(repo) => output::kv("repository", repo),
        None => output::kv("repository", "current repository"),
    }

    println!();
    output::success("ready to push");

    Ok(())
}
