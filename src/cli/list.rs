//! List command - show registered secret names.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::registry::{GhClient, SecretRegistry};
use crate::error::Result;

/// List registered secret names.
pub fn execute(json: bool, repo: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let registry = GhClient::new(repo.or(config.repo));

    let names = registry.list_names()?;

    if json {
        println!("{}", serde_json::to_string(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        output::dimmed("no secrets registered");
    } else {
        println!("{} secrets:", names.len());
        for name in &names {
            output::list_item(name);
        }
    }

    Ok(())
}
