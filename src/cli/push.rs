//! Push command - register every entry from a secrets file.
//!
//! The batch is best-effort: a failed entry is reported and the rest are
//! still attempted, so the process exits 0 whenever the file itself could
//! be read. Only a missing argument or an unreadable file is fatal.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::envfile;
use crate::core::registrar::{self, Progress};
use crate::core::registry::{GhClient, SecretRegistry};
use crate::error::{Error, Result};

/// Register every entry from `file` (or the configured default).
pub fn execute(file: Option<PathBuf>, repo: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let file = file
        .or_else(|| config.file.as_deref().map(PathBuf::from))
        .ok_or(Error::Usage)?;
    let repo = repo.or(config.repo);

    let registry = GhClient::new(repo);
    push_file(&registry, &file)
}

/// Parse `path` and push each entry through `registry`, in file order.
fn push_file(registry: &dyn SecretRegistry, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    // Keep the raw plaintext zeroizable alongside the parsed entries
    let contents = Zeroizing::new(std::fs::read_to_string(path)?);
    let entries = envfile::parse(&contents);
    debug!(path = %path.display(), entries = entries.len(), "parsed secrets file");

    let report = registrar::register_all(registry, &entries, &mut ConsoleProgress);

    println!();
    if report.attempted() == 0 {
        output::dimmed("nothing to register");
    } else if report.failed() == 0 {
        output::success(&format!("{} registered", report.succeeded()));
    } else {
        output::warn(&format!(
            "{} registered, {} failed",
            report.succeeded(),
            report.failed()
        ));
    }

    // Closing report: names currently in the remote store. A listing
    // failure reads like an empty store and does not fail the batch.
    match registry.list_names() {
        Ok(names) => print_listing(&names),
        Err(e) => {
            warn!(error = %e, "could not list registered secrets");
            output::dimmed("unable to list registered secrets");
        }
    }

    Ok(())
}

/// Writes the per-entry progress lines around each external call.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn attempt(&mut self, key: &str) {
        output::progress(&format!("registering {}", output::key(key)));
    }

    fn outcome(&mut self, _key: &str, succeeded: bool) {
        output::progress_done(succeeded);
    }
}

fn print_listing(names: &[String]) {
    output::section("Registered secrets");
    if names.is_empty() {
        output::dimmed("no secrets registered");
    } else {
        for name in names {
            output::list_item(name);
        }
    }
}
