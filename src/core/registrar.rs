//! Batch registration of parsed entries.
//!
//! Entries are pushed strictly in order, one synchronous external call at a
//! time, so a later duplicate key always lands after an earlier one. A
//! failed entry is recorded and the batch moves on; nothing is retried.

use tracing::warn;

use crate::core::envfile::SecretEntry;
use crate::core::registry::SecretRegistry;

/// Outcome of one registration attempt.
pub struct RegistrationResult {
    pub key: String,
    pub succeeded: bool,
}

/// Collected outcomes for a whole batch.
pub struct BatchReport {
    pub results: Vec<RegistrationResult>,
}

impl BatchReport {
    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded).count()
    }
}

/// Called around each registration attempt so the CLI can interleave
/// progress output with the external calls.
pub trait Progress {
    /// About to register `key`.
    fn attempt(&mut self, key: &str);

    /// Finished registering `key`.
    fn outcome(&mut self, key: &str, succeeded: bool);
}

/// Register every entry against `registry`, in order.
///
/// Per-entry failures are reported through `progress` and the returned
/// report; they never abort the batch.
pub fn register_all(
    registry: &dyn SecretRegistry,
    entries: &[SecretEntry],
    progress: &mut dyn Progress,
) -> BatchReport {
    let mut results = Vec::with_capacity(entries.len());

    for entry in entries {
        progress.attempt(&entry.key);

        let succeeded = match registry.register(&entry.key, entry.value.as_str()) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %entry.key, error = %e, "registration failed");
                false
            }
        };

        progress.outcome(&entry.key, succeeded);
        results.push(RegistrationResult {
            key: entry.key.clone(),
            succeeded,
        });
    }

    BatchReport { results }
}
