//! Parsing of dotenv-style secrets files.
//!
//! One declaration per line, `KEY=VALUE`, split on the first `=` so values
//! may themselves contain `=`. Blank lines and `#` comments are ignored.
//! Lines that cannot yield a non-empty key and value are dropped without
//! complaint; ingestion is best-effort, not a validator.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

/// One parsed `KEY=VALUE` declaration.
///
/// The key carries no surrounding whitespace and the value is wiped from
/// memory when the entry is dropped.
pub struct SecretEntry {
    pub key: String,
    pub value: Zeroizing<String>,
}

impl fmt::Debug for SecretEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never let the value reach logs or panic messages
        f.debug_struct("SecretEntry")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Parse file contents into entries, preserving file order.
///
/// Order is significant: duplicate keys are kept as separate entries so a
/// later occurrence overwrites the earlier one in the remote store.
pub fn parse(contents: &str) -> Vec<SecretEntry> {
    let mut entries = Vec::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some(kv) => kv,
            None => {
                debug!(line = idx + 1, "skipping line without '='");
                continue;
            }
        };

        let key = key.trim();
        let value = value.trim();

        if key.is_empty() || value.is_empty() {
            debug!(line = idx + 1, "skipping line with empty key or value");
            continue;
        }

        entries.push(SecretEntry {
            key: key.to_string(),
            value: Zeroizing::new(value.to_string()),
        });
    }

    entries
}
