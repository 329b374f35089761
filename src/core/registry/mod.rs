//! Registry client abstraction.
//!
//! The actual remote mutation is delegated to an external, pre-authenticated
//! client. Keeping it behind a trait lets the batch loop run against an
//! in-memory fake in tests.

pub mod gh;

pub use gh::GhClient;

use crate::error::RegistryError;

/// A remote store of named, write-only secrets.
pub trait SecretRegistry {
    /// Upsert a named secret. Re-registration with the same key overwrites.
    fn register(&self, key: &str, value: &str) -> Result<(), RegistryError>;

    /// Names of currently registered secrets. Values are never retrievable.
    fn list_names(&self) -> Result<Vec<String>, RegistryError>;
}
