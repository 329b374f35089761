//! Hoist - bulk-register CI secrets from an env file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── push          # Register every entry from a secrets file
//! │   ├── list          # List registered secret names
//! │   ├── check         # Verify the registry client is usable
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .hoist.toml defaults
//!     ├── envfile       # KEY=VALUE file parsing
//!     ├── registrar     # Batch registration loop
//!     └── registry/     # Registry client backends
//!         ├── mod       # SecretRegistry trait
//!         └── gh        # GitHub CLI implementation
//! ```
//!
//! # Features
//!
//! - Lenient, ordered ingestion of dotenv-style secrets files
//! - Best-effort batches: one bad entry never blocks the rest
//! - Drives the pre-authenticated `gh` CLI, no tokens handled here
//! - Secret values piped over stdin and wiped from memory after use

pub mod cli;
pub mod core;
pub mod error;
