//! GitHub CLI registry backend.
//!
//! Drives the `gh` binary for every operation. `gh` must be installed and
//! already authenticated (`gh auth login`); hoist never touches tokens.
//!
//! Secret values are written to the child's stdin so they never appear in
//! the process table or in shell history.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::trace;

use super::SecretRegistry;
use crate::error::RegistryError;

/// Default program name, overridable with the `HOIST_GH_BIN` env var.
const GH_PROGRAM: &str = "gh";

/// Registry client backed by the GitHub CLI.
pub struct GhClient {
    program: PathBuf,
    repo: Option<String>,
}

/// One row of `gh secret list --json name` output.
#[derive(Deserialize)]
struct SecretName {
    name: String,
}

impl GhClient {
    /// Create a client targeting `repo` (owner/name), or the repository of
    /// the current working directory when `None`.
    pub fn new(repo: Option<String>) -> Self {
        let program = std::env::var_os("HOIST_GH_BIN")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(GH_PROGRAM));
        Self { program, repo }
    }

    /// The program this client invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Resolve the program on PATH.
    pub fn locate(&self) -> Result<PathBuf, RegistryError> {
        which::which(&self.program)
            .map_err(|_| RegistryError::ToolNotFound(self.program.display().to_string()))
    }

    /// Whether `gh auth status` reports a usable login.
    pub fn auth_ok(&self) -> bool {
        Command::new(&self.program)
            .args(["auth", "status"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

impl SecretRegistry for GhClient {
    fn register(&self, key: &str, value: &str) -> Result<(), RegistryError> {
        trace!(key, "registering secret");

        let mut cmd = Command::new(&self.program);
        cmd.args(["secret", "set", key]);
        if let Some(repo) = &self.repo {
            cmd.args(["--repo", repo]);
        }
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| RegistryError::Spawn {
            program: self.program_name(),
            source: e,
        })?;

        // Write the secret body to stdin, then close it so gh stops reading
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(value.as_bytes())
                .map_err(|e| RegistryError::Spawn {
                    program: self.program_name(),
                    source: e,
                })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| RegistryError::Spawn {
                program: self.program_name(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RegistryError::CommandFailed {
                program: self.program_name(),
                action: "secret set",
                stderr: stderr.trim().to_string(),
            });
        }

        trace!(key, "secret registered");
        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>, RegistryError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["secret", "list", "--json", "name"]);
        if let Some(repo) = &self.repo {
            cmd.args(["--repo", repo]);
        }

        let output = cmd
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RegistryError::Spawn {
                program: self.program_name(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RegistryError::CommandFailed {
                program: self.program_name(),
                action: "secret list",
                stderr: stderr.trim().to_string(),
            });
        }

        let rows: Vec<SecretName> =
            serde_json::from_slice(&output.stdout).map_err(|e| RegistryError::BadListing {
                program: self.program_name(),
                source: e,
            })?;

        Ok(rows.into_iter().map(|r| r.name).collect())
    }
}
