//! Optional configuration for default push targets.
//!
//! Looked up as `.hoist.toml` in the working directory, then
//! `~/.config/hoist/config.toml`. Both are optional; flags and env vars
//! always win over the file.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

const CONFIG_FILE: &str = ".hoist.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Target repository (owner/name) handed to the registry client.
    pub repo: Option<String>,
    /// Default secrets file for `hoist push`.
    pub file: Option<String>,
}

impl Config {
    /// Load the nearest config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        let path = match Self::find() {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    fn find() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        let user = dirs::config_dir()?.join("hoist").join("config.toml");
        user.is_file().then_some(user)
    }
}
