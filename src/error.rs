use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("usage: hoist push <secrets-file>")]
    Usage,

    #[error("secrets file not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures from the external registry client subprocess.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("`{0}` not found on PATH")]
    ToolNotFound(String),

    #[error("`{0}` is not authenticated")]
    Unauthenticated(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} {action} failed: {stderr}")]
    CommandFailed {
        program: String,
        action: &'static str,
        stderr: String,
    },

    #[error("unexpected {program} listing output: {source}")]
    BadListing {
        program: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
