//! Error types for firmware-secrets.
//!
//! Errors are grouped by concern and wrapped by the top-level [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors loading or writing secrets configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("secrets file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("already initialized: {} exists (use --force to overwrite)", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("secrets already initialized for this process")]
    AlreadySet,

    #[error("failed to read secrets file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid secrets file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize secrets: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("environment variable {var} is not valid unicode")]
    InvalidEnv { var: String },
}

/// Errors about secret names and secret file state.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("unknown secret name: {0}")]
    UnknownName(String),

    #[error("insecure permissions on {path}: expected {expected}, found {actual}")]
    InvalidPermissions {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("not ready, {count} unset: {names}")]
    NotReady { count: usize, names: String },
}

pub type Result<T> = std::result::Result<T, Error>;
