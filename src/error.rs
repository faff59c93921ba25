use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to decode embedded image: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("environment override error: {0}")]
    Env(String),
    #[error("validation error: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
