//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration file passed explicitly does not exist.
    #[error("Configuration file not found: {path}")]
    MissingFile { path: String },
}
