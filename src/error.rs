//! Error type for generation, scoring hosts and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No character class selected and no custom charset given.
    #[error("Please select at least one option or provide custom characters")]
    EmptyCharset,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
