//! Error types for the logocube core

use thiserror::Error;

/// Main error type for the configurator core
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Asset error: {0}")]
    Asset(String),
}
