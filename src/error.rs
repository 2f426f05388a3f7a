//! Error types for the DART registry and statement parser

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DartError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, DartError>;
