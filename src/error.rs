/// Error types for the postpress crate.
use thiserror::Error;

/// Errors that can occur while building the rewrite pipeline.
#[derive(Error, Debug)]
pub enum CompressError {
    #[error("invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Application-level errors for the CLI binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("compression error: {0}")]
    Compress(#[from] CompressError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
