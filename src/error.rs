// src/error.rs
// Standardized error types for the persona pipeline

use thiserror::Error;

/// Main error type for the redsona library
#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("not a Reddit profile URL: {0}")]
    InvalidReference(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reddit API error {status}: {body}")]
    RedditApi {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("completion error: {0}")]
    Completion(String),
}

/// Convenience type alias for Result using PersonaError
pub type Result<T> = std::result::Result<T, PersonaError>;
