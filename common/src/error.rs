//! Error types

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Content does not match category {category}: {reason}")]
    ContentMismatch { category: String, reason: String },

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Backup document has no 'projects' field")]
    MissingProjects,
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
