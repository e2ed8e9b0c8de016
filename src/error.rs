//! Application error types for the persistence boundary and session logic.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: status {0}")]
    Server(u16),

    #[error("Session error: {0}")]
    Session(&'static str),
}
