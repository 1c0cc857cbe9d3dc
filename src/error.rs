use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Local pre-network check failed; no request was issued.
    #[error("{0}")]
    Validation(String),
    /// Transport failure or a non-success response from the work tracker.
    #[error("{0}")]
    Request(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
