// errors.rs
use thiserror::Error;

/// Errors originating from request handling.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Internal Server Error: {0}")]
    Internal(String),
}
