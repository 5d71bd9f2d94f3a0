use thiserror::Error;

/// Domain error for the user slice.
///
/// The repository surfaces `NotFound` and `Storage` only; the service layer
/// passes those through unchanged and adds `Hashing`. Translation to HTTP
/// status codes happens in one place, `crate::error::ApiError`.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}
