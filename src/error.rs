use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::users::error::UserError;

const MSG_INVALID_ID_PARAM: &str = "invalid param ID. ID must be an integer.";
const MSG_COULD_NOT_DECODE: &str = "could not decode value from input";

/// Body shape for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTP-facing error. The handlers are the only layer that produces these;
/// everything below speaks `UserError`.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter was not an integer.
    InvalidIdParam,
    /// Request body failed to decode as JSON.
    InvalidBody,
    NotFound,
    /// Anything internal. The original error is logged, never sent.
    Internal,
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound => Self::NotFound,
            UserError::Storage(e) => {
                error!(error = %e, "storage failure");
                Self::Internal
            }
            UserError::Hashing(e) => {
                error!(error = %e, "password hashing failure");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::InvalidIdParam => (StatusCode::BAD_REQUEST, MSG_INVALID_ID_PARAM),
            Self::InvalidBody => (StatusCode::BAD_REQUEST, MSG_COULD_NOT_DECODE),
            Self::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        (
            status,
            Json(ErrorBody {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
