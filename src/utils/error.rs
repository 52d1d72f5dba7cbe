use crate::dto::response::ErrorResponse;
use axum::{http::StatusCode, Json};
use tracing::error;

pub const URL_REQUIRED: &str = "URL is required";
pub const GENERATION_FAILED: &str = "Failed to generate QR Code";

pub type ErrorReply = (StatusCode, Json<ErrorResponse>);
pub type AppResult<T> = Result<T, ErrorReply>;

pub fn reply(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub fn url_required() -> ErrorReply {
    reply(StatusCode::BAD_REQUEST, URL_REQUIRED)
}

/// Logs the upstream cause and hides it behind the generic failure message.
pub fn generation_failed(message: &str, error: impl std::fmt::Display) -> ErrorReply {
    error!("{}: {}", message, error);
    reply(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
}
