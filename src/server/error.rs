use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request rejected before any call to Apple. Rendered as a plain-text 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing receipt data")]
    MissingReceipt,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejected verify request");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
