use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failure taxonomy for outbound calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The credential exchange rejected the app id/secret or returned a
    /// nonzero status code.
    #[error("token exchange failed: {0}")]
    Auth(String),

    /// The remote service answered with a nonzero envelope code.
    #[error("remote service error {code}: {message}")]
    Remote { code: i64, message: String },

    /// Network, DNS or timeout failure before a valid envelope arrived.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    fn label(&self) -> &'static str {
        match self {
            ApiError::Auth(_) => "token exchange failed",
            ApiError::Remote { .. } => "remote service error",
            ApiError::Transport(_) => "upstream request failed",
        }
    }
}

/// Every client failure maps to a generic 500 with the upstream message
/// attached. No differentiated status codes, no retry.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        let body = Json(json!({
            "success": false,
            "error": self.label(),
            "message": self.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
