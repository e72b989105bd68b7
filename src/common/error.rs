// Error handling types for the application

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::error;

/// Errors returned by calls to the remote task API or the auth provider.
///
/// Authentication failures are a dedicated variant so callers can branch on
/// them directly instead of scraping message text: the task backend answers
/// 401/403 for a missing or expired token, and the task-list controller
/// swallows those silently because a redirect to /login is already underway.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authentication required")]
    AuthRequired,

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Maps an error to the text shown in the UI.
    ///
    /// Server messages pass through near-verbatim, with light rewording for a
    /// few known cases; transport failures collapse to one generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::AuthRequired => "Authentication required".to_string(),
            ClientError::Network(_) => {
                "Cannot connect to server. Please try again later.".to_string()
            }
            ClientError::Api { message, .. } => {
                if message.contains("Invalid credentials") || message.contains("not found") {
                    "Invalid email or password".to_string()
                } else if message.contains("already exists") {
                    "An account with this email already exists".to_string()
                } else {
                    message.clone()
                }
            }
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::AuthRequired)
    }
}

/// Handler-level error types
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    InternalServer(String),
    UpstreamError(ClientError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
            ApiError::UpstreamError(e) => write!(f, "Upstream Error: {}", e),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED"),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
            ),
            ApiError::UpstreamError(e) => {
                error!(error = %e, "Upstream request failed");
                let status = match &e {
                    ClientError::AuthRequired => StatusCode::UNAUTHORIZED,
                    ClientError::Api { status, .. } => StatusCode::from_u16(*status)
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    ClientError::Network(_) => StatusCode::BAD_GATEWAY,
                };
                (status, e.user_message(), "UPSTREAM_ERROR")
            }
        };

        let error_response = ErrorResponse {
            error: error_message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        ApiError::UpstreamError(e)
    }
}
