// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every error renders as a flat `{"message": "..."}` body, which is the
/// only error shape the frontend knows how to display.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),
    /// Duplicate registration. Responds 400 rather than 409 because the
    /// frontend surfaces the message straight from a generic 4xx handler.
    Conflict(String),
    /// Failed login. Always the same message regardless of whether the
    /// email was unknown or the password wrong.
    InvalidCredentials,

    // 401 Unauthorized
    Unauthorized(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Conflict(_) => 400,
            ApiError::InvalidCredentials => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Internal(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InvalidCredentials => "Invalid email or password",
            ApiError::Unauthorized(msg) => msg,
            ApiError::Internal(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "message": self.message() })
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
