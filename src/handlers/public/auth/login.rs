// handlers/public/auth/login.rs - POST /api/login handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::auth::{self, password, Claims};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// POST /api/login - Authenticate and receive a session token
///
/// Unknown email and wrong password produce the identical 400 response,
/// so a caller can never probe which emails are registered.
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    // Tolerate copy-paste whitespace around credentials
    let email = payload.email.trim();
    let password = payload.password.trim();

    let account = state
        .store
        .find_by_email(email)
        .await
        .map_err(|err| {
            error!("Account lookup failed: {}", err);
            ApiError::internal("Server error during login")
        })?
        .ok_or_else(|| {
            warn!("Login attempt for unknown email");
            ApiError::invalid_credentials()
        })?;

    let password_ok = password::verify_password(password, &account.password_hash).map_err(
        |err| {
            error!("Password verification failed: {}", err);
            ApiError::internal("Server error during login")
        },
    )?;

    if !password_ok {
        warn!("Failed login for {}", account.email);
        return Err(ApiError::invalid_credentials());
    }

    let token =
        auth::generate_jwt(Claims::new(account.id, account.email.clone())).map_err(|err| {
            error!("Token generation failed: {}", err);
            ApiError::internal("Server error during login")
        })?;

    info!("Login successful for {}", account.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }
}
