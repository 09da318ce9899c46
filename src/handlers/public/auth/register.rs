// handlers/public/auth/register.rs - POST /api/register handler

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::auth::password;
use crate::database::StoreError;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    // Absent fields deserialize as empty strings and fail the same
    // completeness check as explicit empties
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// POST /api/register - Create a new account
///
/// Rejects incomplete input with 400, duplicate emails with 400, and
/// stores only the bcrypt hash of the password. Responds 201 on success.
pub async fn register_post(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::validation(
            "Please provide name, email, and password",
        ));
    }

    // Cheap existence check first; the unique index still catches races
    let existing = state
        .store
        .find_by_email(&payload.email)
        .await
        .map_err(|err| {
            error!("Account lookup failed: {}", err);
            ApiError::internal("Server error during registration")
        })?;

    if existing.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = password::hash_password(&payload.password).map_err(|err| {
        error!("Password hashing failed: {}", err);
        ApiError::internal("Server error during registration")
    })?;

    let account = state
        .store
        .create(&payload.name, &payload.email, &password_hash)
        .await
        .map_err(|err| match err {
            StoreError::DuplicateEmail => ApiError::conflict("User already exists"),
            other => {
                error!("Account insert failed: {}", other);
                ApiError::internal("Server error during registration")
            }
        })?;

    info!("Registered account {} for {}", account.id, account.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert!(req.name.is_empty());
        assert_eq!(req.email, "a@x.com");
        assert!(req.password.is_empty());
    }

    #[test]
    fn full_body_deserializes() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com","password":"secret1"}"#)
                .unwrap();
        assert_eq!(req.name, "Ann");
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.password, "secret1");
    }
}
