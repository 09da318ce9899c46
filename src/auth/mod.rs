use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;

pub mod password;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Account id of the signed-in user.
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims for a freshly issued session. Sessions last exactly one hour.
    pub fn new(user_id: Uuid, email: String) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(1)).timestamp();

        Self {
            sub: user_id,
            email,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidToken(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidToken(msg) => write!(f, "Invalid JWT: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

pub fn generate_jwt(claims: Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    // Expired means expired: no clock leeway on the one-hour window
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(email: &str) -> (Uuid, String) {
        let user_id = Uuid::new_v4();
        let token = generate_jwt(Claims::new(user_id, email.to_string())).unwrap();
        (user_id, token)
    }

    #[test]
    fn round_trip_preserves_identity() {
        let (user_id, token) = issue("roundtrip@example.com");

        let claims = validate_jwt(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "roundtrip@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "late@example.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let secret = &config::config().security.jwt_secret;
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(validate_jwt(&token), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let claims = Claims::new(Uuid::new_v4(), "forged@example.com".to_string());
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"not-the-server-secret"),
        )
        .unwrap();

        assert!(validate_jwt(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(validate_jwt("not.a.jwt").is_err());
        assert!(validate_jwt("").is_err());
    }
}
