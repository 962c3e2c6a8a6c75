use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::routes::AppState;

/// The only accepted signing algorithm.
const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity carried by a verified session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .ok_or(AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        verify_token(token, &state.jwt_secret)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization token is required")]
    MissingToken,
    #[error("Invalid authorization token")]
    InvalidSignature,
    #[error("Authorization token has expired")]
    Expired,
    #[error("Malformed authorization token")]
    Malformed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub fn issue_token(
    user_id: &str,
    email: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token_at(user_id, email, secret, ttl_hours, Utc::now())
}

pub fn issue_token_at(
    user_id: &str,
    email: &str,
    secret: &str,
    ttl_hours: i64,
    issued_at: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id.to_string(),
        uid: user_id.to_string(),
        email: email.to_string(),
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::hours(ttl_hours)).timestamp(),
    };

    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<AuthUser, AuthError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        // a foreign algorithm in the header is treated like a bad signature
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        // jsonwebtoken cannot even parse headers such as "alg":"none"
        _ if names_foreign_algorithm(token) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    let claims = token_data.claims;
    if claims.sub.trim().is_empty() || claims.uid.trim().is_empty() {
        return Err(AuthError::Malformed);
    }

    Ok(AuthUser {
        user_id: claims.uid,
        email: claims.email,
    })
}

/// Whether the token header decodes to JSON with an `alg` other than HS256.
fn names_foreign_algorithm(token: &str) -> bool {
    let Some(header) = token.split('.').next() else {
        return false;
    };
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(header) else {
        return false;
    };

    serde_json::from_slice::<serde_json::Value>(&bytes)
        .ok()
        .and_then(|header| header.get("alg")?.as_str().map(|alg| alg != "HS256"))
        .unwrap_or(false)
}
