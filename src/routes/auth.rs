use crate::{
    db::users as db_users,
    error::AppError,
    middleware::auth::{issue_token, AuthUser},
    models::user::*,
    routes::{created, ok, ApiJson, ApiResult, AppState},
    services::{credentials, password},
};
use axum::extract::State;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn token_for(state: &AppState, user: &User) -> Result<String, AppError> {
    issue_token(&user.id, &user.email, &state.jwt_secret, state.token_hours)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<AuthResponse> {
    credentials::require_email(&req.email)?;
    credentials::require_password(&req.password)?;
    credentials::require_display_name(&req.display_name)?;

    // Hash password with Argon2id
    let password_hash = password::hash_password(&req.password)?;

    // Duplicate emails surface as a UNIQUE violation -> 409
    let user_id = uuid::Uuid::now_v7().to_string();
    let user = db_users::create_user(
        &state.pool,
        &user_id,
        req.email.trim(),
        req.display_name.trim(),
        &password_hash,
    )
    .await?;

    let token = token_for(&state, &user)?;
    tracing::info!(user_id = %user.id, "Registered new user");

    Ok(created(AuthResponse {
        token,
        user: user.into(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<AuthResponse> {
    credentials::require_email(&req.email)?;
    if req.password.is_empty() {
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    // Unknown email and wrong password share one message
    let user = db_users::find_by_email(&state.pool, req.email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !password::verify_password(&user.password_hash, &req.password)? {
        tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = token_for(&state, &user)?;

    Ok(ok(AuthResponse {
        token,
        user: user.into(),
    }))
}

pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> ApiResult<UserResponse> {
    // A valid token for a deleted account is still unauthorized
    let user = db_users::find_by_id(&state.pool, &auth_user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::debug!(email = %auth_user.email, "Token refers to a missing user");
            AppError::Unauthorized("User no longer exists".to_string())
        })?;

    Ok(ok(user.into()))
}
