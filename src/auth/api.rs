//! Authentication API Endpoints
//! Mission: Provide signup and login endpoints issuing bearer tokens

use crate::auth::{
    jwt::JwtHandler,
    models::{CredentialsRequest, TokenResponse},
    user_store::UserStore,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(user_store: Arc<UserStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            user_store,
            jwt_handler,
        }
    }
}

/// Signup endpoint - POST /api/auth/signup
pub async fn signup(
    State(state): State<AuthState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AuthApiError> {
    let (email, password) = payload.into_fields().ok_or(AuthApiError::MissingFields)?;

    let existing = state.user_store.find_by_email(&email).map_err(|e| {
        warn!("Signup lookup failed: {}", e);
        AuthApiError::InternalError
    })?;
    if existing.is_some() {
        return Err(AuthApiError::UserAlreadyExists);
    }

    let user = state
        .user_store
        .create_user(&email, &password)
        .map_err(|e| {
            warn!("Failed to create user: {}", e);
            AuthApiError::UserAlreadyExists
        })?;

    let token = state.jwt_handler.issue(user.id).map_err(|e| {
        warn!("Failed to issue token: {}", e);
        AuthApiError::InternalError
    })?;

    info!("Signup successful: {}", user.email);

    Ok(Json(TokenResponse { token }))
}

/// Login endpoint - POST /api/auth/login
pub async fn login(
    State(state): State<AuthState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AuthApiError> {
    let (email, password) = payload.into_fields().ok_or(AuthApiError::MissingFields)?;

    // Unknown email and wrong password are indistinguishable to the caller.
    let user = state
        .user_store
        .find_by_email(&email)
        .map_err(|e| {
            warn!("Login lookup failed: {}", e);
            AuthApiError::InternalError
        })?
        .ok_or(AuthApiError::InvalidCredentials)?;

    let valid = user.verify_password(&password).map_err(|e| {
        warn!("Password verification failed: {}", e);
        AuthApiError::InternalError
    })?;
    if !valid {
        warn!("Failed login attempt: {}", email);
        return Err(AuthApiError::InvalidCredentials);
    }

    let token = state.jwt_handler.issue(user.id).map_err(|e| {
        warn!("Failed to issue token: {}", e);
        AuthApiError::InternalError
    })?;

    info!("Login successful: {}", user.email);

    Ok(Json(TokenResponse { token }))
}

/// Auth API errors
#[derive(Debug)]
pub enum AuthApiError {
    MissingFields,
    UserAlreadyExists,
    InvalidCredentials,
    InternalError,
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthApiError::MissingFields => {
                (StatusCode::BAD_REQUEST, "Email and password are required")
            }
            AuthApiError::UserAlreadyExists => (StatusCode::BAD_REQUEST, "User already exists"),
            AuthApiError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
            AuthApiError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "Server error"),
        };

        (status, Json(json!({ "msg": message }))).into_response()
    }
}
