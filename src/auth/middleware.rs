//! Authentication Middleware
//! Mission: Protect API endpoints with bearer token validation

use crate::auth::{jwt::JwtHandler, models::CurrentUser};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Auth middleware that validates bearer tokens from the Authorization header.
///
/// On success the authenticated subject is attached to request extensions for
/// the lifetime of the request; on failure the handler is never invoked.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|t| t.to_string())
        .ok_or(AuthError::MissingToken)?;

    // Validate token and extract the subject id
    let claims = jwt_handler
        .verify(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    let subject = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
    req.extensions_mut().insert(CurrentUser { id: subject });

    Ok(next.run(req).await)
}

/// Auth error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => {
                (StatusCode::UNAUTHORIZED, "No token, authorization denied")
            }
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Token is not valid"),
        };

        (status, Json(json!({ "msg": message }))).into_response()
    }
}
