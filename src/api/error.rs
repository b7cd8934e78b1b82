//! API Error Taxonomy
//! Mission: Map domain failures onto HTTP statuses with JSON bodies

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Shared handler error. Every variant maps to a `{ "msg": ... }` JSON body.
/// Unexpected failures surface a generic message; the underlying error is
/// logged server-side only.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(&'static str),
    Forbidden,
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn not_found(msg: &'static str) -> Self {
        ApiError::NotFound(msg)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Not authorized".to_string()),
            ApiError::Internal(err) => {
                error!("Internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(json!({ "msg": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let validation = ApiError::validation("Invalid id").into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let not_found = ApiError::not_found("Goal not found").into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let forbidden = ApiError::Forbidden.into_response();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let internal = ApiError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
