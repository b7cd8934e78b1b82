//! Router Assembly
//! Mission: Wire public, auth, and token-protected route partitions

use crate::auth::{api as auth_api, auth_middleware, AuthState, JwtHandler};
use crate::goals::{api as goals_api, GoalStore};
use crate::mentors::{api as mentors_api, MentorStore};
use crate::middleware::logging::request_logging;
use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub goals: Arc<GoalStore>,
    pub mentors: Arc<MentorStore>,
}

/// Create the API router.
///
/// Protected routes sit behind the auth middleware; mentor reads and the
/// health check are public; signup/login carry their own state.
pub fn create_router(
    state: AppState,
    auth_state: AuthState,
    jwt_handler: Arc<JwtHandler>,
) -> Router {
    let auth_router = Router::new()
        .route("/api/auth/signup", post(auth_api::signup))
        .route("/api/auth/login", post(auth_api::login))
        .with_state(auth_state);

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/api/mentors", get(mentors_api::list_mentors))
        .route("/api/mentors/:id", get(mentors_api::get_mentor))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route(
            "/api/goals",
            get(goals_api::list_goals).post(goals_api::create_goal),
        )
        .route(
            "/api/goals/:id",
            get(goals_api::get_goal)
                .put(goals_api::update_goal)
                .delete(goals_api::delete_goal),
        )
        .route("/api/mentors", post(mentors_api::create_mentor))
        .route(
            "/api/mentors/:id",
            put(mentors_api::update_mentor).delete(mentors_api::delete_mentor),
        )
        .route_layer(middleware::from_fn_with_state(
            jwt_handler,
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(auth_router)
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}

// ===== Route Handlers =====

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}
