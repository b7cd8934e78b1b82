//! Goaltrack - Learning goal tracking and mentor discovery backend

use anyhow::{Context, Result};
use goaltrack_backend::{
    api::routes::{create_router, AppState},
    auth::{AuthState, JwtHandler, UserStore},
    goals::GoalStore,
    mentors::MentorStore,
    models::Config,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    info!("Starting goaltrack backend (db: {})", config.database_path);

    let user_store = Arc::new(UserStore::new(&config.database_path)?);
    let goal_store = Arc::new(GoalStore::new(&config.database_path)?);
    let mentor_store = Arc::new(MentorStore::new(&config.database_path)?);

    let jwt_handler = Arc::new(JwtHandler::new(
        config.jwt_secret.clone(),
        config.token_ttl_hours,
    ));
    let auth_state = AuthState::new(user_store, jwt_handler.clone());
    let state = AppState {
        goals: goal_store,
        mentors: mentor_store,
    };

    let app = create_router(state, auth_state, jwt_handler);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goaltrack_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
