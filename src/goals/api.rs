//! Goal API Endpoints
//! Mission: Owner-checked CRUD over learning goals

use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::auth::models::CurrentUser;
use crate::goals::models::{derive_status, CreateGoalRequest, Goal, GoalUpdate};
use crate::goals::store::GoalStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// List the caller's goals, newest first - GET /api/goals
pub async fn list_goals(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    let goals = state.goals.list_for_owner(user.id)?;
    Ok(Json(goals))
}

/// Create a goal - POST /api/goals
pub async fn create_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    let title = payload
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::validation("Title is required"))?;

    let goal = state.goals.create(user.id, title, payload.description)?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// Read a single goal - GET /api/goals/:id
pub async fn get_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Goal>, ApiError> {
    let id = parse_id(&id)?;
    let goal = fetch_owned(&state.goals, id, user.id)?;
    Ok(Json(goal))
}

/// Update a goal - PUT /api/goals/:id
///
/// Takes a typed payload enumerating the permitted mutable fields. When a
/// progress value is supplied the stored status is re-derived from it.
pub async fn update_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(update): Json<GoalUpdate>,
) -> Result<Json<Goal>, ApiError> {
    let id = parse_id(&id)?;
    let mut goal = fetch_owned(&state.goals, id, user.id)?;

    if let Some(title) = update.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(ApiError::validation("Title is required"));
        }
        goal.title = title;
    }
    if let Some(description) = update.description {
        goal.description = Some(description);
    }
    if let Some(status) = update.status {
        goal.status = status;
    }
    if let Some(progress) = update.progress {
        if !(0..=100).contains(&progress) {
            return Err(ApiError::validation("Progress must be between 0 and 100"));
        }
        goal.progress = progress as u8;
        goal.status = derive_status(goal.progress, goal.status);
    }

    state.goals.update(&goal)?;
    Ok(Json(goal))
}

/// Delete a goal - DELETE /api/goals/:id
pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let goal = fetch_owned(&state.goals, id, user.id)?;

    state.goals.delete(goal.id)?;
    Ok(Json(json!({ "msg": "Goal deleted" })))
}

/// The ownership check applied identically to read, update, and delete:
/// existence first (404), then owner match (403). Evaluated fresh on every
/// call; authorization decisions are never cached.
fn fetch_owned(store: &GoalStore, id: Uuid, subject: Uuid) -> Result<Goal, ApiError> {
    let goal = store
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Goal not found"))?;

    if goal.owner_id != subject {
        return Err(ApiError::Forbidden);
    }

    Ok(goal)
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation("Invalid id"))
}
