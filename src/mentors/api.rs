//! Mentor API Endpoints
//! Mission: Public mentor reads, authenticated admin-style mutation

use crate::api::error::ApiError;
use crate::api::routes::AppState;
use crate::mentors::models::{CreateMentorRequest, Mentor, MentorUpdate, NewMentor};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

/// List mentors - GET /api/mentors (public)
///
/// Seeds the fixed default set when the directory is empty, then returns up
/// to 100 mentors sorted by rating descending, newest first on ties.
pub async fn list_mentors(State(state): State<AppState>) -> Result<Json<Vec<Mentor>>, ApiError> {
    state.mentors.ensure_defaults()?;
    let mentors = state.mentors.list(100)?;
    Ok(Json(mentors))
}

/// Read a single mentor - GET /api/mentors/:id (public)
pub async fn get_mentor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Mentor>, ApiError> {
    let id = parse_id(&id)?;
    let mentor = state
        .mentors
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;
    Ok(Json(mentor))
}

/// Create a mentor - POST /api/mentors (auth required, no ownership concept)
pub async fn create_mentor(
    State(state): State<AppState>,
    Json(payload): Json<CreateMentorRequest>,
) -> Result<(StatusCode, Json<Mentor>), ApiError> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::validation("Name is required"))?;

    let rating = payload.rating.unwrap_or(0.0);
    validate_rating(rating)?;

    let mentor = state.mentors.create(NewMentor {
        name: name.to_string(),
        bio: payload.bio,
        skills: payload.skills.map(|s| s.into_vec()).unwrap_or_default(),
        experience_years: payload.experience_years,
        rating,
    })?;

    Ok((StatusCode::CREATED, Json(mentor)))
}

/// Update a mentor - PUT /api/mentors/:id (auth required)
pub async fn update_mentor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<MentorUpdate>,
) -> Result<Json<Mentor>, ApiError> {
    let id = parse_id(&id)?;
    let mut mentor = state
        .mentors
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    if let Some(name) = update.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::validation("Name is required"));
        }
        mentor.name = name;
    }
    if let Some(bio) = update.bio {
        mentor.bio = Some(bio);
    }
    if let Some(skills) = update.skills {
        mentor.skills = skills.into_vec();
    }
    if let Some(rating) = update.rating {
        validate_rating(rating)?;
        mentor.rating = rating;
    }

    state.mentors.update(&mentor)?;
    Ok(Json(mentor))
}

/// Delete a mentor - DELETE /api/mentors/:id (auth required)
pub async fn delete_mentor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    let mentor = state
        .mentors
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Mentor not found"))?;

    state.mentors.delete(mentor.id)?;
    Ok(Json(json!({ "msg": "Mentor deleted" })))
}

fn validate_rating(rating: f64) -> Result<(), ApiError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ApiError::validation("Rating must be between 0 and 5"));
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::validation("Invalid id"))
}
