//! Goal Models
//! Mission: Define goal records, status transitions, and update payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A learning goal owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub status: GoalStatus,
    pub progress: u8,
    pub created_at: String,
}

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalStatus {
    #[serde(rename = "not-started")]
    NotStarted,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "on-hold")]
    OnHold,
}

impl GoalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            GoalStatus::NotStarted => "not-started",
            GoalStatus::InProgress => "in-progress",
            GoalStatus::Completed => "completed",
            GoalStatus::OnHold => "on-hold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "not-started" => Some(GoalStatus::NotStarted),
            "in-progress" => Some(GoalStatus::InProgress),
            "completed" => Some(GoalStatus::Completed),
            "on-hold" => Some(GoalStatus::OnHold),
            _ => None,
        }
    }
}

/// Derive the status implied by a progress value.
///
/// Single source of truth for the progress/status mapping, used by both the
/// general update path and progress-only updates. An explicitly selected
/// on-hold status survives only until the next progress change: any supplied
/// progress value overrides it.
pub fn derive_status(progress: u8, _current: GoalStatus) -> GoalStatus {
    match progress {
        0 => GoalStatus::NotStarted,
        100 => GoalStatus::Completed,
        _ => GoalStatus::InProgress,
    }
}

/// Create request body for POST /api/goals
#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Typed update payload enumerating the mutable fields of a goal.
#[derive(Debug, Default, Deserialize)]
pub struct GoalUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<GoalStatus>,
    #[serde(default)]
    pub progress: Option<i64>,
}
