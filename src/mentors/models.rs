//! Mentor Models
//! Mission: Define mentor records and mutation payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A mentor profile. Publicly readable; no ownership concept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub rating: f64,
    pub created_at: String,
}

/// Field values for a mentor not yet persisted (seed data and creation).
#[derive(Debug, Clone)]
pub struct NewMentor {
    pub name: String,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub rating: f64,
}

/// Skills arrive either as a JSON array or a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Csv(String),
}

impl SkillsInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsInput::List(skills) => skills,
            SkillsInput::Csv(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Create request body for POST /api/mentors
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMentorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Typed update payload enumerating the permitted mutable fields.
/// Experience years are intentionally not updatable.
#[derive(Debug, Default, Deserialize)]
pub struct MentorUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
    #[serde(default)]
    pub rating: Option<f64>,
}
