use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredMatch;

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<ScoredMatch>,
    pub total_matches: usize,
    pub total_candidates: usize,
    pub skill_gaps: Vec<String>,
    pub processing_time: f64,
}

/// Response for the skill gap endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapResponse {
    pub skills: Vec<String>,
}

/// Service banner returned from the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Newly opened bookmark session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: uuid::Uuid,
}

/// Posting ids saved in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResponse {
    pub session_id: uuid::Uuid,
    pub saved: Vec<String>,
    pub count: usize,
}

/// Whether one posting is saved in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedStatusResponse {
    pub session_id: uuid::Uuid,
    pub internship_id: String,
    pub saved: bool,
}
