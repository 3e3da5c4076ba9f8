use serde::{Deserialize, Serialize};
use crate::models::domain::{Candidate, FlashMessage, MatchSummary};

/// Body of `GET /api/recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub users: Vec<Candidate>,
    pub current_user_interests: Vec<String>,
}

/// Matches listed for the viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchSummary>,
}

/// Pending flash messages, drained on read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashResponse {
    pub messages: Vec<FlashMessage>,
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
