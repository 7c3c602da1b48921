use serde::{Deserialize, Serialize};
use crate::models::domain::{InvestorCriteria, MatchResult};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchResult>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub candidates: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Register investor response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInvestorResponse {
    pub success: bool,
    #[serde(rename = "profileId")]
    pub profile_id: String,
}

/// Investor profile lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorResponse {
    pub success: bool,
    pub profile: InvestorCriteria,
}
