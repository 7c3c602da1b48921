use serde::{Deserialize, Serialize};

/// Check-size range an investor is willing to write, in whole USD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSizeRange {
    pub min: u64,
    pub max: u64,
}

impl CheckSizeRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends
    #[inline]
    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Stored investor preferences used to evaluate candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorCriteria {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "linkedinUrl", default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    pub industries: Vec<String>,
    pub stages: Vec<String>,
    #[serde(rename = "checkSize")]
    pub check_size: CheckSizeRange,
    pub geography: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl InvestorCriteria {
    /// First listed industry, used by the fallback insight text
    pub fn primary_industry(&self) -> Option<&str> {
        self.industries.first().map(String::as_str)
    }
}

/// Founder shown next to a startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Founder {
    pub name: String,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: String,
}

/// Optional business metrics reported by a startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
}

/// Startup profile being evaluated against investor criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub industry: String,
    pub stage: String,
    /// Amount being raised, in whole USD
    pub raising: u64,
    pub geography: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub metrics: CandidateMetrics,
    #[serde(default)]
    pub founders: Vec<Founder>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A candidate paired with its compatibility score, before enrichment
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: CandidateProfile,
    pub score: u8,
}

/// Explanation and outreach text attached to a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchInsight {
    pub explanation: String,
    pub outreach: String,
}

/// Ranked, enriched match returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub profile: CandidateProfile,
    pub rank: usize,
    pub explanation: String,
    pub outreach: String,
    /// Score the rank was derived from; diagnostics only
    #[serde(rename = "internalScore")]
    pub internal_score: u8,
}
