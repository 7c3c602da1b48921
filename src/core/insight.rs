use crate::core::prompts::{build_insight_prompt, insight_schema, INSIGHT_SCHEMA_NAME, SYSTEM_PROMPT};
use crate::models::{CandidateProfile, InvestorCriteria, MatchInsight};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while producing a generated insight
///
/// None of these reach the caller of the matcher; every variant is
/// absorbed by the fallback text.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API returned error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Backend returned no content")]
    EmptyContent,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// A single structured-output request to a generative text backend
#[derive(Debug, Clone)]
pub struct InsightRequest {
    pub system: String,
    pub prompt: String,
    pub schema_name: String,
    pub schema: Value,
}

/// Generative text backend returning the raw text of a structured response
#[async_trait]
pub trait InsightBackend: Send + Sync {
    async fn complete(&self, request: &InsightRequest) -> Result<String, InsightError>;
}

/// Wraps an [`InsightBackend`] with prompt building, response validation,
/// a per-call timeout and the deterministic fallback.
#[derive(Clone)]
pub struct InsightGenerator {
    backend: Arc<dyn InsightBackend>,
    timeout: Duration,
}

impl InsightGenerator {
    pub fn new(backend: Arc<dyn InsightBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Generate explanation and outreach text for one pairing
    ///
    /// Never fails: any backend or validation error is logged and replaced
    /// with [`fallback_insight`].
    pub async fn generate_insight(
        &self,
        investor: &InvestorCriteria,
        candidate: &CandidateProfile,
    ) -> MatchInsight {
        match self.try_generate(investor, candidate).await {
            Ok(insight) => {
                tracing::debug!("Generated insight for {}: {}", candidate.name, insight.explanation);
                insight
            }
            Err(e) => {
                tracing::warn!(
                    candidate = %candidate.id,
                    investor = %investor.id,
                    error = %e,
                    "Insight generation failed, using fallback text"
                );
                fallback_insight(investor, candidate)
            }
        }
    }

    async fn try_generate(
        &self,
        investor: &InvestorCriteria,
        candidate: &CandidateProfile,
    ) -> Result<MatchInsight, InsightError> {
        let request = InsightRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: build_insight_prompt(investor, candidate),
            schema_name: INSIGHT_SCHEMA_NAME.to_string(),
            schema: insight_schema(),
        };

        let raw = tokio::time::timeout(self.timeout, self.backend.complete(&request))
            .await
            .map_err(|_| InsightError::Timeout(self.timeout))??;

        parse_insight(&raw)
    }
}

/// Validate raw backend text against the insight shape
///
/// Exactly the two string fields are accepted, both non-blank after
/// trimming. Markdown code fences around the JSON are tolerated.
pub fn parse_insight(raw: &str) -> Result<MatchInsight, InsightError> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Err(InsightError::EmptyContent);
    }

    let insight: MatchInsight = serde_json::from_str(text)
        .map_err(|e| InsightError::InvalidResponse(format!("Failed to parse insight: {}", e)))?;

    let explanation = insight.explanation.trim();
    let outreach = insight.outreach.trim();

    if explanation.is_empty() || outreach.is_empty() {
        return Err(InsightError::InvalidResponse("Insight contains a blank field".into()));
    }

    Ok(MatchInsight {
        explanation: explanation.to_string(),
        outreach: outreach.to_string(),
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}

/// Deterministic insight used whenever generation fails
///
/// Cites the investor's first industry (the candidate's industry when the
/// investor lists none) and the candidate's stage.
pub fn fallback_insight(investor: &InvestorCriteria, candidate: &CandidateProfile) -> MatchInsight {
    let industry = investor
        .primary_industry()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(candidate.industry.as_str());

    MatchInsight {
        explanation: format!(
            "Strong {} and {} alignment with check size fit.",
            industry, candidate.stage
        ),
        outreach: format!(
            "Hi {} team! I'm {}, and I invest in {} companies at the {} stage. \
             Your work caught my attention - would love to learn more about your round. \
             Available for a 15-min call this week?",
            candidate.name, investor.name, industry, candidate.stage
        ),
    }
}
