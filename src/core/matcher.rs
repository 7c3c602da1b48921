use crate::core::{insight::InsightGenerator, scoring::calculate_match_score};
use crate::models::{CandidateProfile, InvestorCriteria, MatchResult, ScoredCandidate};
use crate::services::ProfileStore;
use futures::future::join_all;
use thiserror::Error;

/// Number of matches returned per request
pub const DEFAULT_TOP_N: usize = 5;

/// Request-level failures of the matching engine
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Investor not found: {0}")]
    NotFound(String),

    #[error("No candidates available")]
    EmptyCandidateSet,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every candidate
/// 2. Stable sort by score and keep the top N
/// 3. Generate insights for the kept candidates concurrently
/// 4. Assemble ranked results
#[derive(Clone)]
pub struct Matcher {
    generator: InsightGenerator,
    top_n: usize,
}

impl Matcher {
    pub fn new(generator: InsightGenerator, top_n: usize) -> Self {
        Self {
            generator,
            top_n: top_n.max(1),
        }
    }

    pub fn with_default_top_n(generator: InsightGenerator) -> Self {
        Self::new(generator, DEFAULT_TOP_N)
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Look up an investor and match them against every stored candidate
    pub async fn find_matches_for_investor(
        &self,
        store: &dyn ProfileStore,
        investor_id: &str,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let investor = store
            .get_investor(investor_id)
            .await
            .ok_or_else(|| MatchError::NotFound(investor_id.to_string()))?;

        let candidates = store.list_candidates().await;

        self.find_matches(&investor, &candidates).await
    }

    /// Find the best matches for an investor
    ///
    /// # Arguments
    /// * `investor` - The investor's criteria
    /// * `candidates` - All candidates, in input order
    ///
    /// # Returns
    /// `min(top_n, candidates.len())` results ranked from 1, each carrying
    /// non-empty explanation and outreach text
    pub async fn find_matches(
        &self,
        investor: &InvestorCriteria,
        candidates: &[CandidateProfile],
    ) -> Result<Vec<MatchResult>, MatchError> {
        if candidates.is_empty() {
            return Err(MatchError::EmptyCandidateSet);
        }

        tracing::info!("Finding matches for {} across {} candidates", investor.id, candidates.len());

        let top = self.select_top(investor, candidates);

        tracing::debug!(
            "Top {} by score: {:?}",
            top.len(),
            top.iter()
                .map(|s| (s.candidate.name.as_str(), s.score))
                .collect::<Vec<_>>()
        );

        // join_all keeps output slots in input order regardless of completion order
        let insights = join_all(
            top.iter()
                .map(|s| self.generator.generate_insight(investor, &s.candidate)),
        )
        .await;

        let results: Vec<MatchResult> = top
            .into_iter()
            .zip(insights)
            .enumerate()
            .map(|(index, (scored, insight))| MatchResult {
                profile: scored.candidate,
                rank: index + 1,
                explanation: insight.explanation,
                outreach: insight.outreach,
                internal_score: scored.score,
            })
            .collect();

        tracing::info!("Generated {} enriched matches for {}", results.len(), investor.id);

        Ok(results)
    }

    /// Score all candidates and keep the best `top_n`
    ///
    /// `sort_by` is stable, so equal scores keep their input order.
    pub fn select_top(
        &self,
        investor: &InvestorCriteria,
        candidates: &[CandidateProfile],
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| ScoredCandidate {
                score: calculate_match_score(investor, candidate),
                candidate: candidate.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.top_n);
        scored
    }
}
