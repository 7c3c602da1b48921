use crate::models::{CandidateProfile, InvestorCriteria};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur when writing to a profile store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Profile and candidate store used by the matcher and the HTTP layer
///
/// Matching only reads from it; writes come from registration and seeding.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_investor(&self, id: &str) -> Option<InvestorCriteria>;

    async fn save_investor(&self, investor: InvestorCriteria) -> Result<(), StoreError>;

    async fn list_candidates(&self) -> Vec<CandidateProfile>;

    /// Replace the candidate set
    async fn seed_candidates(&self, candidates: Vec<CandidateProfile>);

    async fn clear(&self);
}

/// Process-local store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryStore {
    investors: RwLock<HashMap<String, InvestorCriteria>>,
    candidates: RwLock<Vec<CandidateProfile>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(candidates: Vec<CandidateProfile>) -> Self {
        Self {
            investors: RwLock::new(HashMap::new()),
            candidates: RwLock::new(candidates),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_investor(&self, id: &str) -> Option<InvestorCriteria> {
        self.investors.read().await.get(id).cloned()
    }

    async fn save_investor(&self, investor: InvestorCriteria) -> Result<(), StoreError> {
        if investor.id.trim().is_empty() {
            return Err(StoreError::InvalidInput("investor id must not be empty".into()));
        }

        tracing::debug!("Saved investor: {}", investor.id);
        self.investors.write().await.insert(investor.id.clone(), investor);
        Ok(())
    }

    async fn list_candidates(&self) -> Vec<CandidateProfile> {
        self.candidates.read().await.clone()
    }

    async fn seed_candidates(&self, candidates: Vec<CandidateProfile>) {
        tracing::info!("Seeded {} candidates", candidates.len());
        *self.candidates.write().await = candidates;
    }

    async fn clear(&self) {
        self.investors.write().await.clear();
        self.candidates.write().await.clear();
    }
}
