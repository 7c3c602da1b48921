//! InvestorFit - investor-startup matching service
//!
//! Scores startups against an investor's criteria, keeps the best few and
//! attaches a generated explanation and outreach message to each, falling
//! back to templated text when the generative backend is unavailable.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, InsightGenerator, InsightBackend, calculate_match_score};
pub use models::{InvestorCriteria, CandidateProfile, MatchResult, MatchInsight, CheckSizeRange};
pub use services::{InMemoryStore, OpenAiBackend, ProfileStore};
