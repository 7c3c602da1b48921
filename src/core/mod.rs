// Core algorithm exports
pub mod insight;
pub mod matcher;
pub mod prompts;
pub mod scoring;

pub use insight::{InsightBackend, InsightError, InsightGenerator, InsightRequest, fallback_insight, parse_insight};
pub use matcher::{Matcher, MatchError, DEFAULT_TOP_N};
pub use scoring::calculate_match_score;
