// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CheckSizeRange, InvestorCriteria, Founder, CandidateMetrics, CandidateProfile, ScoredCandidate, MatchInsight, MatchResult};
pub use requests::{RegisterInvestorRequest, UpdateInvestorRequest};
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse, RegisterInvestorResponse, InvestorResponse};
