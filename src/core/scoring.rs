use crate::models::{CandidateProfile, CheckSizeRange, InvestorCriteria};

pub const INDUSTRY_WEIGHT: f64 = 35.0;
pub const STAGE_WEIGHT: f64 = 30.0;
pub const CHECK_SIZE_WEIGHT: f64 = 25.0;
pub const GEOGRAPHY_WEIGHT: f64 = 10.0;
/// Geography is a soft preference; a miss still earns this much
pub const GEOGRAPHY_MISS_CREDIT: f64 = 5.0;

/// Geography label that matches every candidate location
pub const GLOBAL_GEOGRAPHY: &str = "Global";

/// Calculate a match score (0-100) for a candidate against investor criteria
///
/// Scoring formula:
/// score = round(
///     industry   (35)  +    # any investor industry substring-matches, either direction
///     stage      (30)  +    # exact stage membership
///     check_size (25)  +    # in range, else linear partial credit
///     geography  (10|5)     # "Global" or substring match, else 5
/// )
pub fn calculate_match_score(investor: &InvestorCriteria, candidate: &CandidateProfile) -> u8 {
    let total = industry_score(&investor.industries, &candidate.industry)
        + stage_score(&investor.stages, &candidate.stage)
        + check_size_score(&investor.check_size, candidate.raising)
        + geography_score(&investor.geography, &candidate.geography);

    total.round().clamp(0.0, 100.0) as u8
}

/// Case-insensitive substring match in either direction
#[inline]
fn labels_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

#[inline]
fn industry_score(industries: &[String], candidate_industry: &str) -> f64 {
    if industries.iter().any(|ind| labels_overlap(ind, candidate_industry)) {
        INDUSTRY_WEIGHT
    } else {
        0.0
    }
}

#[inline]
fn stage_score(stages: &[String], candidate_stage: &str) -> f64 {
    if stages.iter().any(|s| s == candidate_stage) {
        STAGE_WEIGHT
    } else {
        0.0
    }
}

/// Full weight inside the range; outside it, the distance to the nearest
/// boundary is normalized by half the range maximum and the penalty is
/// clamped to [0, 25].
#[inline]
fn check_size_score(range: &CheckSizeRange, raising: u64) -> f64 {
    if range.contains(raising) {
        return CHECK_SIZE_WEIGHT;
    }

    let distance = if raising < range.min {
        (range.min - raising) as f64
    } else {
        (raising - range.max) as f64
    };

    let half_max = range.max as f64 * 0.5;
    if half_max <= 0.0 {
        return 0.0;
    }

    let penalty = (distance / half_max * CHECK_SIZE_WEIGHT).clamp(0.0, CHECK_SIZE_WEIGHT);
    CHECK_SIZE_WEIGHT - penalty
}

#[inline]
fn geography_score(geographies: &[String], candidate_geography: &str) -> f64 {
    let matched = geographies
        .iter()
        .any(|geo| geo == GLOBAL_GEOGRAPHY || labels_overlap(geo, candidate_geography));

    if matched {
        GEOGRAPHY_WEIGHT
    } else {
        GEOGRAPHY_MISS_CREDIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateMetrics;

    fn create_test_investor() -> InvestorCriteria {
        InvestorCriteria {
            id: "inv-1".to_string(),
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            linkedin_url: None,
            industries: vec!["Healthcare".to_string()],
            stages: vec!["Seed".to_string(), "Series A".to_string()],
            check_size: CheckSizeRange::new(1_000_000, 3_000_000),
            geography: vec!["US".to_string()],
            created_at: None,
            updated_at: None,
        }
    }

    fn create_test_candidate(industry: &str, stage: &str, raising: u64, geography: &str) -> CandidateProfile {
        CandidateProfile {
            id: "startup-1".to_string(),
            name: "Test Startup".to_string(),
            email: "team@test.io".to_string(),
            industry: industry.to_string(),
            stage: stage.to_string(),
            raising,
            geography: geography.to_string(),
            description: String::new(),
            website: None,
            metrics: CandidateMetrics::default(),
            founders: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_perfect_match_scores_100() {
        let investor = create_test_investor();
        let candidate = create_test_candidate("Healthcare", "Seed", 2_000_000, "US");

        assert_eq!(calculate_match_score(&investor, &candidate), 100);
    }

    #[test]
    fn test_industry_score() {
        let industries = vec!["Healthcare".to_string()];
        assert_eq!(industry_score(&industries, "Healthcare"), 35.0);
        assert_eq!(industry_score(&industries, "Fintech"), 0.0);
        // Substring in either direction, ignoring case
        assert_eq!(industry_score(&industries, "healthcare ai"), 35.0);
        assert_eq!(industry_score(&["Climate Tech".to_string()], "climate"), 35.0);
    }

    #[test]
    fn test_stage_score_is_exact() {
        let stages = vec!["Seed".to_string()];
        assert_eq!(stage_score(&stages, "Seed"), 30.0);
        assert_eq!(stage_score(&stages, "seed"), 0.0);
        assert_eq!(stage_score(&stages, "Pre-seed"), 0.0);
    }

    #[test]
    fn test_check_size_in_range() {
        let range = CheckSizeRange::new(1_000_000, 3_000_000);
        assert_eq!(check_size_score(&range, 2_000_000), 25.0);
        assert_eq!(check_size_score(&range, 1_000_000), 25.0);
        assert_eq!(check_size_score(&range, 3_000_000), 25.0);
    }

    #[test]
    fn test_check_size_partial_credit() {
        let range = CheckSizeRange::new(1_000_000, 3_000_000);

        // Above: distance 1M over half-max 1.5M
        let above = check_size_score(&range, 4_000_000);
        assert!((above - (25.0 - 25.0 * 2.0 / 3.0)).abs() < 1e-9);

        // Below: distance 500K over half-max 1.5M
        let below = check_size_score(&range, 500_000);
        assert!((below - (25.0 - 25.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_check_size_far_away_floors_at_zero() {
        let range = CheckSizeRange::new(1_000_000, 3_000_000);
        assert_eq!(check_size_score(&range, 20_000_000), 0.0);
        assert_eq!(check_size_score(&range, u64::MAX), 0.0);
    }

    #[test]
    fn test_check_size_zero_max() {
        let range = CheckSizeRange::new(0, 0);
        assert_eq!(check_size_score(&range, 0), 25.0);
        assert_eq!(check_size_score(&range, 100), 0.0);
    }

    #[test]
    fn test_geography_score() {
        assert_eq!(geography_score(&["Global".to_string()], "Latin America"), 10.0);
        assert_eq!(geography_score(&["Asia".to_string()], "Southeast Asia"), 10.0);
        assert_eq!(geography_score(&["Asia".to_string()], "Europe"), 5.0);
        // "global" is not the sentinel and does not substring-match
        assert_eq!(geography_score(&["global".to_string()], "Europe"), 5.0);
    }

    #[test]
    fn test_partial_total_is_rounded() {
        let investor = create_test_investor();
        // 35 + 30 + 8.33 + 10 = 83.33
        let candidate = create_test_candidate("Healthcare", "Seed", 4_000_000, "US");
        assert_eq!(calculate_match_score(&investor, &candidate), 83);

        // 0 + 0 + 16.67 + 5 = 21.67
        let candidate = create_test_candidate("Fintech", "Series B", 500_000, "Europe");
        assert_eq!(calculate_match_score(&investor, &candidate), 22);
    }

    #[test]
    fn test_score_is_deterministic() {
        let investor = create_test_investor();
        let candidate = create_test_candidate("Robotics", "Seed", 4_000_000, "US");

        let first = calculate_match_score(&investor, &candidate);
        let second = calculate_match_score(&investor, &candidate);
        assert_eq!(first, second);
        assert!(first <= 100);
    }
}
