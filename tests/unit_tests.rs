// Unit tests for InvestorFit

use investorfit::core::{
    fallback_insight, parse_insight,
    prompts::build_insight_prompt,
    scoring::calculate_match_score,
};
use investorfit::models::{CandidateMetrics, CandidateProfile, CheckSizeRange, InvestorCriteria};

fn investor(industries: &[&str], stages: &[&str], min: u64, max: u64, geography: &[&str]) -> InvestorCriteria {
    InvestorCriteria {
        id: "inv-1".to_string(),
        name: "Dana Reyes".to_string(),
        email: "dana@example.com".to_string(),
        linkedin_url: None,
        industries: industries.iter().map(|s| s.to_string()).collect(),
        stages: stages.iter().map(|s| s.to_string()).collect(),
        check_size: CheckSizeRange::new(min, max),
        geography: geography.iter().map(|s| s.to_string()).collect(),
        created_at: None,
        updated_at: None,
    }
}

fn candidate(industry: &str, stage: &str, raising: u64, geography: &str) -> CandidateProfile {
    CandidateProfile {
        id: "startup-1".to_string(),
        name: "HealthScope AI".to_string(),
        email: "team@healthscope.ai".to_string(),
        industry: industry.to_string(),
        stage: stage.to_string(),
        raising,
        geography: geography.to_string(),
        description: "AI diagnostic platform for rural clinics.".to_string(),
        website: Some("healthscope.ai".to_string()),
        metrics: CandidateMetrics::default(),
        founders: vec![],
        created_at: None,
    }
}

#[test]
fn test_industry_dimension() {
    let inv = investor(&["Healthcare"], &["Nope"], 1_000_000, 3_000_000, &["Nowhere"]);

    // Stage 0, check size 25, geography 5
    let healthcare = calculate_match_score(&inv, &candidate("Healthcare", "Seed", 2_000_000, "US"));
    let fintech = calculate_match_score(&inv, &candidate("Fintech", "Seed", 2_000_000, "US"));

    assert_eq!(healthcare, 35 + 25 + 5);
    assert_eq!(fintech, 25 + 5);
}

#[test]
fn test_check_size_dimension() {
    let inv = investor(&["Healthcare"], &["Seed"], 1_000_000, 3_000_000, &["Global"]);

    let in_range = calculate_match_score(&inv, &candidate("Healthcare", "Seed", 2_000_000, "US"));
    assert_eq!(in_range, 100);

    // 25 - (1M / 1.5M) * 25 = 8.33
    let above = calculate_match_score(&inv, &candidate("Healthcare", "Seed", 4_000_000, "US"));
    assert_eq!(above, 83);

    let far_above = calculate_match_score(&inv, &candidate("Healthcare", "Seed", 50_000_000, "US"));
    assert_eq!(far_above, 75);
}

#[test]
fn test_geography_dimension() {
    let global = investor(&["Fintech"], &["Seed"], 0, 1, &["Global"]);
    let asia = investor(&["Fintech"], &["Seed"], 0, 1, &["Asia"]);

    // Industry 0, stage 0, check size 0 for a 5M raise against [0, 1]
    let c = candidate("Healthcare", "Series A", 5_000_000, "Europe");
    assert_eq!(calculate_match_score(&global, &c), 10);
    assert_eq!(calculate_match_score(&asia, &c), 5);
}

#[test]
fn test_score_bounds_and_determinism() {
    let investors = [
        investor(&["Healthcare"], &["Seed"], 1_000_000, 3_000_000, &["US"]),
        investor(&[], &[], 0, 0, &[]),
        investor(&["AI", "Climate"], &["Series A", "Seed"], 0, u64::MAX, &["Global"]),
    ];
    let candidates = [
        candidate("Healthcare", "Seed", 2_000_000, "US"),
        candidate("", "", 0, ""),
        candidate("Climate Tech", "Series A", u64::MAX, "Europe"),
    ];

    for inv in &investors {
        for c in &candidates {
            let first = calculate_match_score(inv, c);
            let second = calculate_match_score(inv, c);
            assert_eq!(first, second);
            assert!(first <= 100);
        }
    }
}

#[test]
fn test_fallback_mentions_both_parties() {
    let inv = investor(&["Healthcare", "AI"], &["Seed"], 1, 2, &["US"]);
    let c = candidate("Healthcare", "Series A", 3_000_000, "Southeast Asia");

    let insight = fallback_insight(&inv, &c);

    assert_eq!(insight.explanation, "Strong Healthcare and Series A alignment with check size fit.");
    assert!(insight.outreach.contains("HealthScope AI"));
    assert!(insight.outreach.contains("Dana Reyes"));
    assert!(insight.outreach.contains("15-min call"));
}

#[test]
fn test_parse_insight_requires_exact_shape() {
    assert!(parse_insight(r#"{"explanation": "Strong clinic focus.", "outreach": "Hi there!"}"#).is_ok());
    assert!(parse_insight(r#"{"explanation": "Strong clinic focus.", "icebreaker": "Hi there!"}"#).is_err());
    assert!(parse_insight("[]").is_err());
}

#[test]
fn test_prompt_is_grounded_in_pairing() {
    let inv = investor(&["Healthcare"], &["Seed"], 1_000_000, 3_000_000, &["Asia"]);
    let mut c = candidate("Healthcare", "Series A", 3_000_000, "Southeast Asia");
    c.metrics.arr = Some(500_000);

    let prompt = build_insight_prompt(&inv, &c);

    assert!(prompt.contains("Dana Reyes"));
    assert!(prompt.contains("HealthScope AI"));
    assert!(prompt.contains("- Check Size: $1.0M - $3.0M"));
    assert!(prompt.contains("- Raising: $3.0M"));
    assert!(prompt.contains("- Description: AI diagnostic platform for rural clinics."));
    assert!(prompt.contains("- ARR: $500K"));
}
