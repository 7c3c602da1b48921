use crate::models::{CandidateProfile, InvestorCriteria};
use serde_json::{json, Value};

pub const SYSTEM_PROMPT: &str =
    "You are a professional investment matchmaker connecting investors with startups.";

/// Name of the structured output shape sent to the backend
pub const INSIGHT_SCHEMA_NAME: &str = "MatchInsights";

/// JSON schema of the two-field insight the backend must return
pub fn insight_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "explanation": {
                "type": "string",
                "description": "One concise sentence (max 25 words) explaining why this is a strong match. Be specific about alignment."
            },
            "outreach": {
                "type": "string",
                "description": "A warm, professional intro message (40-50 words) the investor can send to the startup, written in first person. Reference specific shared interests, suggest a 15-min call, and avoid formal openings like \"Dear\"."
            }
        },
        "required": ["explanation", "outreach"],
        "additionalProperties": false
    })
}

/// Format a USD amount in millions with one decimal, e.g. `$1.5M`
pub fn format_millions(amount: u64) -> String {
    format!("${:.1}M", amount as f64 / 1_000_000.0)
}

/// Format a USD amount in whole thousands, e.g. `$500K`
pub fn format_thousands(amount: u64) -> String {
    format!("${:.0}K", amount as f64 / 1_000.0)
}

/// Build the user prompt grounding the insight in both profiles
pub fn build_insight_prompt(investor: &InvestorCriteria, candidate: &CandidateProfile) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str("INVESTOR PROFILE:\n");
    prompt.push_str(&format!("- Name: {}\n", investor.name));
    prompt.push_str(&format!("- Industries: {}\n", investor.industries.join(", ")));
    prompt.push_str(&format!("- Stages: {}\n", investor.stages.join(", ")));
    prompt.push_str(&format!(
        "- Check Size: {} - {}\n",
        format_millions(investor.check_size.min),
        format_millions(investor.check_size.max)
    ));
    prompt.push_str(&format!("- Geography: {}\n", investor.geography.join(", ")));

    prompt.push_str("\nSTARTUP PROFILE:\n");
    prompt.push_str(&format!("- Name: {}\n", candidate.name));
    prompt.push_str(&format!("- Industry: {}\n", candidate.industry));
    prompt.push_str(&format!("- Stage: {}\n", candidate.stage));
    prompt.push_str(&format!("- Raising: {}\n", format_millions(candidate.raising)));
    prompt.push_str(&format!("- Geography: {}\n", candidate.geography));
    prompt.push_str(&format!("- Description: {}\n", candidate.description));

    // Zero metrics are treated as unreported
    if let Some(arr) = candidate.metrics.arr.filter(|v| *v > 0) {
        prompt.push_str(&format!("- ARR: {}\n", format_thousands(arr)));
    }
    if let Some(customers) = candidate.metrics.customers.filter(|v| *v > 0) {
        prompt.push_str(&format!("- Customers: {}\n", customers));
    }
    if let Some(growth) = candidate.metrics.growth.as_deref().filter(|g| !g.trim().is_empty()) {
        prompt.push_str(&format!("- Growth: {}\n", growth));
    }

    prompt.push_str(&format!("\nGenerate personalized match insights for {}.", investor.name));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CandidateMetrics, CheckSizeRange};

    fn investor() -> InvestorCriteria {
        InvestorCriteria {
            id: "inv-1".to_string(),
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            linkedin_url: None,
            industries: vec!["Healthcare".to_string(), "AI".to_string()],
            stages: vec!["Seed".to_string()],
            check_size: CheckSizeRange::new(500_000, 2_000_000),
            geography: vec!["US".to_string(), "Europe".to_string()],
            created_at: None,
            updated_at: None,
        }
    }

    fn candidate(metrics: CandidateMetrics) -> CandidateProfile {
        CandidateProfile {
            id: "startup-6".to_string(),
            name: "MedData Pro".to_string(),
            email: "contact@meddata.pro".to_string(),
            industry: "Healthcare".to_string(),
            stage: "Seed".to_string(),
            raising: 1_500_000,
            geography: "US".to_string(),
            description: "HIPAA-compliant patient data platform.".to_string(),
            website: None,
            metrics,
            founders: vec![],
            created_at: None,
        }
    }

    #[test]
    fn test_format_amounts() {
        assert_eq!(format_millions(1_500_000), "$1.5M");
        assert_eq!(format_millions(20_000_000), "$20.0M");
        assert_eq!(format_thousands(300_000), "$300K");
    }

    #[test]
    fn test_prompt_contains_both_profiles() {
        let metrics = CandidateMetrics {
            arr: Some(300_000),
            customers: Some(75),
            growth: Some("15% MoM".to_string()),
        };
        let prompt = build_insight_prompt(&investor(), &candidate(metrics));

        assert!(prompt.contains("- Industries: Healthcare, AI"));
        assert!(prompt.contains("- Check Size: $0.5M - $2.0M"));
        assert!(prompt.contains("- Geography: US, Europe"));
        assert!(prompt.contains("- Name: MedData Pro"));
        assert!(prompt.contains("- Raising: $1.5M"));
        assert!(prompt.contains("- ARR: $300K"));
        assert!(prompt.contains("- Customers: 75"));
        assert!(prompt.contains("- Growth: 15% MoM"));
        assert!(prompt.ends_with("Generate personalized match insights for Dana Reyes."));
    }

    #[test]
    fn test_prompt_omits_missing_metrics() {
        let prompt = build_insight_prompt(&investor(), &candidate(CandidateMetrics::default()));

        assert!(!prompt.contains("ARR"));
        assert!(!prompt.contains("Customers"));
        assert!(!prompt.contains("Growth"));
    }

    #[test]
    fn test_schema_requires_both_fields() {
        let schema = insight_schema();
        assert_eq!(schema["required"], json!(["explanation", "outreach"]));
        assert_eq!(schema["additionalProperties"], json!(false));
    }
}
