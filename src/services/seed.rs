use crate::models::{CandidateMetrics, CandidateProfile};

#[allow(clippy::too_many_arguments)]
fn startup(
    id: &str,
    name: &str,
    email: &str,
    industry: &str,
    stage: &str,
    raising: u64,
    geography: &str,
    description: &str,
    website: &str,
    metrics: CandidateMetrics,
) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        industry: industry.to_string(),
        stage: stage.to_string(),
        raising,
        geography: geography.to_string(),
        description: description.to_string(),
        website: Some(website.to_string()),
        metrics,
        founders: vec![],
        created_at: Some(chrono::Utc::now()),
    }
}

fn metrics(arr: Option<u64>, customers: Option<u64>, growth: Option<&str>) -> CandidateMetrics {
    CandidateMetrics {
        arr,
        customers,
        growth: growth.map(str::to_string),
    }
}

/// Reference startups loaded into the store at boot
pub fn seed_candidates() -> Vec<CandidateProfile> {
    vec![
        startup(
            "startup-1",
            "HealthScope AI",
            "team@healthscope.ai",
            "Healthcare",
            "Series A",
            3_000_000,
            "Southeast Asia",
            "AI diagnostic platform for rural clinics in emerging markets. Built by former doctors with 50 clinics deployed across Philippines and Indonesia. Reducing diagnosis time by 70% and democratizing healthcare access.",
            "healthscope.ai",
            metrics(Some(500_000), Some(50), Some("25% MoM")),
        ),
        startup(
            "startup-2",
            "SolarGrid",
            "founders@solargrid.io",
            "Climate Tech",
            "Seed",
            2_000_000,
            "US",
            "Solar + battery storage for commercial buildings with proprietary AI for energy optimization. Serving Fortune 500 clients with 3-year payback period. 15 buildings deployed, expanding to 50 by EOY.",
            "solargrid.io",
            metrics(Some(1_200_000), Some(10), None),
        ),
        startup(
            "startup-3",
            "PayFlow",
            "hello@payflow.com",
            "Fintech",
            "Series B",
            20_000_000,
            "Latin America",
            "B2B payment infrastructure for Latin America processing $500M annually with 200+ enterprise customers. Replacing wire transfers with instant settlements. Strong unit economics and path to profitability.",
            "payflow.com",
            metrics(Some(15_000_000), Some(200), None),
        ),
        startup(
            "startup-4",
            "Vibe",
            "team@vibe.social",
            "Consumer",
            "Pre-seed",
            500_000,
            "US",
            "Social app for college students to discover events and meet friends. Viral referral loops. 50K users across 5 universities with 40% weekly retention. Expanding to 20 schools this semester.",
            "vibe.social",
            metrics(None, Some(50_000), Some("40% weekly retention")),
        ),
        startup(
            "startup-5",
            "RoboWeld",
            "info@roboweld.tech",
            "Robotics",
            "Seed",
            4_000_000,
            "US",
            "Computer vision welding robots for automotive manufacturing reducing defects by 95%. Deployed at 2 Tier-1 suppliers with $8M in LOIs. Founded by ex-Tesla robotics team.",
            "roboweld.tech",
            metrics(None, Some(2), None),
        ),
        startup(
            "startup-6",
            "MedData Pro",
            "contact@meddata.pro",
            "Healthcare",
            "Seed",
            1_500_000,
            "US",
            "HIPAA-compliant patient data platform for small clinics. SaaS with strong unit economics. 75 customers, $4K ACV, sub-5% churn, 15% MoM growth. Replacing legacy systems costing 10x more.",
            "meddata.pro",
            metrics(Some(300_000), Some(75), Some("15% MoM")),
        ),
        startup(
            "startup-7",
            "CarbonTech",
            "hello@carbontech.io",
            "Climate Tech",
            "Series A",
            5_000_000,
            "Europe",
            "Direct air capture technology with partnerships across 3 countries. Proven carbon removal at scale with offtake agreements from Microsoft and Stripe. Novel chemistry IP with 40% cost reduction.",
            "carbontech.io",
            metrics(None, Some(8), None),
        ),
        startup(
            "startup-8",
            "ShopLocal",
            "team@shoplocal.app",
            "Consumer",
            "Seed",
            800_000,
            "US",
            "Marketplace connecting local artisans with conscious consumers. 30% repeat purchase rate. 25K buyers, 500 sellers. 15% take rate with path to profitability in 18 months.",
            "shoplocal.app",
            metrics(None, Some(25_000), Some("30% MoM GMV")),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let seeds = seed_candidates();
        let ids: HashSet<_> = seeds.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(seeds.len(), 8);
        assert_eq!(ids.len(), seeds.len());
    }
}
