//! Audience profiles: pain points, interests and language register per audience.
//!
//! CRITICAL: general_audience copy never ships industry jargon. `plain_language`
//! rewrites library phrasing for that audience before the topic is substituted in;
//! the caller's own words are never rewritten.

use crate::models::request::Audience;

#[derive(Debug)]
pub struct AudienceProfile {
    pub pain_points: &'static [&'static str],
    pub interests: &'static [&'static str],
    pub language: &'static str,
    /// Short scenes used in examples and case studies.
    pub scenarios: &'static [&'static str],
    /// Static domain keywords the analyzer suggests alongside topic tokens.
    pub domain_keywords: &'static [&'static str],
}

static STARTUP_FOUNDERS: AudienceProfile = AudienceProfile {
    pain_points: &[
        "Rapid growth",
        "Market validation",
        "Resource constraints",
    ],
    interests: &["Growth strategies", "Funding", "Technology adoption"],
    language: "Business-focused, results-oriented",
    scenarios: &[
        "a seed-stage startup racing to find product-market fit with a five-person team",
        "a Series A company doubling headcount while keeping its culture intact",
        "a bootstrapped founder balancing customer work with long-term strategy",
    ],
    domain_keywords: &["startup", "growth", "scaling", "funding", "product-market fit"],
};

static TECH_LEADS: AudienceProfile = AudienceProfile {
    pain_points: &["Team management", "Technical debt", "Scalability"],
    interests: &["Best practices", "Team productivity", "Architecture"],
    language: "Technical but accessible",
    scenarios: &[
        "an engineering team of twelve migrating a legacy monolith without pausing feature work",
        "a platform group supporting forty product engineers across three time zones",
        "a lead inheriting a codebase with years of accumulated technical debt",
    ],
    domain_keywords: &["engineering", "architecture", "devops", "productivity", "technical debt"],
};

static MARKETING_PROFESSIONALS: AudienceProfile = AudienceProfile {
    pain_points: &["Lead generation", "ROI measurement", "Brand awareness"],
    interests: &[
        "Marketing trends",
        "Campaign optimization",
        "Customer acquisition",
    ],
    language: "Strategy-focused, metrics-driven",
    scenarios: &[
        "a B2B marketing team rebuilding its funnel after a shift in buyer behavior",
        "a brand manager proving campaign ROI to a skeptical leadership team",
        "a two-person growth team competing with rivals ten times its budget",
    ],
    domain_keywords: &["marketing", "campaigns", "conversion", "brand", "customer acquisition"],
};

static GENERAL_AUDIENCE: AudienceProfile = AudienceProfile {
    pain_points: &["Learning new concepts", "Practical application"],
    interests: &["Accessible information", "Clear benefits"],
    language: "Simple, jargon-free",
    scenarios: &[
        "a small local business trying something new for the first time",
        "a community group looking for a simpler way to get things done",
        "someone exploring the idea on their own with no prior experience",
    ],
    domain_keywords: &["guide", "tips", "how-to", "basics", "everyday"],
};

pub fn profile_for(audience: Audience) -> &'static AudienceProfile {
    match audience {
        Audience::StartupFounders => &STARTUP_FOUNDERS,
        Audience::TechLeads => &TECH_LEADS,
        Audience::MarketingProfessionals => &MARKETING_PROFESSIONALS,
        Audience::GeneralAudience => &GENERAL_AUDIENCE,
    }
}

/// Industry terms and their plain-language replacements.
const JARGON: &[(&str, &str)] = &[
    ("KPIs", "key results"),
    ("ROI", "return"),
    ("stakeholders", "the people involved"),
    ("time-to-market", "launch time"),
    ("scalability", "room to grow"),
    ("Scalability", "Room to grow"),
    ("synergies", "shared benefits"),
    ("leverage", "use"),
];

/// Rewrites jargon for audiences that need plain language; other audiences pass through.
pub fn plain_language(text: &str, audience: Audience) -> String {
    match audience {
        Audience::GeneralAudience => JARGON
            .iter()
            .fold(text.to_string(), |acc, (term, plain)| acc.replace(term, plain)),
        Audience::StartupFounders | Audience::TechLeads | Audience::MarketingProfessionals => {
            text.to_string()
        }
    }
}
