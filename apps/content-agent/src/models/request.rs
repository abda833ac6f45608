use serde::{Deserialize, Serialize};

/// A closed set of supported values for one request field.
///
/// The validator is the only place that turns free text into these types,
/// via `Choice::parse`. Everything downstream matches on the enum.
pub trait Choice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Parses loosely-typed input: trimmed, lower-cased, `-` and spaces read as `_`.
    fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_choice(raw);
        Self::ALL.iter().copied().find(|c| c.as_str() == normalized)
    }

    fn options() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

pub fn normalize_choice(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Blog,
    SocialMedia,
    Newsletter,
    VideoScript,
    EmailCampaign,
}

impl Choice for ContentType {
    const ALL: &'static [Self] = &[
        ContentType::Blog,
        ContentType::SocialMedia,
        ContentType::Newsletter,
        ContentType::VideoScript,
        ContentType::EmailCampaign,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::SocialMedia => "social_media",
            ContentType::Newsletter => "newsletter",
            ContentType::VideoScript => "video_script",
            ContentType::EmailCampaign => "email_campaign",
        }
    }
}

impl ContentType {
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Blog => "Blog Post",
            ContentType::SocialMedia => "Social Media",
            ContentType::Newsletter => "Newsletter",
            ContentType::VideoScript => "Video Script",
            ContentType::EmailCampaign => "Email Campaign",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    StartupFounders,
    TechLeads,
    MarketingProfessionals,
    GeneralAudience,
}

impl Choice for Audience {
    const ALL: &'static [Self] = &[
        Audience::StartupFounders,
        Audience::TechLeads,
        Audience::MarketingProfessionals,
        Audience::GeneralAudience,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Audience::StartupFounders => "startup_founders",
            Audience::TechLeads => "tech_leads",
            Audience::MarketingProfessionals => "marketing_professionals",
            Audience::GeneralAudience => "general_audience",
        }
    }
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Audience::StartupFounders => "Startup Founders",
            Audience::TechLeads => "Tech Leads",
            Audience::MarketingProfessionals => "Marketing Professionals",
            Audience::GeneralAudience => "General Audience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Professional,
    Conversational,
    Persuasive,
    Informative,
    Humorous,
}

impl Choice for Tone {
    const ALL: &'static [Self] = &[
        Tone::Professional,
        Tone::Conversational,
        Tone::Persuasive,
        Tone::Informative,
        Tone::Humorous,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Persuasive => "persuasive",
            Tone::Informative => "informative",
            Tone::Humorous => "humorous",
        }
    }
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Conversational => "Conversational",
            Tone::Persuasive => "Persuasive",
            Tone::Informative => "Informative",
            Tone::Humorous => "Humorous",
        }
    }
}

/// Social platform. Only shapes social_media output; carried but ignored elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Twitter,
    Linkedin,
    Facebook,
    Instagram,
    #[default]
    General,
}

impl Choice for Platform {
    const ALL: &'static [Self] = &[
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::Instagram,
        Platform::General,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::General => "general",
        }
    }
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::General => "General",
        }
    }
}

/// Unchecked request as it arrives from a caller, a JSON file or the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawContentRequest {
    pub topic: Option<String>,
    pub content_type: Option<String>,
    pub target_audience: Option<String>,
    pub tone: Option<String>,
    pub platform: Option<String>,
    pub word_count: Option<u32>,
    pub call_to_action: Option<String>,
    pub include_seo: Option<bool>,
    pub include_examples: Option<bool>,
}

impl RawContentRequest {
    pub fn new(topic: &str, content_type: &str, target_audience: &str, tone: &str) -> Self {
        Self {
            topic: Some(topic.to_string()),
            content_type: Some(content_type.to_string()),
            target_audience: Some(target_audience.to_string()),
            tone: Some(tone.to_string()),
            ..Self::default()
        }
    }
}

/// Normalized, validated request. Built only by `generation::validation::validate_request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub target_audience: Audience,
    pub tone: Tone,
    pub platform: Platform,
    pub word_count: Option<u32>,
    pub call_to_action: Option<String>,
    pub include_seo: bool,
    pub include_examples: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_exact_names() {
        assert_eq!(ContentType::parse("blog"), Some(ContentType::Blog));
        assert_eq!(Audience::parse("tech_leads"), Some(Audience::TechLeads));
        assert_eq!(Tone::parse("humorous"), Some(Tone::Humorous));
    }

    #[test]
    fn test_parse_normalizes_case_dashes_and_spaces() {
        assert_eq!(ContentType::parse(" Social-Media "), Some(ContentType::SocialMedia));
        assert_eq!(
            Audience::parse("Marketing Professionals"),
            Some(Audience::MarketingProfessionals)
        );
        assert_eq!(Platform::parse("LinkedIn"), Some(Platform::Linkedin));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(ContentType::parse("invalid_type"), None);
        assert_eq!(Tone::parse(""), None);
    }

    #[test]
    fn test_options_cover_all_variants() {
        assert_eq!(ContentType::options().len(), 5);
        assert_eq!(Audience::options().len(), 4);
        assert_eq!(Tone::options().len(), 5);
        assert!(ContentType::options().contains(&"email_campaign".to_string()));
    }

    #[test]
    fn test_raw_request_deserializes_with_missing_fields() {
        let raw: RawContentRequest =
            serde_json::from_str(r#"{"topic": "AI Innovation", "word_count": 300}"#).unwrap();
        assert_eq!(raw.topic.as_deref(), Some("AI Innovation"));
        assert_eq!(raw.word_count, Some(300));
        assert!(raw.content_type.is_none());
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        let json = serde_json::to_string(&ContentType::VideoScript).unwrap();
        assert_eq!(json, "\"video_script\"");
    }
}
