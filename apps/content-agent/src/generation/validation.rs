//! Request validation: the single translation point from unchecked input to `ContentRequest`.
//!
//! Nothing downstream re-validates: once a request exists its enums are trusted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::request::{
    Audience, Choice, ContentRequest, ContentType, Platform, RawContentRequest, Tone,
};

/// Accepted range for a caller-supplied `word_count` override.
pub const MIN_WORD_COUNT_OVERRIDE: u32 = 100;
pub const MAX_WORD_COUNT_OVERRIDE: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    MissingField,
    UnsupportedValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: String,
    /// Accepted values; empty for `MissingField` on free-text fields.
    pub valid_options: Vec<String>,
    pub message: String,
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self {
            kind: ValidationErrorKind::MissingField,
            field: field.to_string(),
            valid_options: Vec::new(),
            message: format!("Missing required field '{field}'"),
        }
    }

    pub fn unsupported(field: &str, value: &str, valid_options: Vec<String>) -> Self {
        let message = format!(
            "Unsupported value '{}' for field '{}'. Valid options: {}",
            value,
            field,
            valid_options.join(", ")
        );
        Self {
            kind: ValidationErrorKind::UnsupportedValue,
            field: field.to_string(),
            valid_options,
            message,
        }
    }
}

/// Validates a raw request and applies defaults for optional fields.
///
/// Order of checks: topic, content_type, target_audience, tone, platform, word_count.
/// The first failure wins.
pub fn validate_request(raw: &RawContentRequest) -> Result<ContentRequest, ValidationError> {
    let topic = required_text(raw.topic.as_deref(), "topic")?.to_string();
    let content_type: ContentType = required_choice(raw.content_type.as_deref(), "content_type")?;
    let target_audience: Audience =
        required_choice(raw.target_audience.as_deref(), "target_audience")?;
    let tone: Tone = required_choice(raw.tone.as_deref(), "tone")?;

    let platform = match non_blank(raw.platform.as_deref()) {
        Some(value) => Platform::parse(value)
            .ok_or_else(|| ValidationError::unsupported("platform", value, Platform::options()))?,
        None => Platform::default(),
    };

    if let Some(count) = raw.word_count {
        if !(MIN_WORD_COUNT_OVERRIDE..=MAX_WORD_COUNT_OVERRIDE).contains(&count) {
            return Err(ValidationError::unsupported(
                "word_count",
                &count.to_string(),
                vec![format!(
                    "{MIN_WORD_COUNT_OVERRIDE}-{MAX_WORD_COUNT_OVERRIDE}"
                )],
            ));
        }
    }

    Ok(ContentRequest {
        topic,
        content_type,
        target_audience,
        tone,
        platform,
        word_count: raw.word_count,
        call_to_action: non_blank(raw.call_to_action.as_deref()).map(str::to_string),
        include_seo: raw.include_seo.unwrap_or(true),
        include_examples: raw.include_examples.unwrap_or(true),
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ValidationError> {
    non_blank(value).ok_or_else(|| ValidationError::missing(field))
}

fn required_choice<C: Choice>(value: Option<&str>, field: &str) -> Result<C, ValidationError> {
    let value = required_text(value, field)?;
    C::parse(value).ok_or_else(|| ValidationError::unsupported(field, value, C::options()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawContentRequest {
        RawContentRequest::new(
            "Remote Work Best Practices",
            "blog",
            "startup_founders",
            "professional",
        )
    }

    #[test]
    fn test_valid_request_applies_defaults() {
        let request = validate_request(&valid_raw()).unwrap();
        assert_eq!(request.topic, "Remote Work Best Practices");
        assert_eq!(request.content_type, ContentType::Blog);
        assert_eq!(request.target_audience, Audience::StartupFounders);
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.platform, Platform::General);
        assert!(request.include_seo);
        assert!(request.include_examples);
        assert!(request.word_count.is_none());
        assert!(request.call_to_action.is_none());
    }

    #[test]
    fn test_topic_is_trimmed() {
        let mut raw = valid_raw();
        raw.topic = Some("  AI Innovation  ".to_string());
        assert_eq!(validate_request(&raw).unwrap().topic, "AI Innovation");
    }

    #[test]
    fn test_missing_topic_is_missing_field() {
        let mut raw = valid_raw();
        raw.topic = None;
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field, "topic");
    }

    #[test]
    fn test_blank_topic_is_missing_field() {
        let mut raw = valid_raw();
        raw.topic = Some("   ".to_string());
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field, "topic");
    }

    #[test]
    fn test_invalid_content_type_names_field_and_options() {
        let mut raw = valid_raw();
        raw.content_type = Some("invalid_type".to_string());
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnsupportedValue);
        assert_eq!(err.field, "content_type");
        assert_eq!(err.valid_options.len(), 5);
        assert!(err.message.contains("invalid_type"));
        assert!(err.message.contains("social_media"));
    }

    #[test]
    fn test_invalid_audience_is_rejected() {
        let mut raw = valid_raw();
        raw.target_audience = Some("dentists".to_string());
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.field, "target_audience");
        assert_eq!(err.valid_options.len(), 4);
    }

    #[test]
    fn test_invalid_tone_is_rejected() {
        let mut raw = valid_raw();
        raw.tone = Some("sarcastic".to_string());
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.field, "tone");
        assert_eq!(err.kind, ValidationErrorKind::UnsupportedValue);
    }

    #[test]
    fn test_missing_tone_is_missing_field() {
        let mut raw = valid_raw();
        raw.tone = None;
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingField);
        assert_eq!(err.field, "tone");
    }

    #[test]
    fn test_invalid_platform_is_rejected() {
        let mut raw = valid_raw();
        raw.platform = Some("myspace".to_string());
        let err = validate_request(&raw).unwrap_err();
        assert_eq!(err.field, "platform");
    }

    #[test]
    fn test_blank_platform_defaults_to_general() {
        let mut raw = valid_raw();
        raw.platform = Some(" ".to_string());
        assert_eq!(validate_request(&raw).unwrap().platform, Platform::General);
    }

    #[test]
    fn test_word_count_override_bounds() {
        let mut raw = valid_raw();
        raw.word_count = Some(99);
        assert_eq!(validate_request(&raw).unwrap_err().field, "word_count");

        raw.word_count = Some(5001);
        assert_eq!(validate_request(&raw).unwrap_err().field, "word_count");

        raw.word_count = Some(300);
        assert_eq!(validate_request(&raw).unwrap().word_count, Some(300));
    }

    #[test]
    fn test_blank_cta_is_dropped() {
        let mut raw = valid_raw();
        raw.call_to_action = Some("  ".to_string());
        assert!(validate_request(&raw).unwrap().call_to_action.is_none());
    }

    #[test]
    fn test_first_failure_wins() {
        let raw = RawContentRequest {
            topic: Some("X".to_string()),
            content_type: Some("invalid_type".to_string()),
            target_audience: Some("nobody".to_string()),
            tone: None,
            ..RawContentRequest::default()
        };
        assert_eq!(validate_request(&raw).unwrap_err().field, "content_type");
    }
}
