use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generation::analyzer::AnalysisReport;
use crate::models::request::{ContentRequest, Platform};

/// Email campaign angle. Rotates across the variations of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    Welcome,
    Educational,
    Promotional,
}

/// Structural metadata that only some formats carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum FormatDetails {
    Blog,
    Social {
        platform: Platform,
        hashtags: Vec<String>,
        char_count: usize,
    },
    Newsletter {
        postscript: String,
    },
    VideoScript {
        duration_minutes: u32,
    },
    Email {
        subject_line: String,
        campaign: CampaignKind,
    },
}

/// One generated variation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVariation {
    pub title: String,
    pub content: String,
    pub headings: Vec<String>,
    pub cta: String,
    pub tags: Vec<String>,
    /// Exact whitespace-token count of `content`.
    pub word_count: usize,
    pub approach: String,
    pub details: FormatDetails,
}

/// Everything one `generate_content` call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub request: ContentRequest,
    pub variations: Vec<ContentVariation>,
    pub analysis: AnalysisReport,
}

impl GenerationResult {
    pub fn into_parts(self) -> (Vec<ContentVariation>, AnalysisReport) {
        (self.variations, self.analysis)
    }
}

/// Exact whitespace-token count used for every `word_count` field.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
