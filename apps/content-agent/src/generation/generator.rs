//! Variation Generator: orchestrates the full generation pipeline.
//!
//! Flow: validate_request → select_content × N (explicit rotation index) →
//!       CTA + tags → duplicate check → analyzer → GenerationResult.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::analyzer::{ContentAnalyzer, RuleBasedAnalyzer};
use crate::generation::audience::plain_language;
use crate::generation::content_selector::{select_content, Rotation};
use crate::generation::seo::{focus_phrase, seo_tags};
use crate::generation::tone::voice_for;
use crate::generation::validation::validate_request;
use crate::models::content::{count_words, ContentVariation, GenerationResult};
use crate::models::request::{ContentRequest, RawContentRequest};

pub const DEFAULT_VARIATION_COUNT: usize = 3;

/// Extra selector attempts when a variation duplicates an earlier one.
const MAX_DEDUP_RETRIES: usize = 3;

/// Entry point for programmatic callers. Cheap to clone and `Send + Sync`.
#[derive(Clone)]
pub struct ContentAgent {
    variation_count: usize,
    analyzer: Arc<dyn ContentAnalyzer>,
}

impl Default for ContentAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentAgent {
    pub fn new() -> Self {
        Self {
            variation_count: DEFAULT_VARIATION_COUNT,
            analyzer: Arc::new(RuleBasedAnalyzer),
        }
    }

    /// Values below 1 are raised to 1.
    pub fn with_variation_count(mut self, count: usize) -> Self {
        self.variation_count = count.max(1);
        self
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn ContentAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn variation_count(&self) -> usize {
        self.variation_count
    }

    /// Validates a raw request, then runs the pipeline.
    pub fn generate_content(&self, raw: &RawContentRequest) -> Result<GenerationResult, AppError> {
        let request = validate_request(raw)?;
        self.generate(&request)
    }

    /// Runs the pipeline for an already-validated request.
    ///
    /// Steps:
    /// 1. select_content() for indexes 0..N
    /// 2. attach CTA (custom or tone bank) and SEO tags
    /// 3. on a duplicate title or body, retry with a shifted index (best effort)
    /// 4. analyzer.analyze() → AnalysisReport
    pub fn generate(&self, request: &ContentRequest) -> Result<GenerationResult, AppError> {
        let run_id = Uuid::new_v4();
        info!(
            "Generating {} {:?} variations for '{}' (run {run_id})",
            self.variation_count, request.content_type, request.topic
        );

        let mut variations: Vec<ContentVariation> = Vec::with_capacity(self.variation_count);

        for index in 0..self.variation_count {
            let first = build_variation(request, index)?;
            let variation = if is_duplicate(&first, &variations) {
                self.retry_distinct(request, index, &variations)?
                    .unwrap_or_else(|| {
                        warn!(
                            "Variation {} still duplicates an earlier one after {MAX_DEDUP_RETRIES} retries; keeping it",
                            index + 1
                        );
                        first
                    })
            } else {
                first
            };

            debug!(
                "Variation {}: '{}' ({} words, {})",
                index + 1,
                variation.title,
                variation.word_count,
                variation.approach
            );
            variations.push(variation);
        }

        let analysis = self.analyzer.analyze(request, &variations)?;
        info!(
            "Run {run_id} complete: recommended variation {}",
            analysis.recommended_variation + 1
        );

        Ok(GenerationResult {
            run_id,
            generated_at: Utc::now(),
            request: request.clone(),
            variations,
            analysis,
        })
    }

    /// Re-runs the selector at shifted indexes until the output is distinct.
    fn retry_distinct(
        &self,
        request: &ContentRequest,
        index: usize,
        existing: &[ContentVariation],
    ) -> Result<Option<ContentVariation>, AppError> {
        for attempt in 1..=MAX_DEDUP_RETRIES {
            let shifted = index + attempt * self.variation_count;
            let candidate = build_variation(request, shifted)?;
            if !is_duplicate(&candidate, existing) {
                debug!("Variation {} deduplicated with shifted index {shifted}", index + 1);
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

fn build_variation(request: &ContentRequest, index: usize) -> Result<ContentVariation, AppError> {
    let assembled = select_content(request, index)?;

    let cta = match request.call_to_action.as_deref() {
        Some(custom) => custom.to_string(),
        None => tone_cta(request, index)?,
    };

    let tags = if request.include_seo {
        seo_tags(&request.topic)
    } else {
        Vec::new()
    };

    Ok(ContentVariation {
        word_count: count_words(&assembled.content),
        title: assembled.title,
        content: assembled.content,
        headings: assembled.headings,
        cta,
        tags,
        approach: assembled.approach,
        details: assembled.details,
    })
}

fn tone_cta(request: &ContentRequest, index: usize) -> Result<String, AppError> {
    let rotation = Rotation::new(&request.topic, index);
    let template = rotation.pick(voice_for(request.tone).cta_templates, "cta_templates")?;
    // Filter the template before the topic goes in; the topic is never rewritten.
    Ok(plain_language(template, request.target_audience)
        .replace("{focus}", &focus_phrase(&request.topic))
        .replace("{topic}", &request.topic))
}

fn is_duplicate(candidate: &ContentVariation, existing: &[ContentVariation]) -> bool {
    existing
        .iter()
        .any(|v| v.title == candidate.title || v.content == candidate.content)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
