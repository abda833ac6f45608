//! Analyzer: pluggable, trait-based review of a finished set of variations.
//!
//! Default: `RuleBasedAnalyzer` (static rule tables, deterministic, fully testable).
//!
//! `ContentAgent` holds an `Arc<dyn ContentAnalyzer>`, swapped via `with_analyzer`.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::audience::profile_for;
use crate::generation::seo::{merge_keywords, topic_tokens, MAX_TAGS};
use crate::generation::templates::{
    platform_rules, range_for, WordRange, READING_WORDS_PER_MINUTE, SPEAKING_WORDS_PER_MINUTE,
};
use crate::generation::tone::voice_for;
use crate::models::content::{ContentVariation, FormatDetails};
use crate::models::request::{Audience, ContentRequest, ContentType, Platform, Tone};

/// Subject lines longer than this get truncated in most inboxes.
const SUBJECT_LINE_SOFT_LIMIT: usize = 50;

/// Tags shown per variation in the summary table.
const TOP_TAGS_PER_VARIATION: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationSummary {
    /// 1-based, as shown to readers.
    pub index: usize,
    pub title: String,
    pub word_count: usize,
    pub within_target: bool,
    pub cta: String,
    pub top_tags: Vec<String>,
    pub reading_time_minutes: usize,
}

/// Full analysis returned alongside the variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub topic: String,
    pub content_type: ContentType,
    pub target_audience: Audience,
    pub tone: Tone,
    pub platform: Platform,
    pub word_range: WordRange,
    pub average_word_count: usize,
    pub variation_summaries: Vec<VariationSummary>,
    /// 0-based index into the variations.
    pub recommended_variation: usize,
    pub recommendation_reason: String,
    pub keywords: Vec<String>,
    pub platform_notes: Vec<String>,
    pub audience_notes: Vec<String>,
    pub next_steps: Vec<String>,
    pub analyzer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching the generator.
pub trait ContentAnalyzer: Send + Sync {
    fn analyze(
        &self,
        request: &ContentRequest,
        variations: &[ContentVariation],
    ) -> Result<AnalysisReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedAnalyzer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Static-rule analyzer. No external signal, same input → same report.
///
/// Algorithm:
/// 1. Summarize each variation (range compliance, reading time, top tags)
/// 2. Recommend the longest in-range variation (ties → lowest index);
///    with none in range, the one closest to the target
/// 3. Keywords = topic tokens + audience and content-type tables, capped at 10
/// 4. Platform/format notes, audience strategy and next steps from rule tables
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedAnalyzer;

impl ContentAnalyzer for RuleBasedAnalyzer {
    fn analyze(
        &self,
        request: &ContentRequest,
        variations: &[ContentVariation],
    ) -> Result<AnalysisReport, AppError> {
        compute_rule_based_analysis(request, variations)
    }
}

fn compute_rule_based_analysis(
    request: &ContentRequest,
    variations: &[ContentVariation],
) -> Result<AnalysisReport, AppError> {
    if variations.is_empty() {
        return Err(AppError::InternalConsistency(
            "analysis requested for an empty variation set".to_string(),
        ));
    }

    let range = range_for(request.content_type, request.word_count);

    let variation_summaries: Vec<VariationSummary> = variations
        .iter()
        .enumerate()
        .map(|(i, v)| VariationSummary {
            index: i + 1,
            title: v.title.clone(),
            word_count: v.word_count,
            within_target: range.contains(v.word_count),
            cta: v.cta.clone(),
            top_tags: v.tags.iter().take(TOP_TAGS_PER_VARIATION).cloned().collect(),
            reading_time_minutes: minutes_at(v.word_count, READING_WORDS_PER_MINUTE),
        })
        .collect();

    let total: usize = variations.iter().map(|v| v.word_count).sum();
    let average_word_count = total / variations.len();

    let (recommended_variation, recommendation_reason) = recommend(variations, range);

    let mut platform_notes = format_notes(request, variations);
    let keywords = if request.include_seo {
        suggest_keywords(request)
    } else {
        platform_notes.push(
            "SEO optimization was turned off, so no keyword suggestions were generated.".to_string(),
        );
        Vec::new()
    };

    Ok(AnalysisReport {
        topic: request.topic.clone(),
        content_type: request.content_type,
        target_audience: request.target_audience,
        tone: request.tone,
        platform: request.platform,
        word_range: range,
        average_word_count,
        variation_summaries,
        recommended_variation,
        recommendation_reason,
        keywords,
        platform_notes,
        audience_notes: audience_notes(request),
        next_steps: next_steps(request.content_type),
        analyzer_backend: "rule_based".to_string(),
    })
}

/// Longest in-range variation wins; ties go to the lowest index.
/// With nothing in range, the variation closest to the target wins.
fn recommend(variations: &[ContentVariation], range: WordRange) -> (usize, String) {
    let mut best_in_range: Option<usize> = None;
    for (i, v) in variations.iter().enumerate() {
        if !range.contains(v.word_count) {
            continue;
        }
        match best_in_range {
            Some(b) if variations[b].word_count >= v.word_count => {}
            _ => best_in_range = Some(i),
        }
    }

    if let Some(i) = best_in_range {
        let reason = format!(
            "Variation {} is the most complete option within the {}-{} word range ({} words).",
            i + 1,
            range.min,
            range.max,
            variations[i].word_count
        );
        return (i, reason);
    }

    let mut closest = 0;
    for (i, v) in variations.iter().enumerate() {
        if range.distance_from_target(v.word_count)
            < range.distance_from_target(variations[closest].word_count)
        {
            closest = i;
        }
    }
    let reason = format!(
        "No variation landed in the {}-{} word range; variation {} is closest to the {}-word target ({} words).",
        range.min,
        range.max,
        closest + 1,
        range.target,
        variations[closest].word_count
    );
    (closest, reason)
}

/// Static keywords per content type, appended after the audience table.
fn content_type_keywords(content_type: ContentType) -> &'static [&'static str] {
    match content_type {
        ContentType::Blog => &["guide", "best practices", "how-to"],
        ContentType::SocialMedia => &["tips", "insights", "community"],
        ContentType::Newsletter => &["weekly", "trends", "updates"],
        ContentType::VideoScript => &["tutorial", "walkthrough", "explained"],
        ContentType::EmailCampaign => &["resources", "toolkit", "offer"],
    }
}

fn suggest_keywords(request: &ContentRequest) -> Vec<String> {
    let with_audience = merge_keywords(
        topic_tokens(&request.topic),
        profile_for(request.target_audience).domain_keywords,
        usize::MAX,
    );
    merge_keywords(
        with_audience,
        content_type_keywords(request.content_type),
        MAX_TAGS,
    )
}

fn format_notes(request: &ContentRequest, variations: &[ContentVariation]) -> Vec<String> {
    let mut notes = Vec::new();

    match request.content_type {
        ContentType::SocialMedia => {
            let rules = platform_rules(request.platform);
            notes.push(rules.fit_note.to_string());
            for (i, v) in variations.iter().enumerate() {
                if let FormatDetails::Social { char_count, .. } = &v.details {
                    if *char_count > rules.char_limit {
                        notes.push(format!(
                            "Variation {} runs {} characters, over the {}-character guideline for {}.",
                            i + 1,
                            char_count,
                            rules.char_limit,
                            request.platform.label()
                        ));
                    }
                }
            }
        }
        ContentType::Blog | ContentType::Newsletter => {
            let longest = variations.iter().map(|v| v.word_count).max().unwrap_or(0);
            notes.push(format!(
                "Estimated reading time: up to {} minutes at {} words per minute.",
                minutes_at(longest, READING_WORDS_PER_MINUTE),
                READING_WORDS_PER_MINUTE
            ));
            notes.push(
                "Break long sections with subheadings and bullet points for skimmability."
                    .to_string(),
            );
        }
        ContentType::VideoScript => {
            for (i, v) in variations.iter().enumerate() {
                notes.push(format!(
                    "Variation {} runs about {} minutes when spoken at {} words per minute.",
                    i + 1,
                    minutes_at(v.word_count, SPEAKING_WORDS_PER_MINUTE),
                    SPEAKING_WORDS_PER_MINUTE
                ));
            }
        }
        ContentType::EmailCampaign => {
            for (i, v) in variations.iter().enumerate() {
                if let FormatDetails::Email { subject_line, .. } = &v.details {
                    let len = subject_line.chars().count();
                    if len > SUBJECT_LINE_SOFT_LIMIT {
                        notes.push(format!(
                            "Variation {} subject line is {len} characters; inboxes often cut off after {SUBJECT_LINE_SOFT_LIMIT}.",
                            i + 1
                        ));
                    }
                }
            }
            notes.push("A/B test subject lines before sending to the full list.".to_string());
        }
    }

    notes
}

fn audience_notes(request: &ContentRequest) -> Vec<String> {
    let profile = profile_for(request.target_audience);
    let voice = voice_for(request.tone);
    vec![
        format!(
            "Address {} interests: {}.",
            request.target_audience.label(),
            profile.interests.join(", ")
        ),
        format!("Acknowledge their pain points: {}.", profile.pain_points.join(", ")),
        format!("Language: {}.", profile.language),
        format!(
            "{} tone: {} ({}).",
            request.tone.label(),
            voice.style,
            voice.communication_style
        ),
        format!("Emphasize {}.", voice.emphasis.to_lowercase()),
        format!("Support claims with {}.", voice.evidence.to_lowercase()),
    ]
}

fn next_steps(content_type: ContentType) -> Vec<String> {
    let specific = match content_type {
        ContentType::Blog => "Add internal links and a meta description before publishing.",
        ContentType::SocialMedia => "Schedule posts for peak engagement hours on the target platform.",
        ContentType::Newsletter => "Send a test issue to a small segment and check rendering.",
        ContentType::VideoScript => "Do a timed table read and mark B-roll cues.",
        ContentType::EmailCampaign => "Set up the send sequence and tracking links.",
    };
    vec![
        "Review and customize the recommended variation for your brand voice.".to_string(),
        "Add specific examples and data relevant to your industry.".to_string(),
        specific.to_string(),
        "Test different CTAs to optimize conversion rates.".to_string(),
        "Monitor engagement and iterate based on performance.".to_string(),
    ]
}

/// Whole minutes at `per_minute` words, rounded up, minimum 1.
fn minutes_at(words: usize, per_minute: usize) -> usize {
    words.div_ceil(per_minute).max(1)
}

impl AnalysisReport {
    /// Renders the report as a standalone Markdown document.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        let _ = writeln!(md, "# Content Analysis: {}", self.topic);
        let _ = writeln!(md);
        let _ = writeln!(md, "**Content Type:** {}", self.content_type.label());
        let _ = writeln!(md, "**Target Audience:** {}", self.target_audience.label());
        let _ = writeln!(md, "**Tone:** {}", self.tone.label());
        if self.content_type == ContentType::SocialMedia {
            let _ = writeln!(md, "**Platform:** {}", self.platform.label());
        }
        let _ = writeln!(
            md,
            "**Word Range:** {}-{} (target {})",
            self.word_range.min, self.word_range.max, self.word_range.target
        );
        let _ = writeln!(md, "**Average Word Count:** {}", self.average_word_count);
        let _ = writeln!(md);

        let _ = writeln!(md, "## Variations");
        let _ = writeln!(md);
        for s in &self.variation_summaries {
            let range_flag = if s.within_target { "in range" } else { "out of range" };
            let _ = writeln!(md, "### Variation {}: {}", s.index, s.title);
            let _ = writeln!(
                md,
                "- Words: {} ({range_flag}), ~{} min read",
                s.word_count, s.reading_time_minutes
            );
            let _ = writeln!(md, "- CTA: {}", s.cta);
            if !s.top_tags.is_empty() {
                let _ = writeln!(md, "- Tags: {}", s.top_tags.join(", "));
            }
            let _ = writeln!(md);
        }

        let _ = writeln!(md, "## Recommendation");
        let _ = writeln!(md);
        let _ = writeln!(
            md,
            "**Use Variation {}.** {}",
            self.recommended_variation + 1,
            self.recommendation_reason
        );
        let _ = writeln!(md);

        if !self.keywords.is_empty() {
            let _ = writeln!(md, "## Keyword Suggestions");
            let _ = writeln!(md);
            let _ = writeln!(md, "{}", self.keywords.join(", "));
            let _ = writeln!(md);
        }

        push_list(&mut md, "Platform & Format Notes", &self.platform_notes);
        push_list(&mut md, "Audience Strategy", &self.audience_notes);

        let _ = writeln!(md, "## Next Steps");
        let _ = writeln!(md);
        for (i, step) in self.next_steps.iter().enumerate() {
            let _ = writeln!(md, "{}. {step}", i + 1);
        }

        md
    }
}

fn push_list(md: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(md, "## {heading}");
    let _ = writeln!(md);
    for item in items {
        let _ = writeln!(md, "- {item}");
    }
    let _ = writeln!(md);
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
