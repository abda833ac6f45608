//! Output: console summaries and flat-file persistence for one generation run.
//!
//! Files are written once per run and never read back.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::content::{ContentVariation, GenerationResult};

/// Max characters of the topic used in file names.
const SLUG_MAX_CHARS: usize = 20;

/// Characters of body shown per variation in the console summary.
const PREVIEW_CHARS: usize = 200;

const RULE: &str = "==================================================";

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One .txt per variation plus a Markdown analysis
    Text,
    /// A single JSON bundle of the whole run
    Json,
    Both,
}

/// File-name slug: lower-cased, non-alphanumerics as `_`, at most 20 characters.
pub fn topic_slug(topic: &str) -> String {
    topic
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(SLUG_MAX_CHARS)
        .collect()
}

pub fn file_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Writes the run to `dir` (created if absent) and returns the written paths.
pub fn save_generation(
    result: &GenerationResult,
    dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir)?;

    let slug = topic_slug(&result.request.topic);
    let stamp = file_stamp(result.generated_at);
    let mut written = Vec::new();

    if matches!(format, OutputFormat::Text | OutputFormat::Both) {
        for (i, variation) in result.variations.iter().enumerate() {
            let path = dir.join(format!("{slug}_variation_{}_{stamp}.txt", i + 1));
            fs::write(&path, render_variation_file(result, i + 1, variation))?;
            written.push(path);
        }

        let path = dir.join(format!("{slug}_analysis_{stamp}.md"));
        fs::write(&path, result.analysis.to_markdown())?;
        written.push(path);
    }

    if matches!(format, OutputFormat::Json | OutputFormat::Both) {
        let path = dir.join(format!("{slug}_{stamp}.json"));
        fs::write(&path, serde_json::to_string_pretty(result)?)?;
        written.push(path);
    }

    info!(
        "Saved {} files for run {} to {}",
        written.len(),
        result.run_id,
        dir.display()
    );
    Ok(written)
}

/// Plain-text file body for one variation: metadata header, then the content.
pub fn render_variation_file(
    result: &GenerationResult,
    number: usize,
    variation: &ContentVariation,
) -> String {
    let request = &result.request;
    let mut out = String::new();

    let _ = writeln!(out, "CONTENT VARIATION {number}");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Topic: {}", request.topic);
    let _ = writeln!(out, "Type: {}", request.content_type.label());
    let _ = writeln!(out, "Audience: {}", request.target_audience.label());
    let _ = writeln!(out, "Tone: {}", request.tone.label());
    let _ = writeln!(out, "Word Count: {}", variation.word_count);
    let _ = writeln!(out, "Title: {}", variation.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "Call-to-Action: {}", variation.cta);
    let _ = writeln!(out);
    if !variation.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", variation.tags.join(", "));
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "CONTENT:");
    let _ = writeln!(out, "--------------------");
    let _ = writeln!(out, "{}", variation.content);
    let _ = writeln!(out, "{RULE}");

    out
}

/// Console summary: one block per variation with a short preview.
pub fn render_summary(result: &GenerationResult) -> String {
    let mut out = String::new();
    let recommended = result.analysis.recommended_variation;

    let _ = writeln!(
        out,
        "Generated {} variations for '{}' ({})",
        result.variations.len(),
        result.request.topic,
        result.request.content_type.label()
    );
    let _ = writeln!(out, "{RULE}");

    for (i, v) in result.variations.iter().enumerate() {
        let marker = if i == recommended { " [recommended]" } else { "" };
        let preview: String = v.content.chars().take(PREVIEW_CHARS).collect();
        let ellipsis = if v.content.chars().count() > PREVIEW_CHARS { "..." } else { "" };

        let _ = writeln!(out);
        let _ = writeln!(out, "VARIATION {}{marker}", i + 1);
        let _ = writeln!(out, "Title: {}", v.title);
        let _ = writeln!(out, "Word Count: {}", v.word_count);
        let _ = writeln!(out, "Approach: {}", v.approach);
        let _ = writeln!(out, "CTA: {}", v.cta);
        let _ = writeln!(out, "Preview: {preview}{ellipsis}");
    }

    out
}
