//! Keyword extraction: topic tokens, SEO tags and hashtags.
//!
//! Pure string rules. No external signal is consulted.

/// Framing words stripped from the front of a topic to get its focus phrase.
const FRAMING_PREFIXES: &[&str] = &["benefits of ", "the benefits of ", "introduction to ", "the "];

/// Tokens never used as keywords.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "at", "by", "for", "from", "how", "in", "is", "of", "on", "or",
    "our", "the", "to", "vs", "what", "why", "with", "you", "your",
];

/// Tags appended after topic tokens, in order.
const BASE_TAGS: &[&str] = &["technology", "business", "strategy", "innovation", "growth"];

/// Tag list cap.
pub const MAX_TAGS: usize = 10;

/// Returns the core subject of a topic: "Benefits of DevOps for Startups" → "DevOps".
///
/// Falls back to the trimmed topic when stripping would leave nothing.
pub fn focus_phrase(topic: &str) -> String {
    let trimmed = topic.trim();
    let mut focus = trimmed;

    for prefix in FRAMING_PREFIXES {
        let head_matches = focus
            .get(..prefix.len())
            .map(|head| head.eq_ignore_ascii_case(prefix))
            .unwrap_or(false);
        if head_matches {
            focus = &focus[prefix.len()..];
            break;
        }
    }

    if let Some(idx) = focus.find(" for ") {
        focus = &focus[..idx];
    }

    let focus = focus.trim();
    if focus.is_empty() {
        trimmed.to_string()
    } else {
        focus.to_string()
    }
}

/// Lower-cased topic tokens with stop words removed, de-duplicated, in topic order.
pub fn topic_tokens(topic: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for raw in topic.split(|c: char| !(c.is_alphanumeric() || c == '-')) {
        let token = raw.trim_matches('-').to_lowercase();
        if token.chars().count() < 2 || STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// SEO tags: topic tokens first, then the base tag set, capped at `MAX_TAGS`.
pub fn seo_tags(topic: &str) -> Vec<String> {
    merge_keywords(topic_tokens(topic), BASE_TAGS, MAX_TAGS)
}

/// Appends `extra` to `primary` without duplicates, keeping at most `cap` entries.
pub fn merge_keywords(primary: Vec<String>, extra: &[&str], cap: usize) -> Vec<String> {
    let mut merged = primary;
    for &word in extra {
        if !merged.iter().any(|m| m.eq_ignore_ascii_case(word)) {
            merged.push(word.to_string());
        }
    }
    merged.truncate(cap);
    merged
}

/// Hashtags for a social post: a CamelCase tag of the focus phrase, then SEO tags.
///
/// Always returns at least one hashtag; none contain whitespace.
pub fn hashtags(topic: &str, count: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    let camel: String = focus_phrase(topic)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();
    if !camel.is_empty() {
        tags.push(format!("#{camel}"));
    }

    for tag in seo_tags(topic) {
        let compact: String = tag.chars().filter(|c| c.is_alphanumeric()).collect();
        if compact.is_empty() {
            continue;
        }
        let hashtag = format!("#{compact}");
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(&hashtag)) {
            tags.push(hashtag);
        }
    }

    tags.truncate(count.max(1));
    tags
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
