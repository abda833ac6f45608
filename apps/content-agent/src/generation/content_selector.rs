//! Content Selector: assembles one variation body from the template library.
//!
//! A pure function of `(request, variation_index)`: the same pair always yields the
//! same output. Distinct phrasing across variations comes from `Rotation`, an explicit
//! index into every phrase bank, never from hidden state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::generation::audience::{plain_language, profile_for};
use crate::generation::seo::{focus_phrase, hashtags};
use crate::generation::templates::{
    self, platform_rules, range_for, template_for, FormatTemplate, WordRange,
};
use crate::generation::tone::voice_for;
use crate::models::content::{count_words, CampaignKind, FormatDetails};
use crate::models::request::{Audience, ContentRequest, ContentType};

/// Upper bound on padding paragraphs per body. Only very large overrides get near it.
const MAX_EXPANSION_PARAGRAPHS: usize = 400;

/// Bound on the topic-derived rotation offset.
const OFFSET_MODULUS: usize = 10_007;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One assembled body, before the generator attaches a CTA and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledContent {
    pub title: String,
    pub content: String,
    pub headings: Vec<String>,
    pub approach: String,
    pub details: FormatDetails,
    pub range: WordRange,
}

/// Deterministic tie-break for phrase banks.
///
/// Position in a bank of length `n` is `(offset + index + step) % n`, where `offset`
/// is a stable hash of the topic. Consecutive variation indexes therefore land on
/// consecutive bank entries, and different topics start at different entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    offset: usize,
    index: usize,
}

impl Rotation {
    pub fn new(topic: &str, variation_index: usize) -> Self {
        let offset = topic
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize))
            % OFFSET_MODULUS;
        Self {
            offset,
            index: variation_index,
        }
    }

    pub fn position(&self, len: usize, step: usize) -> usize {
        (self.offset + self.index + step) % len.max(1)
    }

    pub fn pick(&self, bank: &'static [&'static str], slot: &str) -> Result<&'static str, AppError> {
        self.pick_step(bank, 0, slot)
    }

    pub fn pick_step(
        &self,
        bank: &'static [&'static str],
        step: usize,
        slot: &str,
    ) -> Result<&'static str, AppError> {
        if bank.is_empty() {
            return Err(AppError::InternalConsistency(format!(
                "phrase bank '{slot}' is empty"
            )));
        }
        Ok(bank[self.position(bank.len(), step)])
    }

    /// Cycles by variation index alone, so the first N variations walk the list in order.
    pub fn cycle<T: Copy>(&self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.index % items.len()])
    }
}

/// Placeholder values for one request and rotation.
///
/// `phrases` come from the template library and pass through the audience's
/// plain-language filter. `request_values` are the caller's own words and are
/// substituted after filtering, so the topic always survives verbatim.
struct Slots {
    phrases: Vec<(&'static str, String)>,
    request_values: Vec<(&'static str, String)>,
    audience: Audience,
}

impl Slots {
    fn build(request: &ContentRequest, rotation: &Rotation) -> Result<Self, AppError> {
        let voice = voice_for(request.tone);
        let profile = profile_for(request.target_audience);

        let pain_1 = rotation.pick(profile.pain_points, "pain_points")?;
        let pain_2 = rotation.pick_step(profile.pain_points, 1, "pain_points")?;

        // Composite slots first: their values contain base placeholders resolved below.
        let phrases = vec![
            ("{hook}", rotation.pick(voice.hooks, "hooks")?.to_string()),
            ("{transition}", rotation.pick(voice.transitions, "transitions")?.to_string()),
            ("{aside}", rotation.pick(voice.asides, "asides")?.to_string()),
            ("{closer}", rotation.pick(voice.closers, "closers")?.to_string()),
            ("{evidence}", voice.evidence.to_string()),
            ("{Pain_1}", pain_1.to_string()),
            ("{Pain_2}", pain_2.to_string()),
            ("{pain_1}", lower_first(pain_1)),
            ("{pain_2}", lower_first(pain_2)),
            ("{interest}", lower_first(rotation.pick(profile.interests, "interests")?)),
            ("{scenario}", rotation.pick(profile.scenarios, "scenarios")?.to_string()),
            ("{language}", profile.language.to_string()),
        ];
        let request_values = vec![
            ("{audience}", request.target_audience.label().to_lowercase()),
            ("{focus}", focus_phrase(&request.topic)),
            ("{topic}", request.topic.clone()),
        ];

        Ok(Self {
            phrases,
            request_values,
            audience: request.target_audience,
        })
    }

    fn fill(&self, template: &str) -> String {
        let phrased = self
            .phrases
            .iter()
            .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value));
        self.request_values.iter().fold(
            plain_language(&phrased, self.audience),
            |acc, (key, value)| acc.replace(key, value),
        )
    }
}

/// Lower-cases the first letter unless the first word is an acronym ("ROI measurement").
fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), text.chars().nth(1)) {
        (Some(first), Some(second)) if second.is_lowercase() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => text.to_string(),
    }
}

struct Block {
    text: String,
    /// Optional blocks are dropped first when a body runs over its range.
    optional: bool,
}

impl Block {
    fn core(text: String) -> Self {
        Self {
            text,
            optional: false,
        }
    }

    fn optional(text: String) -> Self {
        Self {
            text,
            optional: true,
        }
    }
}

/// An unfitted body: ordered blocks, a padding insertion point, and a footer that is
/// never trimmed.
struct Draft {
    title: String,
    approach: &'static str,
    blocks: Vec<Block>,
    expansion_at: usize,
    footer: Option<String>,
    details: FormatDetails,
}

// ────────────────────────────────────────────────────────────────────────────
// Selection
// ────────────────────────────────────────────────────────────────────────────

/// Assembles one content body for a request at a given variation index.
///
/// Steps:
/// 1. Resolve the word range (content-type default, or ±15% around an override)
/// 2. Resolve placeholder slots from tone and audience banks via `Rotation`
/// 3. Build the format-specific draft (title, ordered blocks, footer)
/// 4. Fit the draft into the range: drop optional blocks, pad, truncate
/// 5. Extract markdown headings from the final body
pub fn select_content(
    request: &ContentRequest,
    variation_index: usize,
) -> Result<AssembledContent, AppError> {
    let rotation = Rotation::new(&request.topic, variation_index);
    let template = template_for(request.content_type);
    let range = range_for(request.content_type, request.word_count);
    let slots = Slots::build(request, &rotation)?;

    let mut draft = match request.content_type {
        ContentType::Blog => blog_draft(request, &rotation, &slots)?,
        ContentType::SocialMedia => social_draft(request, &rotation, &slots)?,
        ContentType::Newsletter => newsletter_draft(&rotation, &slots)?,
        ContentType::VideoScript => video_draft(request, &rotation, &slots, range)?,
        ContentType::EmailCampaign => email_draft(&rotation, &slots)?,
    };

    let content = fit_to_range(&mut draft, range, template, &rotation, &slots)?;

    if let FormatDetails::Social { char_count, .. } = &mut draft.details {
        *char_count = content.chars().count();
    }

    debug!(
        "Selected {:?} variation {} ({}): {} words",
        request.content_type,
        variation_index,
        draft.approach,
        count_words(&content)
    );

    Ok(AssembledContent {
        title: draft.title,
        headings: extract_headings(&content),
        content,
        approach: draft.approach.to_string(),
        details: draft.details,
        range,
    })
}

fn section(heading: &str, body: String) -> String {
    format!("{heading}\n\n{body}")
}

fn blog_draft(
    request: &ContentRequest,
    rotation: &Rotation,
    slots: &Slots,
) -> Result<Draft, AppError> {
    const APPROACHES: [&str; 3] = ["pain-point opener", "trend opener", "results opener"];

    let intro_pos = rotation.position(templates::BLOG_INTROS.len(), 0);
    let mut blocks = vec![
        Block::core(slots.fill(templates::BLOG_INTROS[intro_pos])),
        Block::core(section("## The Problem", slots.fill(templates::BLOG_PROBLEM))),
        Block::core(section("## The Solution", slots.fill(templates::BLOG_SOLUTION))),
        Block::core(section("## Key Benefits", slots.fill(templates::BLOG_BENEFITS))),
        Block::core(section(
            "## Implementation",
            slots.fill(templates::BLOG_IMPLEMENTATION),
        )),
    ];
    if request.include_examples {
        let case = rotation.pick(templates::BLOG_CASE_STUDIES, "blog_case_studies")?;
        blocks.push(Block::optional(section(
            "## Real-World Examples",
            slots.fill(case),
        )));
    }
    let expansion_at = blocks.len();
    blocks.push(Block::core(section(
        "## Conclusion",
        slots.fill(templates::BLOG_CONCLUSION),
    )));

    Ok(Draft {
        title: slots.fill(rotation.pick(templates::BLOG_TITLES, "blog_titles")?),
        approach: APPROACHES[intro_pos % APPROACHES.len()],
        blocks,
        expansion_at,
        footer: None,
        details: FormatDetails::Blog,
    })
}

#[derive(Debug, Clone, Copy)]
enum SocialApproach {
    Question,
    Value,
    Story,
}

fn social_draft(
    request: &ContentRequest,
    rotation: &Rotation,
    slots: &Slots,
) -> Result<Draft, AppError> {
    let approach = rotation
        .cycle(&[SocialApproach::Question, SocialApproach::Value, SocialApproach::Story])
        .unwrap_or(SocialApproach::Question);

    let (label, titles, hooks) = match approach {
        SocialApproach::Question => (
            "question",
            templates::SOCIAL_QUESTION_TITLES,
            templates::SOCIAL_QUESTION_HOOKS,
        ),
        SocialApproach::Value => (
            "value",
            templates::SOCIAL_VALUE_TITLES,
            templates::SOCIAL_VALUE_HOOKS,
        ),
        SocialApproach::Story => (
            "story",
            templates::SOCIAL_STORY_TITLES,
            templates::SOCIAL_STORY_HOOKS,
        ),
    };

    let hook = rotation.pick(hooks, "social_hooks")?;
    let context = slots.fill(&templates::SOCIAL_CONTEXT.replace("{hook}", hook));
    let prompt = slots.fill(rotation.pick(templates::SOCIAL_PROMPTS, "social_prompts")?);

    let rules = platform_rules(request.platform);
    let tags = hashtags(&request.topic, rules.hashtag_count);

    let blocks = vec![
        Block::core(context),
        Block::optional(slots.fill(templates::SOCIAL_TAKEAWAYS)),
        Block::core(prompt),
    ];

    Ok(Draft {
        title: slots.fill(rotation.pick(titles, "social_titles")?),
        approach: label,
        blocks,
        expansion_at: 2,
        footer: Some(tags.join(" ")),
        details: FormatDetails::Social {
            platform: request.platform,
            hashtags: tags,
            char_count: 0,
        },
    })
}

fn newsletter_draft(
    rotation: &Rotation,
    slots: &Slots,
) -> Result<Draft, AppError> {
    const APPROACHES: [&str; 3] = ["industry spotlight", "reader spotlight", "trend watch"];

    let trending_pos = rotation.position(templates::NEWSLETTER_TRENDING.len(), 0);
    let postscript = slots.fill(rotation.pick(
        templates::NEWSLETTER_POSTSCRIPTS,
        "newsletter_postscripts",
    )?);

    let blocks = vec![
        Block::core(section(
            "## Welcome to This Week's Issue",
            slots.fill(rotation.pick(templates::NEWSLETTER_INTROS, "newsletter_intros")?),
        )),
        Block::core(section(
            &slots.fill("## Featured Article: {topic}"),
            slots.fill(templates::NEWSLETTER_MAIN),
        )),
        Block::optional(section(
            "## What's Trending",
            slots.fill(templates::NEWSLETTER_TRENDING[trending_pos]),
        )),
        Block::core(section(
            "## Closing Thoughts",
            slots.fill(templates::NEWSLETTER_CLOSING),
        )),
    ];

    Ok(Draft {
        title: slots.fill(rotation.pick(templates::NEWSLETTER_TITLES, "newsletter_titles")?),
        approach: APPROACHES[trending_pos % APPROACHES.len()],
        blocks,
        expansion_at: 3,
        footer: Some(format!("---\nP.S. {postscript}")),
        details: FormatDetails::Newsletter { postscript },
    })
}

fn video_draft(
    request: &ContentRequest,
    rotation: &Rotation,
    slots: &Slots,
    range: WordRange,
) -> Result<Draft, AppError> {
    const APPROACHES: [&str; 3] = ["live demo", "before/after walkthrough", "whiteboard"];

    let title = slots.fill(rotation.pick(templates::VIDEO_TITLES, "video_titles")?);
    let duration_minutes = (range.target / templates::SPEAKING_WORDS_PER_MINUTE).max(1) as u32;
    let demo_pos = rotation.position(templates::VIDEO_DEMONSTRATIONS.len(), 0);

    let header = format!(
        "# Video Script: {title}\n**Duration: ~{duration_minutes} minutes**\n**Target Audience: {}**",
        request.target_audience.label()
    );

    let mut blocks = vec![
        Block::core(header),
        Block::core(format!(
            "## Hook (0-15 seconds)\n{}",
            slots.fill(rotation.pick(templates::VIDEO_HOOKS, "video_hooks")?)
        )),
        Block::core(format!(
            "## Introduction (15-45 seconds)\n{}",
            slots.fill(templates::VIDEO_INTRO)
        )),
        Block::core(format!(
            "## Main Content\n{}",
            slots.fill(templates::VIDEO_MAIN_POINTS)
        )),
    ];
    let expansion_at = blocks.len();
    if request.include_examples {
        blocks.push(Block::optional(format!(
            "## Demonstration/Example\n{}",
            slots.fill(templates::VIDEO_DEMONSTRATIONS[demo_pos])
        )));
    }
    blocks.push(Block::core(format!(
        "## Conclusion\n{}",
        slots.fill(templates::VIDEO_CONCLUSION)
    )));
    blocks.push(Block::core(format!(
        "## Call to Action (final 15 seconds)\n{}",
        slots.fill(rotation.pick(templates::VIDEO_CTA_LINES, "video_cta_lines")?)
    )));

    Ok(Draft {
        title,
        approach: APPROACHES[demo_pos % APPROACHES.len()],
        blocks,
        expansion_at,
        footer: Some(templates::VIDEO_PRODUCTION_NOTES.to_string()),
        details: FormatDetails::VideoScript { duration_minutes },
    })
}

fn email_draft(
    rotation: &Rotation,
    slots: &Slots,
) -> Result<Draft, AppError> {
    let campaign = rotation
        .cycle(&[
            CampaignKind::Welcome,
            CampaignKind::Educational,
            CampaignKind::Promotional,
        ])
        .unwrap_or(CampaignKind::Welcome);

    let (label, titles, subjects, body) = match campaign {
        CampaignKind::Welcome => (
            "welcome",
            templates::EMAIL_WELCOME_TITLES,
            templates::EMAIL_WELCOME_SUBJECTS,
            templates::EMAIL_WELCOME_BODY,
        ),
        CampaignKind::Educational => (
            "educational",
            templates::EMAIL_EDUCATIONAL_TITLES,
            templates::EMAIL_EDUCATIONAL_SUBJECTS,
            templates::EMAIL_EDUCATIONAL_BODY,
        ),
        CampaignKind::Promotional => (
            "promotional",
            templates::EMAIL_PROMOTIONAL_TITLES,
            templates::EMAIL_PROMOTIONAL_SUBJECTS,
            templates::EMAIL_PROMOTIONAL_BODY,
        ),
    };

    let subject_line = slots.fill(rotation.pick(subjects, "email_subjects")?);

    let blocks = vec![
        Block::core(format!("**Subject Line:** {subject_line}")),
        Block::core("---".to_string()),
        Block::core("**Email Body:**".to_string()),
        Block::core(slots.fill(body)),
        Block::core(rotation.pick(templates::EMAIL_SIGN_OFFS, "email_sign_offs")?.to_string()),
    ];

    Ok(Draft {
        title: slots.fill(rotation.pick(titles, "email_titles")?),
        approach: label,
        blocks,
        expansion_at: 4,
        footer: Some(slots.fill(templates::EMAIL_FOOTER)),
        details: FormatDetails::Email {
            subject_line,
            campaign,
        },
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Word-range fitting
// ────────────────────────────────────────────────────────────────────────────

/// Fits a draft into `range` and returns the final body text.
///
/// The footer's words are reserved up front. Over the range: optional blocks are
/// dropped from the end, then the body is truncated at a word boundary. Under the
/// target: padding paragraphs are inserted at `expansion_at` in rotation order.
fn fit_to_range(
    draft: &mut Draft,
    range: WordRange,
    template: &FormatTemplate,
    rotation: &Rotation,
    slots: &Slots,
) -> Result<String, AppError> {
    let footer = draft.footer.take();
    let footer_words = footer.as_deref().map(count_words).unwrap_or(0);
    let body_max = range.max.saturating_sub(footer_words);
    let body_target = range.target.saturating_sub(footer_words);

    let mut words: usize = draft.blocks.iter().map(|b| count_words(&b.text)).sum();

    while words > body_max {
        let Some(idx) = draft.blocks.iter().rposition(|b| b.optional) else {
            break;
        };
        let removed = draft.blocks.remove(idx);
        words -= count_words(&removed.text);
        if idx < draft.expansion_at {
            draft.expansion_at -= 1;
        }
    }

    if words < body_target {
        let pool: Vec<&'static str> = template
            .expansions
            .iter()
            .chain(template.extra_expansions.iter())
            .copied()
            .collect();
        if pool.is_empty() {
            return Err(AppError::InternalConsistency(
                "no expansion paragraphs available for padding".to_string(),
            ));
        }

        let mut insert_at = draft.expansion_at;
        if let Some(heading) = template.expansion_heading {
            draft.blocks.insert(insert_at, Block::core(heading.to_string()));
            words += count_words(heading);
            insert_at += 1;
        }

        let start = rotation.position(pool.len(), 0);
        let mut added = 0;
        while words < body_target && added < MAX_EXPANSION_PARAGRAPHS {
            let text = slots.fill(pool[(start + added) % pool.len()]);
            words += count_words(&text);
            draft.blocks.insert(insert_at, Block::core(text));
            insert_at += 1;
            added += 1;
        }

        if words < body_target {
            warn!(
                "Body still short after {added} padding paragraphs: {words} of {body_target} words"
            );
        }
    }

    let mut body = draft
        .blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    if words > body_max {
        body = truncate_words(&body, body_max);
    }

    Ok(match footer {
        Some(footer) if body.is_empty() => footer,
        Some(footer) => format!("{body}\n\n{footer}"),
        None => body,
    })
}

/// Keeps the first `max_words` whitespace-delimited words, preserving layout, and
/// marks the cut with "..." attached to the last kept word.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    if max_words == 0 {
        return String::new();
    }

    let mut seen = 0;
    let mut in_word = false;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            if seen == max_words {
                return format!("{}...", text[..idx].trim_end());
            }
            seen += 1;
        }
    }
    text.to_string()
}

/// Markdown headings (`#`, `##`, ... followed by whitespace) at line start.
pub fn extract_headings(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let rest = line.trim_start_matches('#');
            let hashes = line.len() - rest.len();
            if hashes == 0 || !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let heading = rest.trim();
            (!heading.is_empty()).then(|| heading.to_string())
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::{Choice, Platform, Tone};

    fn make_request(topic: &str, content_type: ContentType) -> ContentRequest {
        ContentRequest {
            topic: topic.to_string(),
            content_type,
            target_audience: Audience::StartupFounders,
            tone: Tone::Professional,
            platform: Platform::General,
            word_count: None,
            call_to_action: None,
            include_seo: true,
            include_examples: true,
        }
    }

    #[test]
    fn test_every_combination_lands_in_range() {
        for &content_type in ContentType::ALL {
            for &audience in Audience::ALL {
                for &tone in Tone::ALL {
                    let mut request = make_request("Remote Work Best Practices", content_type);
                    request.target_audience = audience;
                    request.tone = tone;
                    for index in 0..3 {
                        let assembled = select_content(&request, index).unwrap();
                        let words = count_words(&assembled.content);
                        assert!(
                            assembled.range.contains(words),
                            "{content_type:?}/{audience:?}/{tone:?}#{index}: {words} words outside {:?}",
                            assembled.range
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_blog_range_is_documented_range() {
        let assembled = select_content(&make_request("AI Innovation", ContentType::Blog), 0).unwrap();
        assert_eq!(assembled.range, WordRange::new(500, 650, 800));
    }

    #[test]
    fn test_same_index_is_deterministic() {
        let request = make_request("AI Innovation", ContentType::Newsletter);
        assert_eq!(
            select_content(&request, 1).unwrap(),
            select_content(&request, 1).unwrap()
        );
    }

    #[test]
    fn test_consecutive_indexes_produce_distinct_titles_and_content() {
        for &content_type in ContentType::ALL {
            let request = make_request("Remote Work Best Practices", content_type);
            let outputs: Vec<_> = (0..3).map(|i| select_content(&request, i).unwrap()).collect();
            for i in 0..3 {
                for j in (i + 1)..3 {
                    assert_ne!(outputs[i].title, outputs[j].title, "{content_type:?} titles");
                    assert_ne!(outputs[i].content, outputs[j].content, "{content_type:?} content");
                }
            }
        }
    }

    #[test]
    fn test_topic_appears_in_title_and_body() {
        let request = make_request("Remote Work Best Practices", ContentType::Blog);
        let assembled = select_content(&request, 0).unwrap();
        assert!(assembled.title.contains("Remote Work Best Practices"));
        assert!(assembled.content.contains("Remote Work Best Practices"));
    }

    #[test]
    fn test_no_unresolved_placeholders() {
        for &content_type in ContentType::ALL {
            for &tone in Tone::ALL {
                let mut request = make_request("AI Innovation", content_type);
                request.tone = tone;
                for index in 0..3 {
                    let assembled = select_content(&request, index).unwrap();
                    assert!(
                        !assembled.content.contains('{') && !assembled.title.contains('{'),
                        "{content_type:?}/{tone:?}#{index} left a placeholder"
                    );
                }
            }
        }
    }

    #[test]
    fn test_social_ends_with_hashtags() {
        let mut request = make_request("AI Innovation", ContentType::SocialMedia);
        request.platform = Platform::Linkedin;
        let assembled = select_content(&request, 0).unwrap();
        let last_line = assembled.content.lines().last().unwrap();
        assert!(last_line.starts_with('#'));
        match &assembled.details {
            FormatDetails::Social {
                platform,
                hashtags,
                char_count,
            } => {
                assert_eq!(*platform, Platform::Linkedin);
                assert_eq!(hashtags.len(), 4);
                assert_eq!(*char_count, assembled.content.chars().count());
            }
            other => panic!("expected social details, got {other:?}"),
        }
    }

    #[test]
    fn test_social_approaches_rotate() {
        let request = make_request("AI Innovation", ContentType::SocialMedia);
        let approaches: Vec<_> = (0..3)
            .map(|i| select_content(&request, i).unwrap().approach)
            .collect();
        assert_eq!(approaches, vec!["question", "value", "story"]);
    }

    #[test]
    fn test_email_campaign_kinds_rotate() {
        let request = make_request("AI Innovation", ContentType::EmailCampaign);
        let kinds: Vec<_> = (0..3)
            .map(|i| match select_content(&request, i).unwrap().details {
                FormatDetails::Email { campaign, .. } => campaign,
                other => panic!("expected email details, got {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                CampaignKind::Welcome,
                CampaignKind::Educational,
                CampaignKind::Promotional
            ]
        );
    }

    #[test]
    fn test_email_keeps_footer() {
        let request = make_request("AI Innovation", ContentType::EmailCampaign);
        let assembled = select_content(&request, 2).unwrap();
        assert!(assembled.content.starts_with("**Subject Line:**"));
        assert!(assembled.content.contains("Unsubscribe | Update preferences"));
    }

    #[test]
    fn test_video_script_has_duration_and_production_notes() {
        let request = make_request("AI Innovation", ContentType::VideoScript);
        let assembled = select_content(&request, 0).unwrap();
        assert!(assembled.content.starts_with("# Video Script:"));
        assert!(assembled.content.contains("**Duration: ~8 minutes**"));
        assert!(assembled.content.ends_with("background music at low volume"));
        assert_eq!(
            assembled.details,
            FormatDetails::VideoScript {
                duration_minutes: 8
            }
        );
        assert!(assembled.headings.contains(&"Production Notes".to_string()));
    }

    #[test]
    fn test_blog_without_examples_omits_case_study() {
        let mut request = make_request("AI Innovation", ContentType::Blog);
        request.include_examples = false;
        let assembled = select_content(&request, 0).unwrap();
        assert!(!assembled.headings.contains(&"Real-World Examples".to_string()));
        assert!(assembled.range.contains(count_words(&assembled.content)));
    }

    #[test]
    fn test_blog_headings_in_order() {
        let assembled = select_content(&make_request("AI Innovation", ContentType::Blog), 0).unwrap();
        let problem = assembled.headings.iter().position(|h| h == "The Problem");
        let conclusion = assembled.headings.iter().position(|h| h == "Conclusion");
        assert!(problem.is_some() && conclusion.is_some());
        assert!(problem < conclusion);
        assert_eq!(assembled.headings.last().map(String::as_str), Some("Conclusion"));
    }

    #[test]
    fn test_general_audience_gets_plain_language() {
        let mut request = make_request("AI Innovation", ContentType::Blog);
        request.target_audience = Audience::GeneralAudience;
        for index in 0..3 {
            let assembled = select_content(&request, index).unwrap();
            assert!(!assembled.content.contains("KPIs"));
            assert!(!assembled.content.contains("stakeholders"));
        }
    }

    #[test]
    fn test_general_audience_keeps_topic_verbatim() {
        let mut request = make_request("ROI Tracking", ContentType::SocialMedia);
        request.target_audience = Audience::GeneralAudience;
        request.platform = Platform::Linkedin;
        for index in 0..3 {
            let assembled = select_content(&request, index).unwrap();
            assert!(assembled.content.contains("ROI Tracking"), "variation {index}");
            let FormatDetails::Social { hashtags, .. } = &assembled.details else {
                panic!("expected social details");
            };
            assert_eq!(assembled.content.lines().last().unwrap(), hashtags.join(" "));
            assert_eq!(hashtags[0], "#ROITracking");
        }

        let mut blog = make_request("How to leverage AI", ContentType::Blog);
        blog.target_audience = Audience::GeneralAudience;
        let assembled = select_content(&blog, 0).unwrap();
        assert!(assembled.content.contains("How to leverage AI"));
        assert!(!assembled.content.contains("KPIs"));
    }

    #[test]
    fn test_word_count_override_shrinks_range() {
        let mut request = make_request("AI Innovation", ContentType::Blog);
        request.word_count = Some(300);
        let assembled = select_content(&request, 0).unwrap();
        let words = count_words(&assembled.content);
        assert_eq!(assembled.range, WordRange::around(300));
        assert!(assembled.range.contains(words), "{words} words");
    }

    #[test]
    fn test_word_count_override_grows_range() {
        let mut request = make_request("AI Innovation", ContentType::SocialMedia);
        request.word_count = Some(1000);
        let assembled = select_content(&request, 1).unwrap();
        assert!(assembled.range.contains(count_words(&assembled.content)));
        assert!(assembled.content.lines().last().unwrap().starts_with('#'));
    }

    #[test]
    fn test_rotation_positions_are_consecutive() {
        let a = Rotation::new("AI Innovation", 0);
        let b = Rotation::new("AI Innovation", 1);
        assert_eq!((a.position(5, 0) + 1) % 5, b.position(5, 0));
    }

    #[test]
    fn test_rotation_empty_bank_is_internal_error() {
        let rotation = Rotation::new("AI Innovation", 0);
        let err = rotation.pick(&[], "hooks").unwrap_err();
        assert!(matches!(err, AppError::InternalConsistency(_)));
    }

    #[test]
    fn test_rotation_cycle_ignores_topic() {
        let rotation = Rotation::new("anything at all", 4);
        assert_eq!(rotation.cycle(&[1, 2, 3]), Some(2));
        assert_eq!(rotation.cycle::<u8>(&[]), None);
    }

    #[test]
    fn test_truncate_words_preserves_layout() {
        let text = "## Title\n\none two\nthree four";
        assert_eq!(truncate_words(text, 4), "## Title\n\none two...");
        assert_eq!(truncate_words(text, 10), text);
        assert_eq!(truncate_words(text, 0), "");
    }

    #[test]
    fn test_extract_headings_ignores_hashtags() {
        let content = "# Top\nbody\n## Section Two\n#hashtag #another\n###NoSpace";
        assert_eq!(extract_headings(content), vec!["Top", "Section Two"]);
    }

    #[test]
    fn test_lower_first_keeps_acronyms() {
        assert_eq!(lower_first("Rapid growth"), "rapid growth");
        assert_eq!(lower_first("ROI measurement"), "ROI measurement");
    }
}
