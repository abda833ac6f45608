//! Tone calibration: maps the requested tone to its phrase banks.
//!
//! Every bank is `static` and shared read-only across calls. Slots are picked by
//! rotation (see `content_selector::Rotation`), so each bank needs at least as many
//! entries as the default variation count to keep phrasing distinct.
//!
//! Placeholders: `{topic}` is the full topic, `{focus}` the topic with framing
//! words stripped (see `seo::focus_phrase`).

use crate::models::request::Tone;

/// Phrasing and vocabulary calibrated to one tone.
#[derive(Debug)]
pub struct ToneVoice {
    /// How the copy should read.
    pub style: &'static str,
    pub emphasis: &'static str,
    /// Kind of evidence this tone leans on; used as a lead-in before figures.
    pub evidence: &'static str,
    pub communication_style: &'static str,
    pub hooks: &'static [&'static str],
    pub transitions: &'static [&'static str],
    pub asides: &'static [&'static str],
    pub closers: &'static [&'static str],
    pub cta_templates: &'static [&'static str],
}

static PROFESSIONAL: ToneVoice = ToneVoice {
    style: "Clear, authoritative, and industry-specific language",
    emphasis: "Expertise, credibility, and measurable results",
    evidence: "Industry statistics, case studies, and technical data",
    communication_style: "authoritative, credible, data-driven",
    hooks: &[
        "In today's fast-paced business environment, {topic} has emerged as a critical factor for success.",
        "Organizations that treat {focus} as a strategic capability consistently outperform those that treat it as an afterthought.",
        "The data is unambiguous: {focus} now separates market leaders from the organizations struggling to keep pace.",
        "Few operational decisions carry as much long-term weight as how a team approaches {focus}.",
    ],
    transitions: &[
        "With that foundation in place, consider the operational implications.",
        "The next question is how to translate these principles into measurable outcomes.",
        "This leads directly to the practical considerations that determine success.",
        "Against that backdrop, the path forward becomes considerably clearer.",
    ],
    asides: &[
        "Benchmarks across comparable organizations point in the same direction.",
        "Leading teams document these results quarter over quarter.",
        "Measured against baseline metrics, the improvement is rarely marginal.",
        "Decision makers increasingly cite this as a board-level priority.",
    ],
    closers: &[
        "The organizations that act decisively on {focus} today will define the standard others follow tomorrow.",
        "A disciplined, metrics-driven approach to {focus} remains one of the most reliable investments available.",
        "Treat {focus} as a long-term capability, and the returns compound year over year.",
    ],
    cta_templates: &[
        "Ready to implement {focus} in your organization? Start with our free assessment tool.",
        "Schedule a consultation to benchmark your {focus} strategy against industry leaders.",
        "Download our {focus} implementation framework and begin measuring results this quarter.",
        "Request the full {focus} report to see how leading organizations structure their programs.",
    ],
};

static CONVERSATIONAL: ToneVoice = ToneVoice {
    style: "Friendly, accessible language with personal anecdotes",
    emphasis: "Relatability, story-telling, and personal experiences",
    evidence: "Personal stories, relatable scenarios, and everyday situations",
    communication_style: "friendly, accessible, personal",
    hooks: &[
        "You've probably heard about {topic}, but have you ever stopped to think about what it really means for you?",
        "Let's be honest: {focus} can feel overwhelming at first. It did for us too.",
        "Grab a coffee, because we need to talk about {focus}.",
        "A friend asked me last week why everyone keeps talking about {focus}, and it got me thinking.",
    ],
    transitions: &[
        "So where does that leave us? Let's walk through it together.",
        "Here's the thing, though: knowing that is only half the story.",
        "Now, this is where it gets interesting.",
        "Okay, so what does this look like in real life?",
    ],
    asides: &[
        "We've all been there, and there's no shame in it.",
        "Honestly, this was the part that surprised me most.",
        "If that sounds familiar, you're in good company.",
        "It's one of those things that seems obvious in hindsight.",
    ],
    closers: &[
        "At the end of the day, {focus} is about people, and you already know more about that than you think.",
        "Start small, stay curious, and let {focus} grow with you.",
        "You don't need to have it all figured out. You just need to take the first step with {focus}.",
    ],
    cta_templates: &[
        "What's your experience with {focus}? Share your story in the comments, we'd love to hear it.",
        "Want more stories like this about {focus}? Join our community and say hi.",
        "Give one of these {focus} ideas a try this week, then tell us how it went.",
        "Know someone wrestling with {focus}? Send this their way.",
    ],
};

static PERSUASIVE: ToneVoice = ToneVoice {
    style: "Compelling arguments with emotional and logical appeals",
    emphasis: "Benefits, urgency, and transformation",
    evidence: "Before and after scenarios, success stories, and compelling statistics",
    communication_style: "compelling, benefit-focused, action-oriented",
    hooks: &[
        "Every week you postpone {focus}, your competitors gain ground you may never recover.",
        "What if {topic} could transform the way you work in the next ninety days?",
        "The teams winning right now share one decision in common: they committed to {focus}.",
        "Imagine looking back a year from now, knowing {focus} was the turning point.",
    ],
    transitions: &[
        "But here's what most people miss.",
        "And that's exactly why waiting is the most expensive option.",
        "The good news? You can start today.",
        "Now picture the difference this makes for your team.",
    ],
    asides: &[
        "The cost of inaction is rising every quarter.",
        "Those who moved early are already reaping the rewards.",
        "This is the advantage your competitors hope you overlook.",
        "The gap between leaders and laggards widens every month.",
    ],
    closers: &[
        "The question isn't whether to embrace {focus}, but how quickly you can get started.",
        "Your future self will thank you for acting on {focus} today.",
        "The window of opportunity for {focus} is open now. Don't let it close on you.",
    ],
    cta_templates: &[
        "Transform your results with {focus}. Claim your free strategy session today.",
        "Don't fall behind: start your {focus} transformation now and see results within weeks.",
        "Secure your spot in our {focus} accelerator before enrollment closes.",
        "Take the first step toward {focus} success. Get started in under five minutes.",
    ],
};

static INFORMATIVE: ToneVoice = ToneVoice {
    style: "Educational, clear explanations with structured information",
    emphasis: "Learning, understanding, and comprehensive coverage",
    evidence: "Step-by-step guides, detailed explanations, and comprehensive lists",
    communication_style: "educational, clear, comprehensive",
    hooks: &[
        "This guide explains what {topic} is, why it matters, and how to apply it step by step.",
        "Understanding {focus} starts with a few core concepts, each of which builds on the last.",
        "Before adopting {focus}, it helps to know how the pieces fit together.",
        "{topic} is widely discussed but often misunderstood, so let's start from first principles.",
    ],
    transitions: &[
        "The next section builds on this foundation.",
        "With the core concepts defined, we can look at how they apply in practice.",
        "To put this in context, consider the following breakdown.",
        "Each of these points connects to the practical steps below.",
    ],
    asides: &[
        "Definitions matter here, because terminology varies between teams.",
        "This distinction is worth remembering for later sections.",
        "A simple checklist often captures the essentials.",
        "Most common mistakes trace back to skipping this step.",
    ],
    closers: &[
        "With these fundamentals, you have a solid framework for applying {focus} in your own context.",
        "Revisit each step as your understanding of {focus} deepens, because the details reward attention.",
        "Mastery of {focus} comes from applying these concepts consistently and reviewing the results.",
    ],
    cta_templates: &[
        "Want to learn more about {focus}? Download our comprehensive guide today.",
        "Explore our step-by-step {focus} tutorials to deepen your understanding.",
        "Subscribe for the next lesson in our {focus} learning series.",
        "Get the free {focus} checklist and apply these steps with confidence.",
    ],
};

static HUMOROUS: ToneVoice = ToneVoice {
    style: "Witty, light-hearted language with appropriate humor",
    emphasis: "Entertainment, engagement, and memorable content",
    evidence: "Funny analogies, wordplay, and entertaining scenarios",
    communication_style: "entertaining, engaging, memorable",
    hooks: &[
        "Let's talk about {topic}, the topic that sounds boring until it quietly saves your week.",
        "{focus} walks into a meeting. Nobody laughs, but everybody takes notes.",
        "If {focus} were a houseplant, most teams would have overwatered it by now.",
        "Confession: the first time I heard about {focus}, I nodded like I understood. I did not.",
    ],
    transitions: &[
        "Stay with me, this part has a plot twist.",
        "Now for the bit nobody puts on a motivational poster.",
        "Plot twist: it actually gets easier from here.",
        "And now, the moment you've been politely waiting for.",
    ],
    asides: &[
        "Yes, really. We checked twice.",
        "No spreadsheets were harmed in the making of this insight.",
        "Think of it as flossing for your workflow.",
        "It's like assembling furniture, except the instructions actually help.",
    ],
    closers: &[
        "So go forth and conquer {focus}. Snacks are optional but strongly recommended.",
        "{focus}: less scary than it looks, more useful than it sounds.",
        "Remember, even experts at {focus} started by googling the basics.",
    ],
    cta_templates: &[
        "Ready to make {focus} less painful? Join the fun and sign up today.",
        "Laughed, learned, or both? Subscribe for more {focus} wisdom with fewer buzzwords.",
        "Share this with the colleague who still thinks {focus} is a type of cheese.",
        "Grab our {focus} survival kit. Sense of humor included.",
    ],
};

/// Returns the phrase banks for a tone.
pub fn voice_for(tone: Tone) -> &'static ToneVoice {
    match tone {
        Tone::Professional => &PROFESSIONAL,
        Tone::Conversational => &CONVERSATIONAL,
        Tone::Persuasive => &PERSUASIVE,
        Tone::Informative => &INFORMATIVE,
        Tone::Humorous => &HUMOROUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::Choice;

    #[test]
    fn test_every_tone_has_enough_phrasing_for_three_variations() {
        for &tone in Tone::ALL {
            let v = voice_for(tone);
            assert!(v.hooks.len() >= 3, "{tone:?} hooks");
            assert!(v.transitions.len() >= 3, "{tone:?} transitions");
            assert!(v.asides.len() >= 3, "{tone:?} asides");
            assert!(v.closers.len() >= 3, "{tone:?} closers");
            assert!(v.cta_templates.len() >= 3, "{tone:?} ctas");
        }
    }

    #[test]
    fn test_cta_templates_reference_the_topic() {
        for &tone in Tone::ALL {
            for cta in voice_for(tone).cta_templates {
                assert!(cta.contains("{focus}"), "CTA without topic slot: {cta}");
            }
        }
    }

    #[test]
    fn test_cta_banks_are_distinct_within_a_tone() {
        for &tone in Tone::ALL {
            let ctas = voice_for(tone).cta_templates;
            let mut unique: Vec<_> = ctas.to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), ctas.len(), "{tone:?} repeats a CTA");
        }
    }

    #[test]
    fn test_persuasive_emphasizes_urgency() {
        assert!(voice_for(Tone::Persuasive).emphasis.contains("urgency"));
    }

    #[test]
    fn test_humorous_style_is_light_hearted() {
        assert!(voice_for(Tone::Humorous).style.contains("light-hearted"));
    }
}
