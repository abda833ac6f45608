//! Template library: structural templates and phrase banks per content type.
//!
//! Pure data. The selector resolves placeholders; nothing here has behavior beyond lookup.
//!
//! Placeholders resolved by the selector:
//! `{topic}` `{focus}` `{audience}` `{pain_1}` `{pain_2}` (`{Pain_1}` `{Pain_2}` keep the
//! profile's capitalization) `{interest}` `{scenario}`
//! `{evidence}` `{hook}` `{transition}` `{aside}` `{closer}` `{language}`.

use serde::{Deserialize, Serialize};

use crate::models::request::{ContentType, Platform};

// ────────────────────────────────────────────────────────────────────────────
// Word ranges
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive word-count range a variation body is fitted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRange {
    pub min: usize,
    pub target: usize,
    pub max: usize,
}

impl WordRange {
    pub const fn new(min: usize, target: usize, max: usize) -> Self {
        Self { min, target, max }
    }

    /// Range used for a caller-supplied length override: target ±15%.
    pub fn around(target: usize) -> Self {
        Self {
            min: target * 85 / 100,
            target,
            max: target * 115 / 100,
        }
    }

    pub fn contains(&self, words: usize) -> bool {
        (self.min..=self.max).contains(&words)
    }

    pub fn distance_from_target(&self, words: usize) -> usize {
        words.abs_diff(self.target)
    }
}

/// Structural template for one content type.
#[derive(Debug)]
pub struct FormatTemplate {
    pub range: WordRange,
    /// Heading placed above padding paragraphs, when the format uses one.
    pub expansion_heading: Option<&'static str>,
    /// Padding paragraphs, used in rotation until the body reaches the target.
    pub expansions: &'static [&'static str],
    /// Drawn after `expansions` when a long body needs more padding.
    pub extra_expansions: &'static [&'static str],
}

pub fn template_for(content_type: ContentType) -> &'static FormatTemplate {
    match content_type {
        ContentType::Blog => &BLOG,
        ContentType::SocialMedia => &SOCIAL,
        ContentType::Newsletter => &NEWSLETTER,
        ContentType::VideoScript => &VIDEO,
        ContentType::EmailCampaign => &EMAIL,
    }
}

/// Effective range for a request: the content type's default, or ±15% around an override.
pub fn range_for(content_type: ContentType, word_count: Option<u32>) -> WordRange {
    word_count
        .map(|w| WordRange::around(w as usize))
        .unwrap_or(template_for(content_type).range)
}

/// Spoken words per minute used for video duration estimates.
pub const SPEAKING_WORDS_PER_MINUTE: usize = 150;

/// Silent reading words per minute used for reading-time estimates.
pub const READING_WORDS_PER_MINUTE: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Platform rules (social_media only)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct PlatformRules {
    /// Recommended maximum post length in characters.
    pub char_limit: usize,
    pub hashtag_count: usize,
    pub fit_note: &'static str,
}

pub fn platform_rules(platform: Platform) -> &'static PlatformRules {
    match platform {
        Platform::Twitter => &PlatformRules {
            char_limit: 280,
            hashtag_count: 2,
            fit_note: "Twitter posts cap at 280 characters; publish longer variations as a thread.",
        },
        Platform::Linkedin => &PlatformRules {
            char_limit: 700,
            hashtag_count: 4,
            fit_note: "LinkedIn collapses posts behind 'see more' early; keep the hook in the first two lines.",
        },
        Platform::Facebook => &PlatformRules {
            char_limit: 500,
            hashtag_count: 3,
            fit_note: "Facebook favors shorter posts; pair the variation with an image or link preview.",
        },
        Platform::Instagram => &PlatformRules {
            char_limit: 2200,
            hashtag_count: 8,
            fit_note: "Instagram captions allow 2,200 characters; lead with the hook and keep hashtags at the end.",
        },
        Platform::General => &PlatformRules {
            char_limit: 300,
            hashtag_count: 5,
            fit_note: "No platform selected; trim to the target network's limits before posting.",
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blog
// ────────────────────────────────────────────────────────────────────────────

static BLOG: FormatTemplate = FormatTemplate {
    range: WordRange::new(500, 650, 800),
    expansion_heading: Some("## Going Deeper"),
    expansions: SHARED_EXPANSIONS,
    extra_expansions: &[],
};

pub const BLOG_TITLES: &[&str] = &[
    "The Ultimate Guide to {topic}",
    "Why {topic} Matters More Than You Think",
    "Transforming Your Business with {topic}: A Complete Guide",
    "The Hidden Benefits of {topic} You Need to Know",
    "Mastering {topic}: From Beginner to Expert",
];

pub const BLOG_INTROS: &[&str] = &[
    "{hook} Whether you're dealing with {pain_1} or {pain_2}, understanding {focus} can be the game-changer your organization needs. In this article we break down the problem, the solution, and the practical steps that turn good intentions into lasting results.",
    "{hook} For anyone focused on {interest}, this isn't just another trend. It's a fundamental shift that can change how you operate, how you plan, and how you measure progress. Here's what you need to know.",
    "{hook} The companies that get {focus} right see improvements across almost every metric that matters. But most people miss the real lesson: it's not just about the technology or methodology, it's about the mindset that makes it all possible.",
];

pub const BLOG_PROBLEM: &str = "Traditional approaches to {focus} often fall short because they fail to address fundamental challenges:

- **{Pain_1}**: Most organizations struggle here because they lack a systematic approach
- **{Pain_2}**: Without a plan, this quickly overwhelms even experienced teams
- **Competing Priorities**: Limited time and attention create bottlenecks that stall progress

{aside} These challenges aren't insurmountable, but they require a strategic, modern approach.";

pub const BLOG_SOLUTION: &str = "The solution lies in adopting a comprehensive {focus} strategy that addresses both immediate needs and long-term objectives.

**Core Principles:**

1. **Strategic Integration**: Blend {focus} into existing workflows instead of bolting it on
2. **Team Alignment**: Ensure everyone understands the value and the implementation plan
3. **Continuous Improvement**: Build mechanisms for ongoing optimization and adaptation

**Implementation Framework:**

- Start with pilot projects to demonstrate quick wins
- Scale proven methods across teams and departments
- Measure progress using established KPIs
- Iterate based on real-world feedback

{transition}";

pub const BLOG_BENEFITS: &str = "**Immediate Benefits:**

- **Improved Efficiency**: Streamlined processes reduce time-to-market by 25-40%
- **Enhanced Quality**: Systematic approaches result in fewer errors and happier customers
- **Cost Reduction**: Automation and optimization typically deliver 15-30% savings

**Long-term Advantages:**

- **Competitive Edge**: Organizations that master {focus} consistently outperform competitors
- **Team Satisfaction**: Clear processes and steady improvement boost engagement
- **Faster Innovation**: Structured frameworks enable quicker experimentation

**ROI Considerations:** {evidence} show that {focus} initiatives commonly return two to four times their cost within eighteen months, which makes them among the most valuable strategic investments available.";

pub const BLOG_IMPLEMENTATION: &str = "**Getting Started:**

1. **Assessment Phase** (Weeks 1-2): Analyze the current state, identify stakeholders, and define success metrics
2. **Planning Phase** (Weeks 3-4): Build a roadmap, allocate resources, and plan communication and training
3. **Execution Phase** (Months 2-6): Run pilots with select teams, monitor progress, and scale what works

**Common Pitfalls to Avoid:**

- **Scope Creep**: Keep the first phase focused on core objectives
- **Insufficient Training**: Invest in education before expecting adoption
- **Inadequate Metrics**: Establish clear measurement from the start
- **Cultural Resistance**: Address change management early and openly";

pub const BLOG_CASE_STUDIES: &[&str] = &[
    "**Case Study: Growing Without Breaking**

Consider {scenario}. After adopting {focus} as part of their growth strategy, they achieved within six months:

- 45% reduction in delivery time
- 60% fewer production incidents
- 35% improvement in customer satisfaction scores

{evidence} like this consistently show that teams embracing {focus} outperform their peers.",
    "**Case Study: From Pilot to Standard Practice**

Picture {scenario}. They started with a single pilot of {focus}, measured everything, and expanded only once the numbers held. The results after two quarters:

- 30% less time spent on manual coordination
- Twice as many experiments shipped per month
- A measurable lift in team morale surveys

The lesson: small, well-measured steps beat grand launches.",
    "**Industry Example: Scaling Up**

Take {scenario}. Rolling out {focus} across every team took patience, but the payoff was clear:

- Significant annual cost savings
- 50% faster feature delivery
- 80% reduction in repetitive manual work

{evidence} point to the same conclusion: consistency matters more than perfection.",
];

pub const BLOG_CONCLUSION: &str = "The evidence is clear: {focus} represents a fundamental shift in how successful organizations operate. Rather than an optional enhancement, it's becoming a competitive necessity.

**Key Takeaways:**

- Strategic implementation delivers measurable results within months, not years
- Success depends on cultural adoption, not just technical implementation
- Continuous improvement is essential for long-term success

{closer}";

// ────────────────────────────────────────────────────────────────────────────
// Social media
// ────────────────────────────────────────────────────────────────────────────

static SOCIAL: FormatTemplate = FormatTemplate {
    range: WordRange::new(150, 200, 250),
    expansion_heading: None,
    expansions: SOCIAL_EXPANSIONS,
    extra_expansions: &[],
};

pub const SOCIAL_QUESTION_TITLES: &[&str] = &["Quick Tip: {topic}", "Let's Talk About {topic}"];
pub const SOCIAL_VALUE_TITLES: &[&str] = &["{topic} Explained", "{topic} in 60 Seconds"];
pub const SOCIAL_STORY_TITLES: &[&str] = &[
    "My Experience with {topic}",
    "What {topic} Taught Me",
];

pub const SOCIAL_QUESTION_HOOKS: &[&str] = &[
    "What's the biggest challenge you face with {focus}? 🤔",
    "Have you tried {focus} in your organization? What worked, and what didn't?",
    "If you could improve one thing about {focus}, what would it be?",
    "What advice would you give someone just starting with {focus}?",
];

pub const SOCIAL_VALUE_HOOKS: &[&str] = &[
    "🚀 {focus} tip: most teams overlook one key principle.",
    "💡 Quick {focus} insight: the difference between success and failure often comes down to one thing.",
    "⚡ {focus} fact: teams that get the basics right see far better results than those chasing tools.",
    "🎯 {focus} strategy: stop focusing on tools and start focusing on habits.",
];

pub const SOCIAL_STORY_HOOKS: &[&str] = &[
    "When we first started with {focus}, we made every mistake in the book 😅",
    "Two years ago, our team was struggling with {focus}. Here's what changed everything.",
    "I used to think {focus} was just another buzzword. Then I saw the results.",
    "The most surprising thing about {focus}? It wasn't what I expected at all.",
];

pub const SOCIAL_CONTEXT: &str = "{hook}

{transition} Talking with {audience} every week, I keep seeing the same pattern: {pain_1} gets in the way long before the tools do. Proper implementation means understanding both the technical and the human side of {focus}.";

pub const SOCIAL_TAKEAWAYS: &str = "Three things that actually work:
✅ Start small and measure one outcome that matters
✅ Make {focus} part of the weekly routine, not a side project
✅ Share wins early so momentum builds across the team

{aside}";

pub const SOCIAL_PROMPTS: &[&str] = &[
    "💬 Share your thoughts below! Learning from each other's experiences helps us all grow.",
    "👇 Drop your best tip in the comments. I read every one.",
    "🔁 Repost if this resonates with your team.",
    "💡 Tag someone who's working on {focus} right now.",
];

pub const SOCIAL_EXPANSIONS: &[&str] = &[
    "Lesson learned: success with {focus} comes from consistent application of proven principles, not flashy tools or overnight transformations.",
    "The teams I admire most treat {focus} as a habit. They review it weekly, adjust quickly, and never wait for a perfect plan.",
    "If {pain_2} is slowing you down, pick one small experiment this week. Momentum beats perfection every single time.",
    "One underrated move: write down what {focus} should change for your customers, then check back in thirty days.",
    "Most setbacks I've seen weren't technical. They came from unclear goals and skipped conversations.",
    "For anyone focused on {interest}, {focus} is one of the highest-leverage places to invest your energy right now.",
];

// ────────────────────────────────────────────────────────────────────────────
// Newsletter
// ────────────────────────────────────────────────────────────────────────────

static NEWSLETTER: FormatTemplate = FormatTemplate {
    range: WordRange::new(500, 600, 700),
    expansion_heading: Some("## Going Further"),
    expansions: SHARED_EXPANSIONS,
    extra_expansions: &[],
};

pub const NEWSLETTER_TITLES: &[&str] = &[
    "Weekly Insights: {topic}",
    "The {topic} Newsletter",
    "Trending: {topic} Update",
    "Deep Dive: {topic}",
];

pub const NEWSLETTER_INTROS: &[&str] = &[
    "In this week's newsletter, we're diving deep into {focus} and its impact on modern work. Whether you're just getting started or optimizing your current approach, this edition has something for you.",
    "Welcome back! This issue is all about {focus}: what's changing, what's working, and what {audience} should watch next.",
    "This week we're unpacking {focus}, a topic many of you asked about after our last issue. Let's get into it.",
];

pub const NEWSLETTER_MAIN: &str = "**Understanding {focus}**

Recent industry data shows that organizations embracing {focus} see significant improvements across multiple metrics:

• 35% faster project completion
• 40% fewer manual errors
• 60% better collaboration across teams

Here's what's interesting: successful implementation isn't just about following a process. It's about building a culture of continuous improvement around {interest}.

**Key Implementation Strategies:**

1. **Start Small**: Begin with pilot projects in select teams
2. **Measure Everything**: Establish clear KPIs before you begin
3. **Communicate Value**: Make sure everyone understands the benefits
4. **Iterate Quickly**: Use feedback loops to refine the approach

{aside} The teams seeing the best results aren't those with the most sophisticated tools. They're the ones with the clearest understanding of what they're trying to achieve.";

pub const NEWSLETTER_TRENDING: &[&str] = &[
    "**Industry Spotlight**: This week we're featuring {scenario}, and how they scaled {focus} in just four months. Their secret? Focusing on people before tooling.

**Quick Question**: What's been your biggest challenge with {focus}? Reply to this email and we'll feature the best insights next week.

**Resource Spotlight**: Our updated {focus} toolkit now includes fifteen proven templates and frameworks.",
    "**Reader Spotlight**: One subscriber shared how {scenario} turned {pain_1} into a strength using {focus}. We'll publish the full story next issue.

**Poll of the Week**: Is {focus} a priority for your team this quarter? Hit reply with yes, no, or maybe.

**On Our Radar**: Three new {focus} case studies worth bookmarking.",
    "**Trend Watch**: More {audience} are putting {focus} on their roadmap than ever before, and {pain_2} is the most common reason why.

**Tool Tip**: Before adopting anything new, map the workflow you already have. It's the fastest route to clarity.

**Community Corner**: Join our monthly {focus} roundtable, open to all subscribers.",
];

pub const NEWSLETTER_CLOSING: &str = "The future belongs to teams that adapt quickly and keep improving. {focus} provides the framework for exactly that kind of transformation.

Whether you're beginning the journey or taking your current approach to the next level, focus on the fundamentals: clear strategy, honest communication, and consistent execution.

{closer}

What questions do you have about {focus}? We'd love to hear from you, just reply to this email.";

pub const NEWSLETTER_POSTSCRIPTS: &[&str] = &[
    "Don't forget: {focus} is a marathon, not a sprint. Celebrate the small wins along the way! 🎉",
    "Forward this issue to a colleague who's thinking about {focus}. They'll thank you.",
    "Next week: the most common {focus} mistakes and how to avoid them. Stay tuned!",
];

// ────────────────────────────────────────────────────────────────────────────
// Video script
// ────────────────────────────────────────────────────────────────────────────

static VIDEO: FormatTemplate = FormatTemplate {
    range: WordRange::new(1000, 1200, 1400),
    expansion_heading: Some("## Deep Dive"),
    expansions: VIDEO_EXPANSIONS,
    extra_expansions: SHARED_EXPANSIONS,
};

pub const VIDEO_TITLES: &[&str] = &[
    "How {topic} is Changing Everything",
    "The Complete Guide to {topic}",
    "{topic}: What You Need to Know",
    "Why {topic} Matters More Than Ever",
];

pub const VIDEO_HOOKS: &[&str] = &[
    "What if I told you that {focus} could transform your work in ways you never imagined? Today I'm sharing the exact framework that's helped dozens of teams achieve remarkable results.",
    "Stop scrolling for a second. If {pain_1} keeps you up at night, the next few minutes about {focus} are for you.",
    "Most people get {focus} wrong in the first week. By the end of this video, you won't be one of them.",
];

pub const VIDEO_INTRO: &str = "Hi everyone! I'm excited to talk about {focus} today, because I've seen firsthand how it can change the way teams operate. In the next few minutes I'll walk you through what {focus} really means, why it matters for {audience}, and most importantly, how you can implement it successfully. {transition}";

pub const VIDEO_MAIN_POINTS: &str = "**Point 1: Understanding the Fundamentals**
{focus} isn't just about process. It's about mindset. The most successful implementations start by understanding why before jumping into how. Ask what problem you're solving, who benefits, and what success looks like in ninety days.

**Point 2: Common Implementation Challenges**
Most teams struggle with three things: resistance to change, unclear objectives, and insufficient training. For {audience}, {pain_1} and {pain_2} usually sit at the heart of it. Name these risks early and they lose most of their power.

[On screen: a simple three-column chart labeled Change, Clarity, Capability]

**Point 3: Building the Right Habits**
Habits outlast enthusiasm. Set a weekly review, keep a short list of metrics, and make progress visible to everyone. {aside}

**Point 4: Measuring What Matters**
Pick one leading indicator and one lagging indicator. Leading indicators tell you whether the work is happening. Lagging indicators tell you whether it's paying off. {evidence} make the case far better than opinions do.

**Point 5: Building Sustainable Success**
Sustainable {focus} requires ongoing commitment and continuous learning. It's not a one-time project. It's an ongoing journey that rewards patience.";

pub const VIDEO_DEMONSTRATIONS: &[&str] = &[
    "Let me show you how this works in practice. Picture {scenario}. [Insert demonstration of {focus} principles in action] Notice how the first change is small and the feedback arrives within days. That's the difference between theory and practice.",
    "Here's a quick walkthrough. Imagine {scenario}. [Screen recording: before and after workflow] On the left, the old way. On the right, the same work with {focus} in place. Watch how many steps simply disappear.",
    "Let's make this concrete. Think about {scenario}. [Whiteboard sketch of the three-phase rollout] Phase one proves value, phase two spreads it, phase three makes it the default.",
];

pub const VIDEO_CONCLUSION: &str = "{focus} isn't just another trend. It's a fundamental shift in how successful teams operate. The people embracing these principles today are building advantages that will serve them for years.

Remember: success comes from consistent application of proven principles, not perfection on day one. {closer}";

pub const VIDEO_CTA_LINES: &[&str] = &[
    "If you found this helpful, like and subscribe for more content like this. And if you're ready to start your {focus} journey, check out the link in the description for our complete starter kit. Thanks for watching!",
    "Drop a comment with your biggest {focus} question and I'll answer the best ones in a follow-up video. Don't forget to subscribe so you don't miss it!",
    "Want the checklist from this video? It's linked below, free. Hit subscribe and I'll see you in the next one on {focus}.",
];

pub const VIDEO_PRODUCTION_NOTES: &str = "## Production Notes
- Include engaging visuals and graphics
- Add subtitles for accessibility
- Use energetic, clear delivery
- Maintain eye contact with camera
- Include relevant background music at low volume";

pub const VIDEO_EXPANSIONS: &[&str] = &[
    "Let's slow down on something most people skip. Before you change anything about {focus}, write down how the work happens today. Not how it should happen, how it actually happens. That one page becomes your baseline, and without a baseline you can't prove that anything improved.",
    "Here's a question I get all the time: how long until {focus} pays off? Honestly, the first signals usually show up within a few weeks. Fewer surprises, faster handoffs, calmer planning meetings. The bigger results take a quarter or two, and that's normal.",
    "Now, a word about tools. Tools matter, but they amplify whatever habits you already have. If the habits are shaky, a new tool just helps you be shaky faster. Fix the habit first, then pick the tool that supports it.",
    "Think about {pain_2} for a moment. It rarely comes from one big failure. It comes from dozens of small decisions nobody revisits. {focus} gives you a regular moment to revisit those decisions, and that's where the real gains hide.",
    "I want to share a pattern I've seen in {scenario}. The first attempt stalled because nobody owned it. The second attempt worked because one person owned the rollout and reported progress every Friday. Ownership turned an idea into results.",
    "Here's a simple exercise you can try after this video. Take a sheet of paper and draw three columns: keep, stop, start. Fill them in for {focus}. It takes ten minutes and almost always surfaces the first experiment worth running.",
    "A quick note for {audience}: you don't need permission to start small. Run a two-week experiment with your own team, share the numbers, and let the results make the argument for you.",
    "Let's talk about communication, because it's where many rollouts quietly fail. Explain what's changing, why it's changing, and what people should do differently on Monday morning. Repeat it more often than feels necessary.",
    "One more thing about measurement. Resist the urge to track twenty metrics. Three is plenty. One that shows effort, one that shows quality, and one that shows the outcome your customers actually notice.",
    "If you remember only one idea from this section, make it this: {focus} is a practice, not a project. Projects end. Practices keep paying dividends for as long as you keep showing up.",
];

// ────────────────────────────────────────────────────────────────────────────
// Email campaign
// ────────────────────────────────────────────────────────────────────────────

static EMAIL: FormatTemplate = FormatTemplate {
    range: WordRange::new(300, 400, 500),
    expansion_heading: None,
    expansions: EMAIL_EXPANSIONS,
    extra_expansions: SHARED_EXPANSIONS,
};

pub const EMAIL_WELCOME_TITLES: &[&str] = &[
    "Welcome to the {topic} Journey",
    "Getting Started with {topic}",
];
pub const EMAIL_EDUCATIONAL_TITLES: &[&str] = &[
    "Understanding {topic}: A Complete Guide",
    "The Science Behind {topic}",
];
pub const EMAIL_PROMOTIONAL_TITLES: &[&str] = &[
    "Transform Your Business with {topic}",
    "{topic}: The Game-Changer You Need",
];

pub const EMAIL_WELCOME_SUBJECTS: &[&str] = &[
    "Welcome to the {focus} Success Hub! 🚀",
    "Getting Started with {focus}: Your Journey Begins Now",
];
pub const EMAIL_EDUCATIONAL_SUBJECTS: &[&str] = &[
    "The Complete Guide to {focus} (Free)",
    "Understanding {focus}: What Everyone Gets Wrong",
];
pub const EMAIL_PROMOTIONAL_SUBJECTS: &[&str] = &[
    "Transform Your Business with {focus}",
    "{focus}: The Secret Your Competitors Don't Know",
];

pub const EMAIL_WELCOME_BODY: &str = "Hi there!

Welcome to our community of {focus} practitioners! 🎉

You've just joined thousands of {audience} who are transforming the way they work through {focus}. {hook}

Here's what you can expect:

✓ Weekly insights and best practices
✓ Exclusive resources and templates
✓ Direct access to our expert team
✓ Member-only webinars and workshops

**Getting Started:**
1. Complete your profile in our member portal
2. Download your welcome package
3. Join our community discussion forum";

pub const EMAIL_EDUCATIONAL_BODY: &str = "Hi,

I wanted to share something important about {focus} that most people miss. {hook}

After looking at hundreds of implementations, a pattern stands out: the successful teams aren't the ones with the biggest budgets or the newest tools. They're the ones that understand the fundamental principles behind {focus}.

**What Sets Successful Teams Apart:**

1. They start with clear objectives, not trendy tools
2. They focus on cultural adoption first, technical implementation second
3. They measure progress continuously and adjust quickly
4. They invest in training and ongoing support

**The 80/20 Rule of {focus}:**
80% of your results come from 20% of the core principles. Master the fundamentals and everything else gets easier.";

pub const EMAIL_PROMOTIONAL_BODY: &str = "Hi [Name],

{hook}

I know that sounds ambitious, but I've seen it happen dozens of times. The secret isn't working harder, it's working smarter with proven frameworks.

**Here's What You Get:**

✅ Our complete {focus} implementation toolkit
✅ Access to our exclusive member community
✅ Personalized consultation with our experts
✅ Ongoing support during your transformation

**Special Offer (Limited Time):**
Everything you need to get started immediately, including proven templates, a video training series, and monthly group coaching calls.";

pub const EMAIL_SIGN_OFFS: &[&str] = &[
    "Best regards,\nThe Team",
    "To your success,\n[Your Name]",
    "Talk soon,\n[Your Name]\n\nP.S. Questions? Just reply to this email. I personally read every response.",
];

pub const EMAIL_FOOTER: &str = "---

**Footer:**
**Need help implementing {focus}?**
Book a free consultation: [your-website.com/consultation]

**Connect with us:** Blog | LinkedIn | Twitter | YouTube

© Your Company Name. All rights reserved.
You received this email because you subscribed to our newsletter.
Unsubscribe | Update preferences";

pub const EMAIL_EXPANSIONS: &[&str] = &[
    "Here's a quick win you can try today: pick one recurring task related to {focus}, time it this week, and look for a single step you can remove. Small changes like this add up faster than you'd expect.",
    "A lot of our members tell us {pain_1} was their biggest hurdle at the start. The good news is that it's also where the first improvements usually show up.",
    "{aside} We've packed everything we've learned about {focus} into resources you can use right away, no fluff and no jargon.",
    "If you're focused on {interest}, you'll find that {focus} connects to almost everything on your plate. That's exactly why we think it's worth your attention.",
    "Over the next few weeks, we'll share practical examples from {scenario}, so you can see what {focus} looks like outside of theory.",
];

// ────────────────────────────────────────────────────────────────────────────
// Shared padding
// ────────────────────────────────────────────────────────────────────────────

pub const SHARED_EXPANSIONS: &[&str] = &[
    "A useful way to think about {focus} is as a set of small, repeatable decisions rather than a single big initiative. Each decision is easy to review, easy to improve, and easy to explain to the rest of the team. Over time those decisions compound into a genuine advantage.",
    "{evidence} also highlight how much context matters. What works for {scenario} may need adjusting elsewhere, so treat every framework as a starting point. Keep the principles, adapt the practices, and let your own results guide the next step.",
    "It's worth pausing on {pain_2}, because it is often the hidden reason {focus} efforts stall. Address it directly: name an owner, agree on a simple metric, and review progress every two weeks until the issue is under control.",
    "Another pattern stands out among teams that succeed with {focus}: they communicate relentlessly. They explain what is changing, why it matters for {interest}, and what everyone should do differently, and they repeat it until it sticks.",
    "Finally, remember that measurement is a means, not an end. Choose a handful of indicators that reflect real outcomes, review them regularly, and retire any metric that no longer changes a decision. {aside}",
    "For {audience}, the most practical starting point is usually the smallest one. Pick a single workflow, apply {focus} for one month, and compare the before and after honestly. The evidence you collect becomes the case for the next step.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::request::Choice;

    #[test]
    fn test_default_ranges_match_documented_targets() {
        assert_eq!(template_for(ContentType::Blog).range, WordRange::new(500, 650, 800));
        assert_eq!(template_for(ContentType::SocialMedia).range.target, 200);
        assert_eq!(template_for(ContentType::Newsletter).range.target, 600);
        assert_eq!(template_for(ContentType::VideoScript).range.target, 1200);
        assert_eq!(template_for(ContentType::EmailCampaign).range.target, 400);
    }

    #[test]
    fn test_every_format_has_expansions() {
        for &ct in ContentType::ALL {
            let t = template_for(ct);
            assert!(!t.expansions.is_empty(), "{ct:?}");
            assert!(t.range.min <= t.range.target && t.range.target <= t.range.max);
        }
    }

    #[test]
    fn test_around_is_fifteen_percent_either_side() {
        let r = WordRange::around(1000);
        assert_eq!(r, WordRange::new(850, 1000, 1150));
        assert!(r.contains(850) && r.contains(1150));
        assert!(!r.contains(849) && !r.contains(1151));
    }

    #[test]
    fn test_range_for_prefers_override() {
        assert_eq!(range_for(ContentType::Blog, None), WordRange::new(500, 650, 800));
        assert_eq!(range_for(ContentType::Blog, Some(200)), WordRange::new(170, 200, 230));
    }

    #[test]
    fn test_distance_from_target() {
        let r = WordRange::new(500, 650, 800);
        assert_eq!(r.distance_from_target(600), 50);
        assert_eq!(r.distance_from_target(700), 50);
    }

    #[test]
    fn test_platform_rules_known_limits() {
        assert_eq!(platform_rules(Platform::Twitter).char_limit, 280);
        assert_eq!(platform_rules(Platform::Instagram).char_limit, 2200);
        assert!(platform_rules(Platform::Linkedin).hashtag_count >= 1);
    }

    #[test]
    fn test_title_banks_cover_three_variations() {
        assert!(BLOG_TITLES.len() >= 3);
        assert!(NEWSLETTER_TITLES.len() >= 3);
        assert!(VIDEO_TITLES.len() >= 3);
    }
}
