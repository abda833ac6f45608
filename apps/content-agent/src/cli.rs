//! Command-line collaborator: flags, optional interactive menus, printing and saving.
//!
//! Free-text enum values are passed through untouched. `validate_request` is still
//! the only place they are checked.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::generator::ContentAgent;
use crate::models::request::{
    Audience, Choice, ContentType, Platform, RawContentRequest, Tone,
};
use crate::output::{render_summary, save_generation, OutputFormat};

#[derive(Debug, Default, Parser)]
#[command(
    name = "content-agent",
    version,
    about = "Generate blog posts, social posts, newsletters, video scripts and emails from templates"
)]
pub struct Args {
    /// Topic or subject of the content
    #[arg(long)]
    pub topic: Option<String>,

    /// blog | social_media | newsletter | video_script | email_campaign
    #[arg(long)]
    pub content_type: Option<String>,

    /// startup_founders | tech_leads | marketing_professionals | general_audience
    #[arg(long)]
    pub audience: Option<String>,

    /// professional | conversational | persuasive | informative | humorous
    #[arg(long)]
    pub tone: Option<String>,

    /// twitter | linkedin | facebook | instagram | general (social_media only)
    #[arg(long)]
    pub platform: Option<String>,

    /// Target length override (100-5000 words)
    #[arg(long)]
    pub word_count: Option<u32>,

    /// Custom call-to-action used for every variation
    #[arg(long)]
    pub cta: Option<String>,

    #[arg(long)]
    pub no_seo: bool,

    #[arg(long)]
    pub no_examples: bool,

    /// Number of variations, at least 1 (overrides CONTENT_AGENT_VARIATIONS)
    #[arg(long, value_parser = parse_variation_count)]
    pub variations: Option<usize>,

    /// JSON request file; flags override its fields
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Directory for saved files (overrides CONTENT_AGENT_OUTPUT_DIR)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Saved file format (overrides CONTENT_AGENT_FORMAT)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print results without writing files
    #[arg(long)]
    pub no_save: bool,

    /// Suppress the console summary and analysis
    #[arg(long, short)]
    pub quiet: bool,
}

fn parse_variation_count(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(_) => Err(format!("'{raw}' is not a positive integer")),
    }
}

/// Runs one generation from parsed arguments and loaded configuration.
pub fn run(args: Args, config: &Config) -> Result<(), AppError> {
    let base = match &args.request {
        Some(path) => load_request_file(path)?,
        None => RawContentRequest::default(),
    };
    let mut raw = merge_args(base, &args);

    if io::stdin().is_terminal() && needs_prompt(&raw) {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        prompt_missing(&mut raw, &mut input, &mut out)?;
    }

    let agent =
        ContentAgent::new().with_variation_count(args.variations.unwrap_or(config.variations));
    let result = agent.generate_content(&raw)?;

    if !args.quiet {
        println!("{}", render_summary(&result));
        println!("{}", result.analysis.to_markdown());
    }

    if args.no_save {
        debug!("--no-save set; skipping file output");
        return Ok(());
    }

    let dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());
    let written = save_generation(&result, &dir, args.format.unwrap_or(config.format))?;
    if !args.quiet {
        for path in &written {
            println!("Saved {}", path.display());
        }
    }
    info!("Run {} finished", result.run_id);
    Ok(())
}

pub fn load_request_file(path: &std::path::Path) -> Result<RawContentRequest, AppError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Overlays command-line flags on a base request. Set flags always win.
pub fn merge_args(mut raw: RawContentRequest, args: &Args) -> RawContentRequest {
    if args.topic.is_some() {
        raw.topic = args.topic.clone();
    }
    if args.content_type.is_some() {
        raw.content_type = args.content_type.clone();
    }
    if args.audience.is_some() {
        raw.target_audience = args.audience.clone();
    }
    if args.tone.is_some() {
        raw.tone = args.tone.clone();
    }
    if args.platform.is_some() {
        raw.platform = args.platform.clone();
    }
    if args.word_count.is_some() {
        raw.word_count = args.word_count;
    }
    if args.cta.is_some() {
        raw.call_to_action = args.cta.clone();
    }
    if args.no_seo {
        raw.include_seo = Some(false);
    }
    if args.no_examples {
        raw.include_examples = Some(false);
    }
    raw
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

fn needs_prompt(raw: &RawContentRequest) -> bool {
    is_blank(&raw.topic)
        || is_blank(&raw.content_type)
        || is_blank(&raw.target_audience)
        || is_blank(&raw.tone)
}

/// Fills missing required fields from numbered menus.
///
/// Accepts a menu number or a value name; re-prompts on anything else. End of input
/// leaves the field empty so validation reports it as missing.
pub fn prompt_missing<R: BufRead, W: Write>(
    raw: &mut RawContentRequest,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    if is_blank(&raw.topic) {
        raw.topic = prompt_text(input, out, "Topic")?;
    }
    if is_blank(&raw.content_type) {
        raw.content_type =
            prompt_choice(input, out, "Content type", ContentType::label)?.map(str_of);
    }
    if is_blank(&raw.target_audience) {
        raw.target_audience =
            prompt_choice(input, out, "Target audience", Audience::label)?.map(str_of);
    }
    if is_blank(&raw.tone) {
        raw.tone = prompt_choice(input, out, "Tone", Tone::label)?.map(str_of);
    }

    let is_social = raw
        .content_type
        .as_deref()
        .and_then(ContentType::parse)
        .map(|ct| ct == ContentType::SocialMedia)
        .unwrap_or(false);
    if is_social && is_blank(&raw.platform) {
        raw.platform = prompt_choice(input, out, "Platform", Platform::label)?.map(str_of);
    }
    Ok(())
}

fn str_of<T: Choice>(choice: T) -> String {
    choice.as_str().to_string()
}

fn read_trimmed<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;
        match read_trimmed(input)? {
            None => return Ok(None),
            Some(line) if line.is_empty() => writeln!(out, "This field is required.")?,
            Some(line) => return Ok(Some(line)),
        }
    }
}

fn prompt_choice<T, R, W>(
    input: &mut R,
    out: &mut W,
    label: &str,
    display: fn(T) -> &'static str,
) -> Result<Option<T>, AppError>
where
    T: Choice,
    R: BufRead,
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "{label}:")?;
    for (i, option) in T::ALL.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, display(*option))?;
    }

    loop {
        write!(out, "Select {} (1-{}): ", label.to_lowercase(), T::ALL.len())?;
        out.flush()?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(None);
        };

        let by_number = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| T::ALL.get(i).copied());
        if let Some(choice) = by_number.or_else(|| T::parse(&line)) {
            return Ok(Some(choice));
        }
        writeln!(out, "Invalid choice. Enter 1-{} or a name.", T::ALL.len())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_args_parse_flags() {
        let args = Args::try_parse_from([
            "content-agent",
            "--topic",
            "AI Innovation",
            "--content-type",
            "blog",
            "--no-seo",
            "--format",
            "json",
            "--variations",
            "2",
        ])
        .unwrap();
        assert_eq!(args.topic.as_deref(), Some("AI Innovation"));
        assert!(args.no_seo);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.variations, Some(2));
    }

    #[test]
    fn test_zero_variations_flag_is_rejected() {
        assert!(Args::try_parse_from(["content-agent", "--variations", "0"]).is_err());
        assert!(Args::try_parse_from(["content-agent", "--variations", "many"]).is_err());
        let args = Args::try_parse_from(["content-agent", "--variations", "1"]).unwrap();
        assert_eq!(args.variations, Some(1));
    }

    #[test]
    fn test_flags_override_request_file_fields() {
        let base = RawContentRequest::new("From file", "blog", "tech_leads", "informative");
        let args = Args {
            topic: Some("From flag".to_string()),
            no_examples: true,
            ..Args::default()
        };
        let merged = merge_args(base, &args);
        assert_eq!(merged.topic.as_deref(), Some("From flag"));
        assert_eq!(merged.content_type.as_deref(), Some("blog"));
        assert_eq!(merged.include_examples, Some(false));
        assert_eq!(merged.include_seo, None);
    }

    #[test]
    fn test_load_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"topic": "AI Innovation", "content_type": "social_media", "platform": "twitter"}"#,
        )
        .unwrap();
        let raw = load_request_file(&path).unwrap();
        assert_eq!(raw.platform.as_deref(), Some("twitter"));
        assert!(raw.tone.is_none());
    }

    #[test]
    fn test_load_request_file_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_request_file(&path),
            Err(AppError::Serialization(_))
        ));
    }

    #[test]
    fn test_prompt_fills_missing_fields_by_number_and_name() {
        let mut raw = RawContentRequest::default();
        let mut input = Cursor::new("AI Innovation\n2\ntech leads\n5\nlinkedin\n");
        let mut out = Vec::new();

        prompt_missing(&mut raw, &mut input, &mut out).unwrap();

        assert_eq!(raw.topic.as_deref(), Some("AI Innovation"));
        assert_eq!(raw.content_type.as_deref(), Some("social_media"));
        assert_eq!(raw.target_audience.as_deref(), Some("tech_leads"));
        assert_eq!(raw.tone.as_deref(), Some("humorous"));
        assert_eq!(raw.platform.as_deref(), Some("linkedin"));
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("1. Blog Post"));
        assert!(shown.contains("Platform:"));
    }

    #[test]
    fn test_prompt_reprompts_on_invalid_choice() {
        let mut raw = RawContentRequest {
            topic: Some("AI".to_string()),
            target_audience: Some("tech_leads".to_string()),
            tone: Some("professional".to_string()),
            ..RawContentRequest::default()
        };
        let mut input = Cursor::new("9\npodcast\n1\n");
        let mut out = Vec::new();

        prompt_missing(&mut raw, &mut input, &mut out).unwrap();

        assert_eq!(raw.content_type.as_deref(), Some("blog"));
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches("Invalid choice").count(), 2);
        assert!(!shown.contains("Platform:"));
    }

    #[test]
    fn test_prompt_requires_non_blank_topic() {
        let mut raw = RawContentRequest::new("", "blog", "tech_leads", "professional");
        let mut input = Cursor::new("\n   \nRemote Work\n");
        let mut out = Vec::new();

        prompt_missing(&mut raw, &mut input, &mut out).unwrap();

        assert_eq!(raw.topic.as_deref(), Some("Remote Work"));
        assert_eq!(String::from_utf8(out).unwrap().matches("required").count(), 2);
    }

    #[test]
    fn test_prompt_end_of_input_leaves_field_missing() {
        let mut raw = RawContentRequest::default();
        let mut input = Cursor::new("AI Innovation\n");
        let mut out = Vec::new();

        prompt_missing(&mut raw, &mut input, &mut out).unwrap();

        assert_eq!(raw.topic.as_deref(), Some("AI Innovation"));
        assert!(raw.content_type.is_none());
        assert!(needs_prompt(&raw));
    }

    #[test]
    fn test_run_without_save_succeeds() {
        let config = Config::from_lookup(|_| None).unwrap();
        let args = Args {
            topic: Some("AI Innovation".to_string()),
            content_type: Some("email_campaign".to_string()),
            audience: Some("startup_founders".to_string()),
            tone: Some("persuasive".to_string()),
            no_save: true,
            quiet: true,
            ..Args::default()
        };
        run(args, &config).unwrap();
    }

    #[test]
    fn test_run_saves_to_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_lookup(|_| None).unwrap();
        let args = Args {
            topic: Some("AI Innovation".to_string()),
            content_type: Some("newsletter".to_string()),
            audience: Some("tech_leads".to_string()),
            tone: Some("informative".to_string()),
            variations: Some(2),
            output_dir: Some(dir.path().to_path_buf()),
            format: Some(OutputFormat::Json),
            quiet: true,
            ..Args::default()
        };
        run(args, &config).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_run_surfaces_validation_error() {
        let config = Config::from_lookup(|_| None).unwrap();
        let args = Args {
            topic: Some("AI Innovation".to_string()),
            content_type: Some("podcast".to_string()),
            audience: Some("tech_leads".to_string()),
            tone: Some("informative".to_string()),
            no_save: true,
            quiet: true,
            ..Args::default()
        };
        let err = run(args, &config).unwrap_err();
        assert!(err.is_validation());
    }
}
