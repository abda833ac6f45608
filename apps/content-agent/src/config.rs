use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

use crate::generation::generator::DEFAULT_VARIATION_COUNT;
use crate::output::OutputFormat;

/// CLI configuration loaded from environment variables. Every variable is optional.
/// Command-line flags override these values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub variations: usize,
    pub format: OutputFormat,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let variations = match lookup("CONTENT_AGENT_VARIATIONS") {
            Some(raw) => {
                let count = raw
                    .trim()
                    .parse::<usize>()
                    .context("CONTENT_AGENT_VARIATIONS must be a positive integer")?;
                if count == 0 {
                    bail!("CONTENT_AGENT_VARIATIONS must be at least 1");
                }
                count
            }
            None => DEFAULT_VARIATION_COUNT,
        };

        let format = match lookup("CONTENT_AGENT_FORMAT") {
            Some(raw) => OutputFormat::from_str(raw.trim(), true).map_err(|e| {
                anyhow::anyhow!("CONTENT_AGENT_FORMAT must be text, json or both: {e}")
            })?,
            None => OutputFormat::Text,
        };

        Ok(Config {
            output_dir: lookup("CONTENT_AGENT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("generated_content")),
            variations,
            format,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("generated_content"));
        assert_eq!(config.variations, 3);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("CONTENT_AGENT_OUTPUT_DIR", "/tmp/out"),
            ("CONTENT_AGENT_VARIATIONS", " 5 "),
            ("CONTENT_AGENT_FORMAT", "BOTH"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.variations, 5);
        assert_eq!(config.format, OutputFormat::Both);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_rejects_zero_variations() {
        let err = Config::from_lookup(lookup_from(&[("CONTENT_AGENT_VARIATIONS", "0")])).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_rejects_non_numeric_variations() {
        let err = Config::from_lookup(lookup_from(&[("CONTENT_AGENT_VARIATIONS", "three")])).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Config::from_lookup(lookup_from(&[("CONTENT_AGENT_FORMAT", "yaml")])).is_err());
    }
}
