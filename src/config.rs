use std::env;

use anyhow::{Context, Result};

use crate::keywords::summarizer::DEFAULT_TOP_N;
use crate::string_db::client::DEFAULT_STRING_API_URL;

/// Caller identity sent with enrichment requests when none is configured.
pub const DEFAULT_CALLER_IDENTITY: &str = "enrich-radar";

/// Central configuration loaded from environment variables.
///
/// Everything has a default, so the tool runs without a .env file. The
/// .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// STRING API base URL (defaults to the versioned 11.5 endpoint)
    pub string_api_url: String,
    /// Identifies this tool to STRING in enrichment requests
    pub caller_identity: String,
    /// Number of keywords shown on each radar chart
    pub top_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            string_api_url: DEFAULT_STRING_API_URL.to_string(),
            caller_identity: DEFAULT_CALLER_IDENTITY.to_string(),
            top_words: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let top_words = match lookup("ENRICH_TOP_WORDS") {
            Some(raw) => parse_top_words(&raw)?,
            None => defaults.top_words,
        };

        Ok(Self {
            string_api_url: lookup("STRING_API_URL").unwrap_or(defaults.string_api_url),
            caller_identity: lookup("STRING_CALLER_IDENTITY")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.caller_identity),
            top_words,
        })
    }
}

fn parse_top_words(raw: &str) -> Result<usize> {
    let n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("ENRICH_TOP_WORDS must be a positive integer, got '{raw}'"))?;
    if n == 0 {
        anyhow::bail!("ENRICH_TOP_WORDS must be at least 1");
    }
    Ok(n)
}
