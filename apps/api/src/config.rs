use anyhow::{bail, Context, Result};

use crate::compliance::models::ComplianceRules;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub rules: ComplianceRules,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ComplianceRules::default();

        let required_sections = match lookup("REQUIRED_SECTIONS") {
            Some(raw) => parse_section_list(&raw),
            None => defaults.required_sections,
        };

        let rules = ComplianceRules {
            required_sections,
            min_words: parse_or("MIN_WORDS", &lookup, defaults.min_words)?,
            max_words: parse_or("MAX_WORDS", &lookup, defaults.max_words)?,
            pass_threshold: parse_or("PASS_THRESHOLD", &lookup, defaults.pass_threshold)?,
        };

        if rules.min_words > rules.max_words {
            bail!(
                "MIN_WORDS ({}) must not exceed MAX_WORDS ({})",
                rules.min_words,
                rules.max_words
            );
        }
        if !(0.0..=100.0).contains(&rules.pass_threshold) {
            bail!(
                "PASS_THRESHOLD must be between 0 and 100, got {}",
                rules.pass_threshold
            );
        }

        Ok(Config {
            port: parse_or("PORT", &lookup, 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, DEFAULT_MAX_UPLOAD_BYTES)?,
            rules,
        })
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

fn parse_section_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
