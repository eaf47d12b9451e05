use anyhow::{Context, Result};

use crate::skills::extractor::ExtractionMode;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub cors_allowed_origin: String,
    /// Upper bound on internships accepted by a single ranking request.
    pub max_candidates: usize,
    pub skill_extraction_mode: ExtractionMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8001,
            rust_log: "info".to_string(),
            cors_allowed_origin: "http://localhost:3000".to_string(),
            max_candidates: 1000,
            skill_extraction_mode: ExtractionMode::Substring,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: match optional_env("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            max_candidates: match optional_env("MAX_CANDIDATES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_CANDIDATES must be a non-negative integer")?,
                None => defaults.max_candidates,
            },
            skill_extraction_mode: match optional_env("SKILL_EXTRACTION_MODE") {
                Some(v) => v
                    .parse::<ExtractionMode>()
                    .context("SKILL_EXTRACTION_MODE is invalid")?,
                None => defaults.skill_extraction_mode,
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
