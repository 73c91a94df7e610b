use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. The
/// service has no external dependencies, so every variable has a
/// default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Acceptance threshold for bullet/entry similarity matching.
    pub match_threshold: f64,
    /// Compare skill names case-insensitively (default: exact match).
    pub case_insensitive_skills: bool,
    /// Entry alignment policy: "id", "positional", or "similarity".
    pub align_strategy: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_threshold: std::env::var("MATCH_THRESHOLD")
                .unwrap_or_else(|_| "0.3".to_string())
                .parse::<f64>()
                .context("MATCH_THRESHOLD must be a number between 0 and 1")?,
            case_insensitive_skills: std::env::var("CASE_INSENSITIVE_SKILLS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            align_strategy: std::env::var("ALIGN_STRATEGY").unwrap_or_else(|_| "id".to_string()),
        })
    }
}
