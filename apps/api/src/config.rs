use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_search_api_key: String,
    pub google_search_engine_id: String,
    pub gemini_api_key: String,
    pub spoonacular_api_key: String,
    pub weather_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_search_api_key: require_env("GOOGLE_SEARCH_API_KEY")?,
            google_search_engine_id: require_env("GOOGLE_SEARCH_ENGINE_ID")?,
            gemini_api_key: require_env("GEMINI_SECRET_KEY")?,
            spoonacular_api_key: require_env("SPOONACULAR_API_KEY")?,
            weather_api_key: require_env("WEATHER_API_KEY")?,
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8080".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}
