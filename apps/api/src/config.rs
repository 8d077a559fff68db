use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Built once in `main` and handed to components through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model API key. `None` keeps the server running; content generation
    /// then answers with its fallback text.
    pub openai_api_key: Option<String>,
    pub llm_model: String,
    pub llm_api_base: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub rust_log: String,
    pub pages_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai_api_key: None,
            llm_model: DEFAULT_MODEL.to_string(),
            llm_api_base: DEFAULT_API_BASE.to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
            rust_log: "info".to_string(),
            pages_dir: PathBuf::from("pages"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let openai_api_key = get("OPENAI_API_KEY").or_else(|| get("CHATGPT_API"));

        let debug = get("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => defaults.port,
        };

        Ok(Config {
            openai_api_key,
            llm_model: get("LLM_MODEL")
                .or_else(|| get("DEFAULT_MODEL"))
                .unwrap_or(defaults.llm_model),
            llm_api_base: get("LLM_API_BASE").unwrap_or(defaults.llm_api_base),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            debug,
            rust_log: get("RUST_LOG")
                .unwrap_or_else(|| default_log_level(debug).to_string()),
            pages_dir: get("PAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.pages_dir),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter used when `RUST_LOG` holds no parseable directives.
    pub fn log_directives(&self) -> String {
        format!(
            "{}={},tower_http=debug",
            env!("CARGO_CRATE_NAME"),
            self.rust_log
        )
    }
}

fn default_log_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}
