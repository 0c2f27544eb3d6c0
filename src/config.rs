use crate::model::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_URLS: &[&str] =
    &["https://www.pararius.com/apartments/utrecht/0-1200/radius-50/since-3"];

fn default_urls() -> Vec<String> {
    DEFAULT_URLS.iter().map(|u| u.to_string()).collect()
}

fn default_storage_file() -> String {
    "previous_results.json".to_string()
}

fn default_base_url() -> String {
    "https://www.pararius.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_debug_html_dir() -> String {
    "logs/html".to_string()
}

/// Non-secret settings, read from an optional JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_urls")]
    pub urls: Vec<String>,
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub jitter_ms: u64,
    #[serde(default = "default_debug_html_dir")]
    pub debug_html_dir: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            urls: default_urls(),
            storage_file: default_storage_file(),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            delay_ms: 0,
            jitter_ms: 0,
            debug_html_dir: default_debug_html_dir(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub search: SearchConfig,
}

/// Loads secrets from the environment (and `.env`) plus the optional search config file.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let (telegram_chat_id, telegram_bot_token) =
        secrets_from(env::var("CHAT_ID").ok(), env::var("BOT_API").ok())?;
    let search = load_search_config(path)?;

    Ok(AppConfig {
        telegram_bot_token,
        telegram_chat_id,
        search,
    })
}

fn secrets_from(
    chat_id: Option<String>,
    bot_token: Option<String>,
) -> Result<(String, String), ConfigError> {
    let present = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    match (present(chat_id), present(bot_token)) {
        (Some(chat_id), Some(token)) => Ok((chat_id, token)),
        _ => Err(ConfigError::MissingApiKeys),
    }
}

pub fn load_search_config(path: &str) -> Result<SearchConfig, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(SearchConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SearchConfig = serde_json::from_str(&content)?;
    Ok(config)
}
