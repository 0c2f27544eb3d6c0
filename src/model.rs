// Core structs: Listing, error types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_LINK: &str = "No link";
pub const NO_TITLE: &str = "No title";
pub const NO_LOCATION: &str = "No location";
pub const NO_PRICE: &str = "No price";
pub const NO_ROOMS: &str = "No rooms";
pub const NO_AREA: &str = "No area";

fn no_title() -> String {
    NO_TITLE.to_string()
}

fn no_location() -> String {
    NO_LOCATION.to_string()
}

fn no_price() -> String {
    NO_PRICE.to_string()
}

fn no_rooms() -> String {
    NO_ROOMS.to_string()
}

fn no_area() -> String {
    NO_AREA.to_string()
}

/// One scraped rental listing. `href` is the identity used for deduplication.
///
/// Every field but `href` has a serde default, so older state files that only
/// stored `content` + `href` still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub href: String,
    #[serde(default = "no_title")]
    pub title: String,
    #[serde(default = "no_location")]
    pub location: String,
    #[serde(default = "no_price")]
    pub price: String,
    #[serde(default = "no_rooms")]
    pub rooms: String,
    #[serde(default = "no_area")]
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<DateTime<Utc>>,
}

impl Listing {
    /// A listing with the given href and every other field set to its sentinel.
    pub fn with_href(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: no_title(),
            location: no_location(),
            price: no_price(),
            rooms: no_rooms(),
            area: no_area(),
            first_seen: None,
        }
    }

    pub fn has_link(&self) -> bool {
        self.href != NO_LINK
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing Telegram API keys (CHAT_ID / BOT_API)")]
    MissingApiKeys,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid selector `{0}`")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram request failed: {0}")]
    ApiError(String),
    #[error("telegram responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("telegram unreachable")]
    Unreachable,
}
