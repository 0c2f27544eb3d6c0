mod config;
mod model;
mod normalizer;
mod notifier;
mod parser;
mod pipeline;
mod scraper;
mod storage;
#[cfg(test)]
mod test_support;
mod utils;

use config::{load_config, AppConfig};
use model::ConfigError;
use notifier::TelegramNotifier;
use parser::ParariusParser;
use pipeline::{Pacing, Pipeline, UrlOutcome};
use crate::scraper::ScraperImpl;
use std::path::PathBuf;
use storage::{JsonFileStorage, ListingStore};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(ConfigError::MissingApiKeys) => {
            error!("Missing Telegram API keys!");
            return;
        }
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    run(&config).await;
}

async fn run(config: &AppConfig) {
    let search = &config.search;

    let scraper = match ScraperImpl::new(search.request_timeout_secs) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize scraper: {}", e);
            return;
        }
    };
    let parser = match ParariusParser::new() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to initialize parser: {}", e);
            return;
        }
    };
    let notifier = match TelegramNotifier::new(
        config.telegram_bot_token.clone(),
        config.telegram_chat_id.clone(),
        search.base_url.clone(),
    ) {
        Ok(n) => n,
        Err(e) => {
            error!("Failed to initialize notifier: {}", e);
            return;
        }
    };

    let store = JsonFileStorage::new(&search.storage_file);
    info!("Loading previous results from {}", store.path().display());
    let known = store.load();

    let pipeline = Pipeline {
        fetcher: &scraper,
        parser: &parser,
        notifier: &notifier,
        store: &store,
        pacing: Pacing {
            delay_ms: search.delay_ms,
            jitter_ms: search.jitter_ms,
        },
        debug_html_dir: Some(PathBuf::from(&search.debug_html_dir)),
    };

    info!("Processing {} search URLs", search.urls.len());
    let summary = pipeline.run(&search.urls, known).await;

    for (url, outcome) in &summary.outcomes {
        match outcome {
            UrlOutcome::Processed { failed, persisted, .. } if *failed > 0 || !*persisted => {
                warn!("{}: {:?}", url, outcome);
            }
            _ => info!("{}: {:?}", url, outcome),
        }
    }
    info!(
        "Run finished: {} new listings, {} failed URLs, {} known listings",
        summary.total_new(),
        summary.failed_urls(),
        summary.known.len()
    );
}
