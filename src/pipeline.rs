// One pass over the configured search pages: fetch, parse, dedup, notify, persist.
use crate::model::Listing;
use crate::notifier::Notifier;
use crate::parser::Parser;
use crate::scraper::PageFetcher;
use crate::storage::{filter_new, ListingStore};
use crate::utils::to_file_slug;
use chrono::Utc;
use rand::Rng;
use std::fs;
use std::path::PathBuf;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info, warn};

/// What happened to a single search URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlOutcome {
    FetchFailed,
    /// The parser rejected the page. `ParariusParser` compiles its selectors
    /// up front, so only other `Parser` implementations end up here.
    ParseFailed,
    NoResults,
    NoNewListings { found: usize },
    Processed {
        found: usize,
        new: usize,
        notified: usize,
        failed: usize,
        persisted: bool,
    },
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(String, UrlOutcome)>,
    /// Known-set after the run, whether or not every write succeeded.
    pub known: Vec<Listing>,
}

impl RunSummary {
    pub fn total_new(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, outcome)| match outcome {
                UrlOutcome::Processed { new, .. } => *new,
                _ => 0,
            })
            .sum()
    }

    pub fn failed_urls(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, UrlOutcome::FetchFailed | UrlOutcome::ParseFailed))
            .count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pacing {
    pub delay_ms: u64,
    pub jitter_ms: u64,
}

impl Pacing {
    fn pause(&self) -> Duration {
        let jitter = if self.jitter_ms > 0 {
            rand::rng().random_range(0..=self.jitter_ms)
        } else {
            0
        };
        Duration::from_millis(self.delay_ms.saturating_add(jitter))
    }
}

pub struct Pipeline<'a> {
    pub fetcher: &'a dyn PageFetcher,
    pub parser: &'a dyn Parser,
    pub notifier: &'a dyn Notifier,
    pub store: &'a dyn ListingStore,
    pub pacing: Pacing,
    pub debug_html_dir: Option<PathBuf>,
}

impl<'a> Pipeline<'a> {
    /// Processes every URL in order, threading the known-set through each step.
    pub async fn run(&self, urls: &[String], known: Vec<Listing>) -> RunSummary {
        let mut summary = RunSummary {
            outcomes: Vec::with_capacity(urls.len()),
            known,
        };

        for (i, url) in urls.iter().enumerate() {
            if i > 0 {
                let pause = self.pacing.pause();
                if !pause.is_zero() {
                    debug!("Waiting {:?} before next URL", pause);
                    sleep(pause).await;
                }
            }

            let known = std::mem::take(&mut summary.known);
            let (outcome, known) = self.process_url(url, known).await;
            summary.known = known;
            summary.outcomes.push((url.clone(), outcome));
        }

        summary
    }

    pub async fn process_url(&self, url: &str, known: Vec<Listing>) -> (UrlOutcome, Vec<Listing>) {
        info!("Fetching {}", url);
        let html = match self.fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Fetching {} failed: {}", url, e);
                return (UrlOutcome::FetchFailed, known);
            }
        };
        debug!("HTML snippet: {}", html.chars().take(500).collect::<String>());

        info!("Parsing listings...");
        let mut listings = match self.parser.parse(&html) {
            Ok(l) => l,
            Err(e) => {
                error!("Parse error for {}: {}", url, e);
                return (UrlOutcome::ParseFailed, known);
            }
        };

        if listings.is_empty() {
            info!("No search results found for {}", url);
            self.save_debug_html(&html, url);
            return (UrlOutcome::NoResults, known);
        }
        let found = listings.len();
        info!("Found {} listings", found);

        let now = Utc::now();
        for listing in &mut listings {
            listing.first_seen = Some(now);
        }

        let outcome = filter_new(&known, listings);
        if !outcome.has_new() {
            info!("No new search results found.");
            return (UrlOutcome::NoNewListings { found }, known);
        }
        info!("{} new listings", outcome.new_ones.len());

        let mut notified = 0;
        let mut failed = 0;
        for listing in &outcome.new_ones {
            match self.notifier.notify(listing).await {
                Ok(()) => notified += 1,
                Err(e) => {
                    warn!("Notification for {} failed: {}", listing.href, e);
                    failed += 1;
                }
            }
        }

        let persisted = match self.store.save(&outcome.merged) {
            Ok(()) => {
                info!("Saved {} known listings", outcome.merged.len());
                true
            }
            Err(e) => {
                error!("Saving known listings failed: {}", e);
                false
            }
        };

        (
            UrlOutcome::Processed {
                found,
                new: outcome.new_ones.len(),
                notified,
                failed,
                persisted,
            },
            outcome.merged,
        )
    }

    fn save_debug_html(&self, html: &str, url: &str) {
        let Some(folder) = &self.debug_html_dir else {
            return;
        };
        if let Err(e) = fs::create_dir_all(folder) {
            warn!("Failed to create debug folder: {}", e);
            return;
        }
        let filename = folder.join(format!("debug-{}.html", to_file_slug(url)));
        if let Err(e) = fs::write(&filename, html) {
            warn!("Failed to write debug HTML: {}", e);
        } else {
            info!("Saved debug HTML: {}", filename.display());
        }
    }
}
