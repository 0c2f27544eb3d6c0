use crate::model::ScraperError;

/// Returns the HTML of a listing-search page.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError>;
}
