pub mod sender;

use crate::model::{Listing, NotifyError};
use crate::notifier::Notifier;
use reqwest::Client;

pub const TELEGRAM_API: &str = "https://api.telegram.org";

pub struct TelegramNotifier {
    pub bot_token: String,
    pub chat_id: String,
    pub client: Client,
    pub api_base: String,
    pub link_base: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String, link_base: String) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| NotifyError::ApiError(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            bot_token,
            chat_id,
            client,
            api_base: TELEGRAM_API.to_string(),
            link_base,
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, listing: &Listing) -> Result<(), NotifyError> {
        sender::send_listing(self, listing).await
    }
}
