pub mod telegram;

pub use telegram::TelegramNotifier;

use crate::model::{Listing, NotifyError};

/// Delivers one message per newly discovered listing.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, listing: &Listing) -> Result<(), NotifyError>;
}
