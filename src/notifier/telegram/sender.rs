// notifier/telegram/sender.rs

use crate::model::{Listing, NotifyError};
use crate::notifier::telegram::TelegramNotifier;
use crate::utils::{absolute_link, escape_html};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Renders the HTML-formatted message announcing a new listing.
pub fn format_listing_message(listing: &Listing, link_base: &str) -> String {
    let link = absolute_link(link_base, listing);
    let link_line = if listing.has_link() {
        format!("<a href=\"{}\">{}</a>", escape_html(&link), escape_html(&link))
    } else {
        escape_html(&link)
    };
    format!(
        "🏠 <b>New listing!</b>\n\n🏷 {}\n📍 Location: {}\n💰 Price: {}\n🛏 Rooms: {}\n📐 Area: {}\n🔗 Link: {}",
        escape_html(&listing.title),
        escape_html(&listing.location),
        escape_html(&listing.price),
        escape_html(&listing.rooms),
        escape_html(&listing.area),
        link_line
    )
}

async fn post_message(notifier: &TelegramNotifier, text: &str) -> Result<(), NotifyError> {
    let params = [
        ("chat_id", notifier.chat_id.as_str()),
        ("text", text),
        ("parse_mode", "HTML"),
    ];
    let response = match timeout(
        Duration::from_secs(15),
        notifier.client
            .post(notifier.send_message_url())
            .form(&params)
            .send(),
    )
    .await
    {
        Ok(Ok(resp)) => resp,
        Ok(Err(e)) => {
            warn!("❌ Telegram send() failed: {:?}", e);
            return Err(NotifyError::ApiError(format!("Send failed: {}", e)));
        }
        Err(_) => {
            warn!("⏳ Telegram send() timed out");
            return Err(NotifyError::Unreachable);
        }
    };
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());
    if !status.is_success() {
        warn!("❌ Telegram API responded [{}]: {}", status, body);
        return Err(NotifyError::Status { status: status.as_u16(), body });
    }
    info!("✅ Telegram response [{}]", status);
    Ok(())
}

/// Sends a notification message for a listing.
pub async fn send_listing(notifier: &TelegramNotifier, listing: &Listing) -> Result<(), NotifyError> {
    let message = format_listing_message(listing, &notifier.link_base);
    info!("📤 Sending Telegram message for {}", listing.href);
    post_message(notifier, &message).await
}
