// Utility functions
use crate::model::Listing;

/// Full URL of a listing, or the sentinel itself when the listing has no link.
pub fn absolute_link(base_url: &str, listing: &Listing) -> String {
    if !listing.has_link() || listing.href.starts_with("http://") || listing.href.starts_with("https://") {
        return listing.href.clone();
    }
    let base = base_url.trim_end_matches('/');
    if listing.href.starts_with('/') {
        format!("{}{}", base, listing.href)
    } else {
        format!("{}/{}", base, listing.href)
    }
}

/// Escapes text for Telegram's HTML parse mode, attribute values included.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Turns a URL into something usable as a file name.
pub fn to_file_slug(text: &str) -> String {
    let trimmed = text
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let slug: String = trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    slug.trim_matches('-').to_string()
}
