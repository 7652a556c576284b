//! Syndication pipeline: raw RSS entries to the windowed, ranked list.

use chrono::{DateTime, Utc};

use crate::error::FeedError;
use crate::rank::newest_first;
use crate::rss::{parse_rss_items, RawEntry};
use crate::sanitize::sanitize_text;
use crate::types::Publication;
use crate::window::{in_window, parse_pub_date, window_start};

impl From<RawEntry> for Publication {
    fn from(entry: RawEntry) -> Self {
        Self {
            title: entry.title.trim().to_string(),
            link: entry.link.trim().to_string(),
            description: sanitize_text(&entry.description),
            published_at: parse_pub_date(&entry.pub_date),
        }
    }
}

/// Parses `xml` and keeps the newest `cap` publications inside the window
/// ending at `now`.
///
/// # Errors
///
/// Returns [`FeedError`] if the document is not well-formed.
pub fn select_publications(
    xml: &str,
    now: DateTime<Utc>,
    cap: usize,
) -> Result<Vec<Publication>, FeedError> {
    let start = window_start(now);
    let entries = parse_rss_items(xml)?;
    let total = entries.len();

    let recent: Vec<Publication> = entries
        .into_iter()
        .map(Publication::from)
        .filter(|p| in_window(p.published_at, start))
        .collect();

    tracing::debug!(
        total,
        in_window = recent.len(),
        window_start = %start,
        "filtered publications to window"
    );

    Ok(newest_first(recent, cap))
}
