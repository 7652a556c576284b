//! Ordering and truncation of result collections.

use std::cmp::Reverse;

use crate::types::Publication;
use crate::window::iso8601;

/// Newest first by ISO-8601 text, then cut to `cap`.
///
/// Undated publications sort as the empty string and so land last. The sort
/// is stable, so equal timestamps keep feed order.
#[must_use]
pub fn newest_first(mut items: Vec<Publication>, cap: usize) -> Vec<Publication> {
    items.sort_by_cached_key(|p| Reverse(p.published_at.as_ref().map(iso8601).unwrap_or_default()));
    items.truncate(cap);
    items
}

/// Keeps the order the source delivered, cut to `cap`.
#[must_use]
pub fn source_order<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    items.truncate(cap);
    items
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn publication(title: &str, day: Option<u32>) -> Publication {
        Publication {
            title: title.to_string(),
            link: String::new(),
            description: String::new(),
            published_at: day.map(|d| Utc.with_ymd_and_hms(2024, 3, d, 8, 0, 0).unwrap()),
        }
    }

    fn titles(items: &[Publication]) -> Vec<&str> {
        items.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn sorts_descending_with_undated_last() {
        let ranked = newest_first(
            vec![
                publication("a", Some(4)),
                publication("geen datum", None),
                publication("c", Some(9)),
                publication("b", Some(6)),
            ],
            25,
        );
        assert_eq!(titles(&ranked), vec!["c", "b", "a", "geen datum"]);
    }

    #[test]
    fn ties_keep_feed_order() {
        let ranked = newest_first(
            vec![
                publication("eerste", Some(5)),
                publication("tweede", Some(5)),
                publication("derde", Some(5)),
            ],
            25,
        );
        assert_eq!(titles(&ranked), vec!["eerste", "tweede", "derde"]);
    }

    #[test]
    fn truncates_to_cap() {
        let items = (1..=28).map(|d| publication(&d.to_string(), Some(d))).collect();
        let ranked = newest_first(items, 25);
        assert_eq!(ranked.len(), 25);
        assert_eq!(ranked[0].title, "28");
        assert_eq!(ranked[24].title, "4");
    }

    #[test]
    fn source_order_only_truncates() {
        let kept = source_order(vec![3, 1, 2, 5, 4], 3);
        assert_eq!(kept, vec![3, 1, 2]);
        assert_eq!(source_order(vec![1, 2], 20), vec![1, 2]);
    }
}
