//! Structured-feed pipeline: OData rows to the relevant, capped activity list.

use crate::config::LinkTemplates;
use crate::odata::{parse_activity_rows, ActivityRow};
use crate::rank::source_order;
use crate::relevance::KeywordFilter;
use crate::types::LegislativeActivity;

/// Shown when the source leaves an activity's subject empty.
pub const SUBJECT_PLACEHOLDER: &str = "(zonder onderwerp)";

/// Shapes a row for the dashboard, deriving its detail link.
#[must_use]
pub fn normalize_activity(row: ActivityRow, links: &LinkTemplates) -> LegislativeActivity {
    let subject = row.subject.unwrap_or_default();
    let kind = row.kind.unwrap_or_default();
    let reference_number = row.reference_number.unwrap_or_default();
    let detail_url = links.detail_url(&reference_number, &kind);

    LegislativeActivity {
        subject: if subject.is_empty() {
            SUBJECT_PLACEHOLDER.to_string()
        } else {
            subject
        },
        kind,
        date: row.date,
        start_time: row.start_time,
        location: row.location.unwrap_or_default(),
        reference_number,
        detail_url,
    }
}

/// Keeps relevant rows in source order, normalized and cut to `cap`.
///
/// Relevance is judged on the raw subject, so a row without one only
/// passes on its kind.
#[must_use]
pub fn select_activities(
    body: serde_json::Value,
    filter: &KeywordFilter,
    links: &LinkTemplates,
    cap: usize,
) -> Vec<LegislativeActivity> {
    let rows = parse_activity_rows(body);
    let total = rows.len();

    let relevant: Vec<LegislativeActivity> = rows
        .into_iter()
        .filter(|row| {
            filter.is_relevant(
                row.subject.as_deref().unwrap_or(""),
                row.kind.as_deref().unwrap_or(""),
            )
        })
        .map(|row| normalize_activity(row, links))
        .collect();

    tracing::debug!(total, relevant = relevant.len(), "filtered activities by topic");

    source_order(relevant, cap)
}
