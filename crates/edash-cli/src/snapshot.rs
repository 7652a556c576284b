//! `snapshot` command: run both pipelines and persist their envelopes.

use std::path::{Path, PathBuf};

use anyhow::Context;
use edash_feeds::FeedAggregator;
use serde::Serialize;

pub(crate) const PUBLICATIONS_FILE: &str = "publicaties.json";
pub(crate) const ACTIVITIES_FILE: &str = "debatten.json";

/// Fetch both sources concurrently and write one JSON file per source.
///
/// Files are only written once both pipelines have succeeded, so a failed
/// run never leaves a half-updated snapshot behind.
///
/// # Errors
///
/// Returns an error if either source fails or a file cannot be written.
pub(crate) async fn run_snapshot(aggregator: &FeedAggregator, out_dir: &Path) -> anyhow::Result<()> {
    let (publications, activities) =
        tokio::join!(aggregator.fetch_publications(), aggregator.fetch_activities());
    let publications = publications.context("publications source unavailable")?;
    let activities = activities.context("activities source unavailable")?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let publications_path = write_json(out_dir, PUBLICATIONS_FILE, &publications)?;
    let activities_path = write_json(out_dir, ACTIVITIES_FILE, &activities)?;

    tracing::info!(
        publications = publications.items.len(),
        activities = activities.items.len(),
        publications_path = %publications_path.display(),
        activities_path = %activities_path.display(),
        "snapshot written"
    );
    Ok(())
}

/// Pretty-print `value` into `dir/file_name` with a trailing newline.
pub(crate) fn write_json<T: Serialize>(
    dir: &Path,
    file_name: &str,
    value: &T,
) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
