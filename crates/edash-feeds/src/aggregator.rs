//! Entry points that run each pipeline end to end.

use chrono::Utc;
use reqwest::Url;

use crate::activities::select_activities;
use crate::config::PipelineConfig;
use crate::error::FeedError;
use crate::http::{parse_endpoint, HttpFetcher};
use crate::odata::activities_query_url;
use crate::publications::select_publications;
use crate::relevance::KeywordFilter;
use crate::types::{LegislativeActivity, Publication, ResultEnvelope, LAST_7_DAYS};

/// Runs the publications and activities pipelines against configured sources.
///
/// Holds no per-request state: every call fetches its source once and derives
/// the result from scratch, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct FeedAggregator {
    fetcher: HttpFetcher,
    config: PipelineConfig,
    keyword_filter: KeywordFilter,
    publications_url: Url,
    activities_url: Url,
}

impl FeedAggregator {
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if either endpoint is not a valid
    /// absolute URL, or [`FeedError::Http`] if the HTTP client cannot be built.
    pub fn new(config: PipelineConfig) -> Result<Self, FeedError> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout_secs)?;
        let publications_url = parse_endpoint(&config.publications_feed_url)?;
        let activities_url = parse_endpoint(&config.activities_odata_url)?;
        let keyword_filter = KeywordFilter::new(&config.keywords);

        Ok(Self {
            fetcher,
            config,
            keyword_filter,
            publications_url,
            activities_url,
        })
    }

    /// Publications from the last seven UTC days, newest first, at most 25.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the feed cannot be fetched or is not
    /// well-formed XML.
    pub async fn fetch_publications(&self) -> Result<ResultEnvelope<Publication>, FeedError> {
        let xml = self.fetcher.fetch_text(&self.publications_url, "*/*").await?;
        let items = select_publications(&xml, Utc::now(), self.config.publications_cap)?;

        tracing::info!(
            source = "publications",
            count = items.len(),
            "publications pipeline complete"
        );
        Ok(ResultEnvelope::completed(items, Some(LAST_7_DAYS)))
    }

    /// Upcoming energy-related activities in date order, at most 20.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the OData endpoint cannot be reached, answers
    /// with a non-2xx status, or returns invalid JSON.
    pub async fn fetch_activities(
        &self,
    ) -> Result<ResultEnvelope<LegislativeActivity>, FeedError> {
        let url = activities_query_url(&self.activities_url, Utc::now(), self.config.odata_row_cap);
        let body = self.fetcher.fetch_json(&url).await?;
        let items = select_activities(
            body,
            &self.keyword_filter,
            &self.config.links,
            self.config.activities_cap,
        );

        tracing::info!(
            source = "activities",
            count = items.len(),
            "activities pipeline complete"
        );
        Ok(ResultEnvelope::completed(items, None))
    }
}
