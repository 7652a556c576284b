//! Immutable settings injected into [`crate::FeedAggregator`].

use edash_core::{
    AppConfig, DEFAULT_ACTIVITIES_ODATA_URL, DEFAULT_PUBLICATIONS_FEED_URL, DEFAULT_USER_AGENT,
};

/// Topic vocabulary for the activities relevance filter (energy and climate).
pub const ENERGY_KEYWORDS: &[&str] = &[
    "energie",
    "klimaat",
    "duurzaam",
    "waterstof",
    "elektriciteit",
    "stroom",
    "gas",
    "co2",
    "emissie",
    "netcongestie",
    "wind",
    "zon",
    "warmte",
    "kernenergie",
];

/// Markers in an activity's kind that route it to the plenary detail page.
pub const PLENARY_MARKERS: &[&str] = &["plenair", "stemmingen", "vragenuur"];

pub const PUBLICATIONS_CAP: usize = 25;
pub const ACTIVITIES_CAP: usize = 20;
/// Server-side `$top` for the OData query. Rows past it are never seen.
pub const ODATA_ROW_CAP: u32 = 200;

/// URL shapes for activity detail pages on tweedekamer.nl.
#[derive(Debug, Clone)]
pub struct LinkTemplates {
    /// Used when an activity has no reference number.
    pub fallback: String,
    /// Plenary detail page; `?id=<reference>` is appended.
    pub plenary_detail: String,
    /// Committee meeting detail page; `?id=<reference>` is appended.
    pub committee_detail: String,
    pub plenary_markers: Vec<String>,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            fallback: "https://www.tweedekamer.nl/debat_en_vergadering".to_string(),
            plenary_detail: "https://www.tweedekamer.nl/debat_en_vergadering/plenaire_vergaderingen/details/activiteit".to_string(),
            committee_detail: "https://www.tweedekamer.nl/debat_en_vergadering/commissievergaderingen/details".to_string(),
            plenary_markers: PLENARY_MARKERS.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub publications_feed_url: String,
    pub activities_odata_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub publications_cap: usize,
    pub activities_cap: usize,
    pub odata_row_cap: u32,
    /// Lower-case keywords; matched as substrings.
    pub keywords: Vec<String>,
    pub links: LinkTemplates,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            publications_feed_url: DEFAULT_PUBLICATIONS_FEED_URL.to_string(),
            activities_odata_url: DEFAULT_ACTIVITIES_ODATA_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 20,
            publications_cap: PUBLICATIONS_CAP,
            activities_cap: ACTIVITIES_CAP,
            odata_row_cap: ODATA_ROW_CAP,
            keywords: ENERGY_KEYWORDS.iter().map(|k| (*k).to_string()).collect(),
            links: LinkTemplates::default(),
        }
    }
}

impl PipelineConfig {
    /// Takes endpoints, identity and timeout from the app config; caps,
    /// vocabulary and link templates keep their fixed values.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            publications_feed_url: config.publications_feed_url.clone(),
            activities_odata_url: config.activities_odata_url.clone(),
            user_agent: config.user_agent.clone(),
            request_timeout_secs: config.request_timeout_secs,
            ..Self::default()
        }
    }

    /// Default settings pointed at alternative endpoints (mock servers in tests).
    #[must_use]
    pub fn with_endpoints(publications_feed_url: &str, activities_odata_url: &str) -> Self {
        Self {
            publications_feed_url: publications_feed_url.to_string(),
            activities_odata_url: activities_odata_url.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps_match_dashboard_limits() {
        let config = PipelineConfig::default();
        assert_eq!(config.publications_cap, 25);
        assert_eq!(config.activities_cap, 20);
        assert_eq!(config.odata_row_cap, 200);
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.user_agent, "energy-dashboard/1.0");
    }

    #[test]
    fn keywords_are_lower_case() {
        let config = PipelineConfig::default();
        assert_eq!(config.keywords.len(), 14);
        assert!(config.keywords.iter().all(|k| *k == k.to_lowercase()));
    }

    #[test]
    fn with_endpoints_keeps_other_defaults() {
        let config = PipelineConfig::with_endpoints("http://a/feed", "http://b/odata");
        assert_eq!(config.publications_feed_url, "http://a/feed");
        assert_eq!(config.activities_odata_url, "http://b/odata");
        assert_eq!(config.activities_cap, ACTIVITIES_CAP);
    }
}
