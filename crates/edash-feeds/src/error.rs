use thiserror::Error;

/// Failure to obtain a usable document from an upstream source.
///
/// Every variant is a "source unavailable" condition: callers report it and
/// move on. Per-field problems (an unparseable date, a row with an odd shape)
/// never surface here; they are absorbed where they occur.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure, timeout, or non-2xx status from the upstream server.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document parsed as XML events but is not a well-formed feed.
    #[error("malformed feed document: {0}")]
    MalformedFeed(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
