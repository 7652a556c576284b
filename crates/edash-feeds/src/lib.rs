//! Feed pipelines for the energy dashboard.
//!
//! Two independent pulls share one shape (fetch, parse, normalize, filter,
//! rank, emit):
//!
//! - publications: the Rijksoverheid RSS feed, windowed to the last seven
//!   UTC days and ranked newest first;
//! - activities: scheduled Tweede Kamer activities from OData, kept when they
//!   mention an energy or climate keyword.
//!
//! [`FeedAggregator`] is the entry point; the stage functions are public so
//! they can be exercised without a network.

pub mod activities;
pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod links;
pub mod odata;
pub mod publications;
pub mod rank;
pub mod relevance;
pub mod rss;
pub mod sanitize;
pub mod types;
pub mod window;

pub use aggregator::FeedAggregator;
pub use config::{LinkTemplates, PipelineConfig};
pub use error::FeedError;
pub use types::{LegislativeActivity, Publication, ResultEnvelope};
