use std::net::SocketAddr;
use std::path::PathBuf;

/// Rijksoverheid "duurzame energie" documents feed.
pub const DEFAULT_PUBLICATIONS_FEED_URL: &str =
    "https://feeds.rijksoverheid.nl/onderwerpen/duurzame-energie/documenten.rss";

/// Tweede Kamer OData v4 `Activiteit` entity set.
pub const DEFAULT_ACTIVITIES_ODATA_URL: &str =
    "https://gegevensmagazijn.tweedekamer.nl/OData/v4/2.0/Activiteit";

pub const DEFAULT_USER_AGENT: &str = "energy-dashboard/1.0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory holding the dashboard's static assets.
    pub static_dir: PathBuf,
    pub publications_feed_url: String,
    pub activities_odata_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}
