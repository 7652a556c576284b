use crate::app_config::{
    AppConfig, DEFAULT_ACTIVITIES_ODATA_URL, DEFAULT_PUBLICATIONS_FEED_URL, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail. Decoupled
/// from the process environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(trimmed.to_string())
    };

    let bind_addr = parse_addr("EDASH_BIND_ADDR", "127.0.0.1:3000")?;
    let log_level = or_default("EDASH_LOG_LEVEL", "info");
    let static_dir = PathBuf::from(or_default("EDASH_STATIC_DIR", "./public"));
    let publications_feed_url =
        non_empty("EDASH_PUBLICATIONS_FEED_URL", DEFAULT_PUBLICATIONS_FEED_URL)?;
    let activities_odata_url =
        non_empty("EDASH_ACTIVITIES_ODATA_URL", DEFAULT_ACTIVITIES_ODATA_URL)?;
    let user_agent = non_empty("EDASH_USER_AGENT", DEFAULT_USER_AGENT)?;

    let request_timeout_secs = parse_u64("EDASH_REQUEST_TIMEOUT_SECS", "20")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "EDASH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        bind_addr,
        log_level,
        static_dir,
        publications_feed_url,
        activities_odata_url,
        user_agent,
        request_timeout_secs,
    })
}
