//! Client configuration.
//!
//! Everything is fixed at build time through `option_env!`, so the values
//! ship inside the wasm bundle. `from_lookup` takes an arbitrary source so
//! the parsing rules can be exercised without rebuilding.

use log::LevelFilter;

/// Storage server the client talks to.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Shared secret used when none is configured at build time.
pub const DEFAULT_SECRET: &str = "password";

pub const DEFAULT_FILES_REFRESH_MS: u32 = 5_000;
pub const DEFAULT_DISK_USAGE_REFRESH_MS: u32 = 30_000;

/// `localStorage` key holding the credential.
pub const CREDENTIAL_STORAGE_KEY: &str = "filegate.credential";

pub const ENV_API_URL: &str = "FILEGATE_API_URL";
pub const ENV_SECRET: &str = "FILEGATE_SECRET";
pub const ENV_FILES_REFRESH_MS: &str = "FILEGATE_FILES_REFRESH_MS";
pub const ENV_DISK_USAGE_REFRESH_MS: &str = "FILEGATE_DISK_USAGE_REFRESH_MS";
pub const ENV_LOG_LEVEL: &str = "FILEGATE_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the storage server, without a trailing slash
    pub api_base_url: String,

    /// Secret the login form compares against
    pub secret: String,

    /// File list poll interval
    pub files_refresh_ms: u32,

    /// Disk usage poll interval
    pub disk_usage_refresh_ms: u32,

    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            secret: DEFAULT_SECRET.to_string(),
            files_refresh_ms: DEFAULT_FILES_REFRESH_MS,
            disk_usage_refresh_ms: DEFAULT_DISK_USAGE_REFRESH_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Configuration baked in by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            ENV_API_URL => option_env!("FILEGATE_API_URL"),
            ENV_SECRET => option_env!("FILEGATE_SECRET"),
            ENV_FILES_REFRESH_MS => option_env!("FILEGATE_FILES_REFRESH_MS"),
            ENV_DISK_USAGE_REFRESH_MS => option_env!("FILEGATE_DISK_USAGE_REFRESH_MS"),
            ENV_LOG_LEVEL => option_env!("FILEGATE_LOG_LEVEL"),
            _ => None,
        })
    }

    /// Build a configuration from a name -> value source, falling back to
    /// defaults for anything missing or unusable.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(ENV_API_URL)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let secret = lookup(ENV_SECRET)
            .map(str::to_string)
            .unwrap_or(defaults.secret);

        Self {
            api_base_url,
            secret,
            files_refresh_ms: parse_interval(lookup(ENV_FILES_REFRESH_MS))
                .unwrap_or(defaults.files_refresh_ms),
            disk_usage_refresh_ms: parse_interval(lookup(ENV_DISK_USAGE_REFRESH_MS))
                .unwrap_or(defaults.disk_usage_refresh_ms),
            log_level: lookup(ENV_LOG_LEVEL)
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

/// Zero or garbage means "use the default".
fn parse_interval(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> ClientConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        ClientConfig::from_lookup(|name| vars.get(name).copied())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.files_refresh_ms, 5_000);
        assert_eq!(config.disk_usage_refresh_ms, 30_000);
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            (ENV_API_URL, "https://files.example.net/"),
            (ENV_SECRET, "abc123"),
            (ENV_DISK_USAGE_REFRESH_MS, "10000"),
            (ENV_LOG_LEVEL, "debug"),
        ]);
        assert_eq!(config.api_base_url, "https://files.example.net");
        assert_eq!(config.secret, "abc123");
        assert_eq!(config.disk_usage_refresh_ms, 10_000);
        assert_eq!(config.files_refresh_ms, DEFAULT_FILES_REFRESH_MS);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_intervals_fall_back() {
        let config = config_from(&[
            (ENV_FILES_REFRESH_MS, "0"),
            (ENV_DISK_USAGE_REFRESH_MS, "soon"),
            (ENV_LOG_LEVEL, "chatty"),
        ]);
        assert_eq!(config.files_refresh_ms, DEFAULT_FILES_REFRESH_MS);
        assert_eq!(config.disk_usage_refresh_ms, DEFAULT_DISK_USAGE_REFRESH_MS);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
