use crate::error::ConfigError;
use crate::models::reference::ReferenceSources;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_DNS_TIMEOUT_SECS: u64 = 2;
const DEFAULT_DNS_ATTEMPTS: usize = 2;

/// # Service Configuration
///
/// Read from the process environment (after `.env` has been loaded by `main`).
///
/// ## Variables
/// - `HOST`, `PORT`: bind address of the HTTP server
/// - `DATA_DIR`: directory holding the default reference lists
/// - `POPULAR_DOMAINS_FILE`, `POPULAR_TLDS_FILE`, `DISPOSABLE_DOMAINS_FILE`:
///   per-list overrides, relative paths are taken as-is
/// - `DNS_TIMEOUT_SECS`, `DNS_ATTEMPTS`: resolver timeout budget for MX lookups
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub sources: ReferenceSources,
    pub dns_timeout: Duration,
    pub dns_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sources: ReferenceSources::in_dir(DEFAULT_DATA_DIR),
            dns_timeout: Duration::from_secs(DEFAULT_DNS_TIMEOUT_SECS),
            dns_attempts: DEFAULT_DNS_ATTEMPTS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset or blank keys fall back to their defaults; values that are set but
    /// fail to parse are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let mut sources = ReferenceSources::in_dir(&data_dir);
        if let Some(path) = get("POPULAR_DOMAINS_FILE") {
            sources.popular_domains = PathBuf::from(path);
        }
        if let Some(path) = get("POPULAR_TLDS_FILE") {
            sources.popular_tlds = PathBuf::from(path);
        }
        if let Some(path) = get("DISPOSABLE_DOMAINS_FILE") {
            sources.disposable_domains = PathBuf::from(path);
        }

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            sources,
            dns_timeout: Duration::from_secs(parse_nonzero_or(
                "DNS_TIMEOUT_SECS",
                get("DNS_TIMEOUT_SECS"),
                DEFAULT_DNS_TIMEOUT_SECS,
            )?),
            dns_attempts: parse_nonzero_or(
                "DNS_ATTEMPTS",
                get("DNS_ATTEMPTS"),
                DEFAULT_DNS_ATTEMPTS,
            )?,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Like [`parse_or`], but a zero resolver budget would fail every lookup.
fn parse_nonzero_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Default + PartialEq,
{
    let parsed = parse_or(key, raw.clone(), default)?;
    if parsed == T::default() {
        return Err(ConfigError::InvalidValue {
            key,
            value: raw.unwrap_or_default(),
        });
    }
    Ok(parsed)
}
