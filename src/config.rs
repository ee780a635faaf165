// src/config.rs
use crate::controller::ListSettings;
use crate::display::badge::BadgeFileError;
use crate::display::{BadgeMap, Locale};
use crate::domain::SortOrder;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SOURCE: &str = "static/offers.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("failed to load badge file {path}: {source}")]
    Badges {
        path: PathBuf,
        #[source]
        source: BadgeFileError,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// URL or filesystem path of the offers document.
    pub source: String,
    pub badges_file: Option<PathBuf>,
    pub locale: Locale,
    pub sort: SortOrder,
    pub include_inactive: bool,
    pub fetch_timeout: Duration,
    pub workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            source: DEFAULT_SOURCE.to_string(),
            badges_file: None,
            locale: Locale::default(),
            sort: SortOrder::default(),
            include_inactive: false,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable lookup injected (tests use a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = var("OFFERS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| invalid("OFFERS_BIND_ADDR", e))?;

        let locale = match var("OFFERS_LOCALE") {
            Some(v) => v.parse().map_err(|e| invalid("OFFERS_LOCALE", e))?,
            None => Locale::default(),
        };

        let sort = match var("OFFERS_SORT") {
            Some(v) => v.parse().map_err(|e| invalid("OFFERS_SORT", e))?,
            None => SortOrder::default(),
        };

        let include_inactive = match var("OFFERS_INCLUDE_INACTIVE") {
            Some(v) => parse_bool(&v).ok_or_else(|| {
                invalid("OFFERS_INCLUDE_INACTIVE", format!("'{v}' is not a boolean"))
            })?,
            None => false,
        };

        let fetch_timeout_secs = match var("OFFERS_FETCH_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|e| invalid("OFFERS_FETCH_TIMEOUT_SECS", e))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        let workers = match var("OFFERS_WORKERS") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    invalid("OFFERS_WORKERS", format!("'{v}' is not a positive integer"))
                })?,
            None => DEFAULT_WORKERS,
        };

        Ok(Self {
            bind_addr,
            source: var("OFFERS_SOURCE").unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            badges_file: var("OFFERS_BADGES_FILE").map(PathBuf::from),
            locale,
            sort,
            include_inactive,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            workers,
        })
    }

    /// Builds the controller settings, reading the badge file if one is configured.
    pub fn list_settings(&self) -> Result<ListSettings, ConfigError> {
        let badges = match &self.badges_file {
            Some(path) => {
                BadgeMap::with_overrides_from_file(path).map_err(|source| ConfigError::Badges {
                    path: path.clone(),
                    source,
                })?
            }
            None => BadgeMap::default(),
        };

        Ok(ListSettings {
            active_only: !self.include_inactive,
            sort: self.sort,
            badges,
            locale: self.locale,
        })
    }
}

fn invalid(var: &'static str, err: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        message: err.to_string(),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
