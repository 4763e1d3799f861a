//! Client Configuration
//!
//! Values are baked in at build time; a WASM bundle has no process
//! environment to read from at runtime.

use std::fmt::Display;
use std::str::FromStr;

use log::{info, warn, LevelFilter};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API host without a trailing slash
    pub base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("TODO_BACKEND_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url: String = try_load("TODO_BACKEND_URL", base_url, DEFAULT_BASE_URL);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            log_level: try_load("TODO_LOG_LEVEL", log_level, DEFAULT_LOG_LEVEL),
        }
    }

    /// Absolute URL for an API path such as `/signin`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn try_load<T: FromStr>(key: &str, value: Option<&str>, default: &str) -> T
where
    T::Err: Display,
{
    let raw = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v,
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    };

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
            .parse()
            .unwrap_or_else(|_| unreachable!("default for {key} must parse"))
    })
}
