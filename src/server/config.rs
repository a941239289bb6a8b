use std::env;

use super::inbox::DEFAULT_INBOX_CAPACITY;

pub const LOG_JSON_ENV: &str = "PORTFOLIO_LOG_JSON";
pub const INBOX_CAPACITY_ENV: &str = "PORTFOLIO_INBOX_CAPACITY";

/// Server settings that are not part of the leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub log_json: bool,
    pub inbox_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_json: false,
            inbox_capacity: DEFAULT_INBOX_CAPACITY,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Unset or unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_json: lookup(LOG_JSON_ENV)
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_json),
            inbox_capacity: lookup(INBOX_CAPACITY_ENV)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(defaults.inbox_capacity),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
