// src/config.rs
//
// Startup configuration read from the environment. Nothing here is re-read
// after the server starts.

use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::BiddingRules;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Left empty the planner still runs; every request falls back.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub gemini: GeminiConfig,
    pub rules: BiddingRules,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            gemini: GeminiConfig {
                api_key: None,
                model: DEFAULT_MODEL.to_string(),
                endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            },
            rules: BiddingRules::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            bind_address: non_empty("GYEOL_BIND").unwrap_or(defaults.bind_address),
            port: parse_or("GYEOL_PORT", non_empty("GYEOL_PORT"), defaults.port)?,
            gemini: GeminiConfig {
                api_key: non_empty("API_KEY").or_else(|| non_empty("GEMINI_API_KEY")),
                model: non_empty("GYEOL_MODEL").unwrap_or(defaults.gemini.model),
                endpoint: non_empty("GYEOL_GEMINI_ENDPOINT").unwrap_or(defaults.gemini.endpoint),
            },
            rules: BiddingRules {
                accept_late_bids: parse_or(
                    "GYEOL_ACCEPT_LATE_BIDS",
                    non_empty("GYEOL_ACCEPT_LATE_BIDS"),
                    defaults.rules.accept_late_bids,
                )?,
            },
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
