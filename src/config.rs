// src/config.rs
use std::env;
use std::time::Duration;

use tracing::debug;

use crate::api::adapter::outgoing::ApiClientConfig;
use crate::shell::ShellTiming;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Shell settings that do not come from the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub timing: ShellTiming,
    /// Prefix for relative media paths in post bodies and covers.
    pub media_base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiClientConfig,
    pub shell: ShellConfig,
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_dotenv() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("PORTFOLIO_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("PORTFOLIO_API_BASE_URL"))?;

        let token = lookup("PORTFOLIO_API_TOKEN").filter(|t| !t.is_empty());

        let defaults = ShellTiming::default();
        let timing = ShellTiming {
            reveal_interval: parse_millis(
                &lookup,
                "PORTFOLIO_REVEAL_INTERVAL_MS",
                defaults.reveal_interval,
            )?,
            reveal_cap: parse_number(&lookup, "PORTFOLIO_REVEAL_CAP", defaults.reveal_cap)?,
            settle_delay: parse_millis(&lookup, "PORTFOLIO_SETTLE_DELAY_MS", defaults.settle_delay)?,
            copy_feedback: parse_millis(
                &lookup,
                "PORTFOLIO_COPY_FEEDBACK_MS",
                defaults.copy_feedback,
            )?,
        };

        debug!(base_url = %base_url, has_token = token.is_some(), "Loaded configuration");

        Ok(Self {
            api: ApiClientConfig {
                base_url: base_url.clone(),
                token,
            },
            shell: ShellConfig {
                timing,
                media_base_url: base_url,
            },
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_millis<F>(lookup: &F, key: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let millis = parse_number(lookup, key, default.as_millis() as u64)?;
    Ok(Duration::from_millis(millis))
}
