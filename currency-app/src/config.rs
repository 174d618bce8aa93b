//! Configuration loading from environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use currency_upstream::{DEFAULT_BASE_URL, RetryPolicy};

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub frankfurter_url: String,
    pub retry: RetryPolicy,
    pub attempt_timeout: Duration,
    /// Overrides the deadline derived from the retry schedule
    pub deadline: Option<Duration>,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_or(&lookup, "PORT", 3000)?;

        let frankfurter_url =
            lookup("FRANKFURTER_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let retry = RetryPolicy::new(
            parse_or(&lookup, "UPSTREAM_MAX_RETRIES", 3)?,
            Duration::from_millis(parse_or(&lookup, "UPSTREAM_RETRY_BASE_MS", 1000)?),
        );

        let attempt_timeout =
            Duration::from_secs(parse_or(&lookup, "UPSTREAM_ATTEMPT_TIMEOUT_SECS", 10)?);
        let deadline = parse_opt::<u64>(&lookup, "UPSTREAM_DEADLINE_SECS")?.map(Duration::from_secs);

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty());

        Ok(Self {
            port,
            frankfurter_url,
            retry,
            attempt_timeout,
            deadline,
            otlp_endpoint,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn parse_opt<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.parse()
                .with_context(|| format!("{key} must be a valid number, got {raw:?}"))
        })
        .transpose()
}
