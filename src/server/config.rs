use std::{num::NonZeroU32, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RATE_LIMIT_PER_SECOND: u32 = 5;
const DEFAULT_TRANSACTION_TIMEOUT_SECS: u64 = 10_000;
const DEFAULT_MAIL_SENDER: &str = "noreply@localhost";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Permits per second granted to rate limited routes.
    pub rate_limit_per_second: NonZeroU32,

    pub trace_sql_enabled: bool,
    pub trace_rest_enabled: bool,

    pub transaction_timeout: Duration,

    /// Mail gateway endpoint, notifications are disabled when unset.
    pub mail_api_url: Option<String>,
    pub mail_sender: String,
    pub mail_recipients: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            rate_limit_per_second: parsed("RATE_LIMIT_PER_SECOND")?
                .or(NonZeroU32::new(DEFAULT_RATE_LIMIT_PER_SECOND))
                .ok_or_else(|| ConfigError::MissingEnvVar("RATE_LIMIT_PER_SECOND".to_string()))?,
            trace_sql_enabled: parsed("TRACE_SQL_ENABLED")?.unwrap_or(false),
            trace_rest_enabled: parsed("TRACE_REST_ENABLED")?.unwrap_or(false),
            transaction_timeout: Duration::from_secs(
                parsed("TRANSACTION_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TRANSACTION_TIMEOUT_SECS),
            ),
            mail_api_url: optional("MAIL_API_URL"),
            mail_sender: optional("MAIL_SENDER").unwrap_or_else(|| DEFAULT_MAIL_SENDER.to_string()),
            mail_recipients: optional("MAIL_RECIPIENTS")
                .map(|value| split_list(&value))
                .unwrap_or_default(),
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    optional(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value,
                })
        })
        .transpose()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
