use std::{env, str::FromStr, time::Duration};

use url::Url;

pub const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub region: String,
    pub endpoint: Url,
    pub timeout: Duration,
    /// Run client-side range checks before sending create, update and list
    /// requests.
    pub validate_requests: bool,
}

impl ClientConfig {
    /// Config for the public regional endpoint.
    pub fn new(region: impl Into<String>) -> Result<Self, ConfigError> {
        let region = region.into();
        let endpoint = default_endpoint(&region)?;
        Ok(Self {
            region,
            endpoint,
            timeout: DEFAULT_TIMEOUT,
            validate_requests: true,
        })
    }

    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_validate_requests(mut self, validate_requests: bool) -> Self {
        self.validate_requests = validate_requests;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    pub level: String,
    pub format: LoggerFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LoggerFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerFormat {
    Pretty,
    Json,
    Compact,
}

impl FromStr for LoggerFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(LoggerFormat::Json),
            "pretty" => Ok(LoggerFormat::Pretty),
            "compact" => Ok(LoggerFormat::Compact),
            _ => Err("invalid logger format"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value \"{value}\" of {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            name,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Reads `MEDIALIVE_*` environment variables.
pub fn read_config() -> Result<Config, ConfigError> {
    config_from_lookup(|name| env::var(name).ok())
}

pub(crate) fn config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let region = lookup("MEDIALIVE_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
    let endpoint = match lookup("MEDIALIVE_ENDPOINT") {
        Some(endpoint) => Url::parse(&endpoint)
            .map_err(|err| ConfigError::invalid("MEDIALIVE_ENDPOINT", &endpoint, err))?,
        None => default_endpoint(&region)?,
    };
    let timeout = match lookup("MEDIALIVE_TIMEOUT_MS") {
        Some(timeout) => timeout
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|err| ConfigError::invalid("MEDIALIVE_TIMEOUT_MS", &timeout, err))?,
        None => DEFAULT_TIMEOUT,
    };
    let validate_requests = match lookup("MEDIALIVE_VALIDATE_REQUESTS") {
        Some(value) => bool_env_from_str(&value).ok_or_else(|| {
            ConfigError::invalid("MEDIALIVE_VALIDATE_REQUESTS", &value, "expected a boolean")
        })?,
        None => true,
    };

    let level = lookup("MEDIALIVE_LOGGER_LEVEL").unwrap_or_else(|| "info".to_string());
    let format = match lookup("MEDIALIVE_LOGGER_FORMAT") {
        Some(format) => LoggerFormat::from_str(&format)
            .map_err(|err| ConfigError::invalid("MEDIALIVE_LOGGER_FORMAT", &format, err))?,
        None => LoggerFormat::Compact,
    };

    Ok(Config {
        client: ClientConfig {
            region,
            endpoint,
            timeout,
            validate_requests,
        },
        logger: LoggerConfig { level, format },
    })
}

fn default_endpoint(region: &str) -> Result<Url, ConfigError> {
    let endpoint = format!("https://medialive.{region}.amazonaws.com");
    Url::parse(&endpoint).map_err(|err| ConfigError::invalid("MEDIALIVE_REGION", region, err))
}

fn bool_env_from_str(s: &str) -> Option<bool> {
    match s {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
