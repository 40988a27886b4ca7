//! Runtime configuration read from the environment.
//!
//! | Variable                   | Default   | Meaning                          |
//! |----------------------------|-----------|----------------------------------|
//! | `LIBRARY_CHANNEL_CAPACITY` | `32`      | mpsc buffer size of every actor  |
//! | `LOG_FORMAT`               | `compact` | `compact` or `json` log lines    |
//!
//! The binary loads a `.env` file with `dotenvy` before calling [`LibraryConfig::from_env`].

use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid {
                key: "LOG_FORMAT",
                value: s.to_string(),
                expected: "\"compact\" or \"json\"",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub channel_capacity: usize,
    pub log_format: LogFormat,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_format: LogFormat::default(),
        }
    }
}

impl LibraryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("LIBRARY_CHANNEL_CAPACITY") {
            config.channel_capacity = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "LIBRARY_CHANNEL_CAPACITY",
                        value: raw,
                        expected: "a positive integer",
                    })
                }
            };
        }
        if let Some(raw) = lookup("LOG_FORMAT") {
            config.log_format = raw.parse()?;
        }
        Ok(config)
    }
}
