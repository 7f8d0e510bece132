//! Logging configuration and initialization.

use std::fmt;

use serde::Deserialize;
use tracing_subscriber::{fmt as subscriber, EnvFilter};

use crate::error::{ConfigError, Result};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for terminals.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `mercado=debug,tower_http=info`.
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Check that `level` is a usable filter directive.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an empty or unparseable level.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
            field: "level",
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// The event filter: `RUST_LOG` when set, otherwise `level`.
    #[must_use]
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Initialize the global tracing subscriber.
    pub fn init(&self) {
        let filter = self.filter();
        match self.format {
            LogFormat::Json => subscriber().json().with_env_filter(filter).init(),
            LogFormat::Pretty => subscriber().with_env_filter(filter).init(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}
