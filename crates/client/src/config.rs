//! Client configuration loaded from the environment.
use std::env;

use tracing_subscriber::EnvFilter;

/// Default filter directive when `SANDBOX_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log filter {value:?}")]
    InvalidLogFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Diagnostics settings for the sandbox. Nothing here changes program output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub log_filter: String,
    pub log_ansi: bool,
    /// `SANDBOX_LOG` value replaced by the default because it did not parse.
    pub rejected_log_filter: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_ansi: false,
            rejected_log_filter: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SANDBOX_LOG` - Log filter directive (default: `warn`)
    /// - `SANDBOX_LOG_ANSI` - Colorize stderr logs (default: false)
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`ClientConfig::from_env`], but rejects an invalid `SANDBOX_LOG`.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// An invalid filter directive is recorded in `rejected_log_filter` and
    /// replaced by [`DEFAULT_LOG_FILTER`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::read(lookup);
        if config.env_filter().is_err() {
            let rejected =
                std::mem::replace(&mut config.log_filter, DEFAULT_LOG_FILTER.to_owned());
            config.rejected_log_filter = Some(rejected);
        }
        config
    }

    /// Builds configuration from an arbitrary key lookup, failing on an
    /// invalid filter directive.
    pub fn try_from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::read(lookup);
        config.env_filter()?;
        Ok(config)
    }

    /// Parses the configured filter directive.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|source| ConfigError::InvalidLogFilter {
            value: self.log_filter.clone(),
            source,
        })
    }

    fn read<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup("SANDBOX_LOG") {
            let filter = filter.trim();
            if !filter.is_empty() {
                config.log_filter = filter.to_owned();
            }
        }

        if let Some(ansi) = lookup("SANDBOX_LOG_ANSI").and_then(|v| v.trim().parse::<bool>().ok())
        {
            config.log_ansi = ansi;
        }

        config
    }
}
