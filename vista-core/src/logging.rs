//! Logging setup for hosts embedding the Vista core.
//!
//! The crate itself only emits `tracing` events; this module offers an
//! optional convenience layer for applications that do not already have a
//! subscriber installed.

use tracing::Level;

use crate::error::{CoreError, Result};

/// Configuration for Vista's logging setup.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Log level for Vista components specifically
    pub core_level: Level,
    /// Whether to use JSON output format
    pub json_format: bool,
    /// Environment filter override
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            core_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration for development use.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            core_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }

    /// Creates a configuration for production use.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            core_level: Level::INFO,
            json_format: true,
            env_filter: None,
        }
    }

    /// Sets the log level for the application.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the log level for Vista components.
    pub fn with_core_level(mut self, level: Level) -> Self {
        self.core_level = level;
        self
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            format!(
                "{},vista_core={}",
                self.level.as_str().to_lowercase(),
                self.core_level.as_str().to_lowercase()
            )
        }
    }
}

/// Initializes logging for the current process.
///
/// Respects `RUST_LOG` when set; otherwise falls back to the filter derived
/// from `config`. Fails if a global subscriber is already installed.
///
/// # Examples
///
/// ```rust,no_run
/// use vista_core::logging::{init_logging, LoggingConfig};
///
/// init_logging(LoggingConfig::development()).unwrap();
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CoreError::configuration(format!("failed to install subscriber: {e}")))
}
