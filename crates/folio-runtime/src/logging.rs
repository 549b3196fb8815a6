#![forbid(unsafe_code)]

//! Subscriber setup for hosts that want Folio's default log output.
//!
//! Library code only emits `tracing` events. A native host calls
//! [`init_logging`] once at startup; hosts with their own subscriber skip it
//! (or build without the `log-init` feature).
//!
//! Filter precedence: `LoggingConfig::filter`, then `FOLIO_LOG`, then
//! `RUST_LOG`, then [`DEFAULT_FILTER`].

use serde::{Deserialize, Serialize};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "FOLIO_LOG";

pub const DEFAULT_FILTER: &str = "folio=info";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `"folio_runtime=debug"`.
    pub filter: Option<String>,
    /// One JSON object per line instead of human-readable text.
    pub json: bool,
    /// Colorize text output.
    pub ansi: bool,
}

impl LoggingConfig {
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Some(filter) = &self.filter {
            if filter.trim().is_empty() {
                errors.push("logging.filter must not be empty when set".into());
            } else {
                #[cfg(feature = "log-init")]
                if let Err(err) = tracing_subscriber::EnvFilter::try_new(filter) {
                    errors.push(format!("logging.filter {filter:?} is invalid: {err}"));
                }
            }
        }
        errors
    }
}

#[cfg(feature = "log-init")]
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("global subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Install a global fmt subscriber.
///
/// Fails instead of panicking when another subscriber is already installed.
#[cfg(feature = "log-init")]
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = match &config.filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?,
    };

    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_ansi(false));
    let text_layer = (!config.json).then(|| tracing_subscriber::fmt::layer().with_ansi(config.ansi));

    Registry::default()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::debug!(json = config.json, "logging initialized");
    Ok(())
}
