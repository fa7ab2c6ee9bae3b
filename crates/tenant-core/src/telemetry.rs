//! Logging initialisation.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! console fmt layer. `RUST_LOG` takes precedence over the configured level.

use crate::{TenantError, TenantResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directive (e.g. `info` or `info,tenant_repository=debug`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Whether to print the event target.
    #[serde(default = "default_with_target")]
    pub with_target: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_with_target() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            with_target: default_with_target(),
        }
    }
}

impl TelemetryConfig {
    /// Builds the filter, preferring `RUST_LOG` when it is set.
    pub fn env_filter(&self) -> TenantResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            TenantError::configuration(format!("invalid log level '{}': {}", self.log_level, e))
        })
    }
}

/// Initialize logging with the given configuration.
///
/// A second call is a no-op: the first installed subscriber stays active.
pub fn init_telemetry(config: &TelemetryConfig) -> TenantResult<()> {
    let filter = config.env_filter()?;

    let installed = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init(),
    };

    match installed {
        Ok(()) => tracing::info!(
            log_level = %config.log_level,
            log_format = ?config.log_format,
            "Telemetry initialized"
        ),
        Err(e) => tracing::debug!("Global subscriber already installed: {}", e),
    }

    Ok(())
}
