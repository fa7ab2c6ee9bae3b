//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;
use std::sync::Arc;
use tenant_core::TenantError;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Uncommitted local overrides
    /// 4. Environment variables with `TENANT_` prefix (`TENANT_DATABASE__URL`)
    pub fn new(config_dir: impl Into<String>) -> Result<Self, TenantError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, TenantError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previously loaded configuration stays active.
    pub async fn reload(&self) -> Result<(), TenantError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, TenantError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("TENANT_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("TENANT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_tenant_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_tenant_error)?;

        if app_config.app.environment == "production" && app_config.database.log_queries {
            warn!("SQL query logging is enabled in production");
        }

        ConfigValidator::check(&app_config)?;

        Ok(app_config)
    }

    /// Gets a specific configuration value by key path.
    pub async fn get_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let config = self.config.read().await;
        let json = serde_json::to_value(&*config).ok()?;

        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }

        serde_json::from_value(current.clone()).ok()
    }
}

fn config_error_to_tenant_error(err: ConfigError) -> TenantError {
    TenantError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_default(dir: &Path, body: &str) {
        fs::write(dir.join("default.toml"), body).unwrap();
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            r#"
[database]
url = "mysql://apps:apps@db:3306/tenant"
max_connections = 12

[observability]
log_level = "debug"
log_format = "json"
"#,
        );

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.database.url, "mysql://apps:apps@db:3306/tenant");
        assert_eq!(config.database.max_connections, 12);
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.observability.log_format, tenant_core::LogFormat::Json);
    }

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent").to_string_lossy()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.app.name, "tenant");
        assert!(config.database.url.starts_with("mysql://"));
    }

    #[tokio::test]
    async fn test_invalid_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        write_default(
            dir.path(),
            r#"
[database]
min_connections = 50
max_connections = 10
"#,
        );

        let err = ConfigLoader::new(dir.path().to_string_lossy()).err().unwrap();
        assert!(matches!(err, TenantError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_reload_and_get_value() {
        let dir = tempfile::tempdir().unwrap();
        write_default(dir.path(), "[database]\nmax_connections = 7\n");

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get_value::<u32>("database.max_connections").await, Some(7));

        write_default(dir.path(), "[database]\nmax_connections = 9\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get_value::<u32>("database.max_connections").await, Some(9));
        assert_eq!(loader.get_value::<u32>("database.missing").await, None);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_config() {
        let dir = tempfile::tempdir().unwrap();
        write_default(dir.path(), "[database]\nmax_connections = 7\n");
        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();

        write_default(dir.path(), "[database]\nmax_connections = 0\n");
        assert!(loader.reload().await.is_err());
        assert_eq!(loader.get().await.database.max_connections, 7);
    }
}
