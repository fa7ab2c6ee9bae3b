//! Database connection pool management.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use tenant_config::DatabaseConfig;
use tenant_core::{Interface, TenantResult};
use tracing::{info, warn};

/// Interface for database pool operations.
///
/// The DAO only sees this trait, so tests can hand it a pool that was
/// built lazily or pointed at a throwaway container.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns a reference to the underlying MySQL pool.
    fn inner(&self) -> &MySqlPool;

    /// Checks if the database connection is healthy.
    async fn health_check(&self) -> TenantResult<()>;

    /// Closes the database pool.
    async fn close(&self);
}

/// Database pool wrapper.
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Creates a new database pool from configuration and opens the
    /// minimum number of connections.
    pub async fn new(config: &DatabaseConfig) -> TenantResult<Self> {
        info!("Connecting to MySQL database...");

        let pool = pool_options(config)
            .connect_with(connect_options(config)?)
            .await
            .inspect_err(|e| warn!("Failed to connect to database: {}", e))?;

        info!("MySQL connection pool established");
        Ok(Self { pool })
    }

    /// Creates a pool that connects on first use.
    ///
    /// Only the URL is validated here; connectivity errors surface from the
    /// first statement executed on the pool.
    pub fn lazy(config: &DatabaseConfig) -> TenantResult<Self> {
        let pool = pool_options(config).connect_lazy_with(connect_options(config)?);
        Ok(Self { pool })
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &MySqlPool {
        &self.pool
    }
}

fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout())
        .idle_timeout(Some(config.idle_timeout()))
}

fn connect_options(config: &DatabaseConfig) -> TenantResult<MySqlConnectOptions> {
    let options = MySqlConnectOptions::from_str(&config.url)?;
    Ok(if config.log_queries {
        options
    } else {
        options.disable_statement_logging()
    })
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> &MySqlPool {
        &self.pool
    }

    async fn health_check(&self) -> TenantResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = MySqlPool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}
