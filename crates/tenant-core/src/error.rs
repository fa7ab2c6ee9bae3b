//! Unified error type for the tenant data-access layer.

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by the tenant DAO and its supporting crates.
///
/// The messages of the construction and validation variants are stable:
/// callers branch on them, so they must not change.
#[derive(Error, Debug)]
pub enum TenantError {
    // ============ Construction Errors ============
    /// The DAO was created without a database collaborator.
    #[error("database is nil")]
    DatabaseMissing,

    // ============ Validation Errors ============
    /// Insert was called without an entity.
    #[error("insert app data, data must not been nil")]
    InsertDataMissing,

    /// Update was called without any SET option.
    #[error("update content is empty")]
    EmptyUpdate,

    // ============ Infrastructure Errors ============
    /// Error returned by the database driver, carried unchanged.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TenantError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DatabaseMissing => "DATABASE_MISSING",
            Self::InsertDataMissing => "INSERT_DATA_MISSING",
            Self::EmptyUpdate => "UPDATE_CONTENT_EMPTY",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Returns true for errors detected from caller arguments before any
    /// statement reaches the database.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InsertDataMissing | Self::EmptyUpdate)
    }

    /// Returns true for errors produced by the database driver.
    #[must_use]
    pub const fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }
}
