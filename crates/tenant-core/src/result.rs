//! Result type aliases for the tenant crates.

use crate::TenantError;

/// A specialized `Result` type for tenant operations.
pub type TenantResult<T> = Result<T, TenantError>;
