//! # Tenant Core
//!
//! Core entity, error, and logging definitions shared by the tenant
//! configuration and repository crates.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use telemetry::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
