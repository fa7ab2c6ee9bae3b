//! # Tenant Domain
//!
//! Entities persisted by the tenant data-access layer.

pub mod entities;

pub use entities::*;
