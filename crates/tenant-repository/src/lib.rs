//! # Tenant Repository
//!
//! Data access for the `tb_app` table.
//!
//! ```text
//! Caller
//!   ↓  with_* options, Option<&mut Tx>
//! AppDao                         (dao/app_dao.rs)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! DatabasePool                   (pool.rs, SQLx MySQL pool)
//!   ↓
//! MySQL
//! ```
//!
//! Callers that need atomicity open a transaction with
//! [`AppDao::begin_tx`], pass it to any number of operations and then
//! commit or roll it back themselves.

pub mod dao;
pub mod pool;

pub use dao::*;
pub use pool::*;
