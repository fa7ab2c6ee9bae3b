//! DAO (Data Access Object) layer.
//!
//! Options describe predicates and assignments, the composer turns them into
//! WHERE / SET clauses, and [`AppDao`] runs the resulting statements.
//!
//! ```text
//! with_* options → compose_where / compose_set → Statement → AppDao → MySQL
//! ```

pub mod app_dao;
pub mod app_option;
pub mod option;
pub mod statement;

pub use app_dao::{AppDao, Tx};
pub use app_option::*;
pub use option::{compose, compose_set, compose_where, Clause, Operator, SqlOption, SqlValue};
pub use statement::Statement;
