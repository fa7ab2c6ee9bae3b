//! Rendered statements and their binding onto SQLx queries.

use crate::dao::option::{Clause, SqlValue};
use sqlx::mysql::{MySql, MySqlArguments, MySqlRow};
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::FromRow;
use std::fmt;

/// Binds every value of `$params` onto `$query` in order, keeping the
/// native type of each value.
macro_rules! bind_params {
    ($query:expr, $params:expr) => {{
        let mut query = $query;
        for value in $params {
            query = match value {
                SqlValue::Text(text) => query.bind(text.as_str()),
                SqlValue::Int(number) => query.bind(*number),
                SqlValue::Bool(flag) => query.bind(*flag),
            };
        }
        query
    }};
}

/// A complete SQL statement with positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Statement text with `?` placeholders.
    pub sql: String,
    /// Bound values in placeholder order.
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// Creates a statement without parameters.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Appends ` <keyword> <clause>` unless the clause is empty.
    #[must_use]
    pub fn with_clause(mut self, keyword: &str, clause: Clause) -> Self {
        if !clause.is_empty() {
            self.sql.push(' ');
            self.sql.push_str(keyword);
            self.sql.push(' ');
            self.sql.push_str(&clause.sql);
            self.params.extend(clause.params);
        }
        self
    }

    /// Appends a single bound value without touching the text.
    #[must_use]
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Builds an SQLx query for `execute`.
    pub(crate) fn query(&self) -> Query<'_, MySql, MySqlArguments> {
        bind_params!(sqlx::query(&self.sql), &self.params)
    }

    /// Builds an SQLx query decoding rows into `T`.
    pub(crate) fn query_as<T>(&self) -> QueryAs<'_, MySql, T, MySqlArguments>
    where
        T: for<'r> FromRow<'r, MySqlRow>,
    {
        bind_params!(sqlx::query_as::<_, T>(&self.sql), &self.params)
    }

    /// Builds an SQLx query decoding the first column into `T`.
    pub(crate) fn query_scalar<T>(&self) -> QueryScalar<'_, MySql, T, MySqlArguments>
    where
        (T,): for<'r> FromRow<'r, MySqlRow>,
    {
        bind_params!(sqlx::query_scalar::<_, T>(&self.sql), &self.params)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)?;
        if !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " -- [{}]", params)?;
        }
        Ok(())
    }
}
