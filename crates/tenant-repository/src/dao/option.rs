//! Clause options and their composition into WHERE / SET clauses.
//!
//! A [`SqlOption`] is one predicate or assignment: a column, an operator and
//! the values bound to it. Options are rendered with positional `?`
//! placeholders, one per bound value, in left-to-right order.
//!
//! A no-op option is `None`. Constructors that can legitimately produce
//! nothing (an `IN` list over zero values) return `Option<SqlOption>`, and
//! the composers drop `None` entries before rendering.

use std::fmt;
use tenant_core::{TenantError, TenantResult};

/// A value bound to a `?` placeholder.
///
/// Integers and booleans keep their native type so the driver encodes them
/// as numbers rather than strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// Text value.
    Text(String),
    /// 64-bit integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl PartialEq<&str> for SqlValue {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Text(text) if text == other)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "'{}'", text),
            Self::Int(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Comparison or assignment operator of a [`SqlOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `column=?` (predicate or assignment)
    Eq,
    /// `column!=?`
    Ne,
    /// `column like ?`
    Like,
    /// `column IN(?,?,...)`
    In,
}

/// One predicate or assignment with its bound values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlOption {
    column: &'static str,
    op: Operator,
    values: Vec<SqlValue>,
}

impl SqlOption {
    /// `column=?`
    #[must_use]
    pub fn eq(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::single(column, Operator::Eq, value.into())
    }

    /// `column!=?`
    #[must_use]
    pub fn ne(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::single(column, Operator::Ne, value.into())
    }

    /// `column like ?`. The pattern is bound as given; callers add `%`.
    #[must_use]
    pub fn like(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::single(column, Operator::Like, value.into())
    }

    /// `column IN(?,...)` with one placeholder per value.
    ///
    /// Returns `None` for an empty list: the option is omitted entirely,
    /// it never means "match nothing".
    #[must_use]
    pub fn in_list<I>(column: &'static str, values: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<SqlValue>,
    {
        let values: Vec<SqlValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return None;
        }
        Some(Self {
            column,
            op: Operator::In,
            values,
        })
    }

    fn single(column: &'static str, op: Operator, value: SqlValue) -> Self {
        Self {
            column,
            op,
            values: vec![value],
        }
    }

    /// Column the option applies to.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.column
    }

    /// Operator of the option.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.op
    }

    /// Values bound by the option, in placeholder order.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Renders the SQL fragment without its values.
    #[must_use]
    pub fn fragment(&self) -> String {
        match self.op {
            Operator::Eq => format!("{}=?", self.column),
            Operator::Ne => format!("{}!=?", self.column),
            Operator::Like => format!("{} like ?", self.column),
            Operator::In => format!("{} IN({})", self.column, placeholders(self.values.len())),
        }
    }

    /// Renders the fragment together with its bound values.
    #[must_use]
    pub fn render(&self) -> (String, Vec<SqlValue>) {
        (self.fragment(), self.values.clone())
    }
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(",")
}

/// A rendered WHERE or SET body and its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clause {
    /// Fragment text, without the `WHERE` / `SET` keyword.
    pub sql: String,
    /// Bound values in placeholder order.
    pub params: Vec<SqlValue>,
}

impl Clause {
    /// Returns true when no option contributed to the clause.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Joins options with `separator`, skipping no-op entries.
pub fn compose<I>(options: I, separator: &str) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Option<SqlOption>>,
{
    let mut fragments = Vec::new();
    let mut params = Vec::new();

    for option in options {
        let option: Option<SqlOption> = option.into();
        let Some(option) = option else { continue };
        let (fragment, values) = option.render();
        fragments.push(fragment);
        params.extend(values);
    }

    Clause {
        sql: fragments.join(separator),
        params,
    }
}

/// Renders WHERE options as an `AND` conjunction.
///
/// An empty result means "no restriction" and matches every row.
pub fn compose_where<I>(options: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Option<SqlOption>>,
{
    compose(options, " AND ")
}

/// Renders SET options as a comma list.
///
/// Fails with [`TenantError::EmptyUpdate`] when nothing remains after
/// dropping no-op entries.
pub fn compose_set<I>(options: I) -> TenantResult<Clause>
where
    I: IntoIterator,
    I::Item: Into<Option<SqlOption>>,
{
    let clause = compose(options, ",");
    if clause.is_empty() {
        return Err(TenantError::EmptyUpdate);
    }
    Ok(clause)
}
