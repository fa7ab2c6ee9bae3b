//! AppDao: option-driven CRUD over `tb_app`.
//!
//! Every operation validates its arguments first, renders one statement and
//! runs it either inside the caller's transaction or on the shared pool.
//! Driver errors are returned as [`TenantError::Database`] carrying the
//! original `sqlx::Error`.

use crate::dao::app_option::{column, with_is_delete, with_update_time};
use crate::dao::option::{compose_set, compose_where, Clause, SqlOption};
use crate::dao::statement::Statement;
use crate::DatabasePoolInterface;
use sqlx::mysql::{MySql, MySqlQueryResult};
use sqlx::{FromRow, Transaction};
use std::sync::Arc;
use tenant_core::{now_timestamp, App, TenantError, TenantResult};
use tracing::{debug, warn};

/// Table backing the App entity.
pub const APP_TABLE: &str = "tb_app";

/// Insert column order. Values are bound positionally in exactly this order.
pub const INSERT_COLUMNS: [&str; 11] = [
    column::APP_ID,
    column::APP_NAME,
    column::DEV_ID,
    column::CHANNEL_ID,
    column::SOURCE,
    column::IS_DISABLE,
    column::APP_DESC,
    column::IS_DELETE,
    column::CREATE_TIME,
    column::UPDATE_TIME,
    column::EXTEND,
];

// Timestamps come back as `YYYY-MM-DD HH:MM:SS` text whatever the column type.
const SELECT_COLUMNS: &str = "app_id, app_name, dev_id, channel_id, source, is_disable, app_desc, \
    is_delete, DATE_FORMAT(create_time, '%Y-%m-%d %H:%i:%s') AS create_time, \
    DATE_FORMAT(update_time, '%Y-%m-%d %H:%i:%s') AS update_time, extend";

/// Transaction handle returned by [`AppDao::begin_tx`].
pub type Tx<'c> = Transaction<'c, MySql>;

/// Database row representation of an app.
#[derive(Debug, FromRow)]
struct AppRow {
    app_id: String,
    app_name: String,
    dev_id: i64,
    channel_id: String,
    source: String,
    is_disable: bool,
    app_desc: Option<String>,
    is_delete: bool,
    create_time: Option<String>,
    update_time: Option<String>,
    extend: Option<String>,
}

impl From<AppRow> for App {
    fn from(row: AppRow) -> Self {
        Self {
            app_id: row.app_id,
            app_name: row.app_name,
            dev_id: row.dev_id,
            channel_id: row.channel_id,
            source: row.source,
            is_disable: row.is_disable,
            app_desc: row.app_desc.unwrap_or_default(),
            is_delete: row.is_delete,
            create_time: row.create_time.unwrap_or_default(),
            update_time: row.update_time.unwrap_or_default(),
            extend: row.extend.unwrap_or_default(),
        }
    }
}

/// `INSERT INTO tb_app (<INSERT_COLUMNS>) VALUES (?,...)` bound from `app`.
#[must_use]
pub fn insert_statement(app: &App) -> Statement {
    let placeholders = vec!["?"; INSERT_COLUMNS.len()].join(",");
    Statement::new(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        APP_TABLE,
        INSERT_COLUMNS.join(","),
        placeholders
    ))
    .bind(app.app_id.as_str())
    .bind(app.app_name.as_str())
    .bind(app.dev_id)
    .bind(app.channel_id.as_str())
    .bind(app.source.as_str())
    .bind(app.is_disable)
    .bind(app.app_desc.as_str())
    .bind(app.is_delete)
    .bind(app.create_time.as_str())
    .bind(app.update_time.as_str())
    .bind(app.extend.as_str())
}

/// `UPDATE tb_app SET <set> [WHERE <where>]`
#[must_use]
pub fn update_statement(set: Clause, filter: Clause) -> Statement {
    Statement::new(format!("UPDATE {}", APP_TABLE))
        .with_clause("SET", set)
        .with_clause("WHERE", filter)
}

/// `SELECT <columns> FROM tb_app [WHERE <where>]`
#[must_use]
pub fn select_statement(filter: Clause) -> Statement {
    Statement::new(format!("SELECT {} FROM {}", SELECT_COLUMNS, APP_TABLE)).with_clause("WHERE", filter)
}

/// `SELECT COUNT(*)` or `SELECT COUNT(DISTINCT app_id)` over `tb_app`.
#[must_use]
pub fn count_statement(distinct: bool, filter: Clause) -> Statement {
    let target = if distinct {
        format!("DISTINCT {}", column::APP_ID)
    } else {
        "*".to_string()
    };
    Statement::new(format!("SELECT COUNT({}) FROM {}", target, APP_TABLE)).with_clause("WHERE", filter)
}

// COUNT is a signed BIGINT on the wire; a negative value is a decode failure.
fn row_count(count: i64) -> TenantResult<u64> {
    u64::try_from(count).map_err(|e| TenantError::Database(sqlx::Error::Decode(Box::new(e))))
}

/// Data access object for the App entity.
///
/// Holds no per-call state; share it behind an `Arc`. Transactions are
/// owned by callers, who commit or roll them back.
#[derive(Clone)]
pub struct AppDao {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl AppDao {
    /// Creates a new DAO over the given pool.
    ///
    /// Fails with [`TenantError::DatabaseMissing`] when no pool is supplied.
    pub fn new(db: Option<Arc<dyn DatabasePoolInterface>>) -> TenantResult<Self> {
        let pool = db.ok_or(TenantError::DatabaseMissing)?;
        Ok(Self { pool })
    }

    /// Opens a transaction on the pool.
    pub async fn begin_tx(&self) -> TenantResult<Tx<'static>> {
        debug!("Beginning transaction on {}", APP_TABLE);
        Ok(self.pool.inner().begin().await?)
    }

    /// Inserts `data`, returning the number of rows affected.
    pub async fn insert(&self, data: Option<&App>, tx: Option<&mut Tx<'_>>) -> TenantResult<u64> {
        let Some(app) = data else {
            warn!("Rejected insert without app data");
            return Err(TenantError::InsertDataMissing);
        };

        debug!("Inserting app: {}", app.app_id);
        let result = self.execute(insert_statement(app), tx).await?;
        Ok(result.rows_affected())
    }

    /// Applies `set_options` to every row matching `where_options`.
    ///
    /// Fails with [`TenantError::EmptyUpdate`] when no SET option remains
    /// after dropping no-op entries. Empty WHERE options update every row.
    pub async fn update<W, S>(&self, where_options: W, tx: Option<&mut Tx<'_>>, set_options: S) -> TenantResult<u64>
    where
        W: IntoIterator,
        W::Item: Into<Option<SqlOption>>,
        S: IntoIterator,
        S::Item: Into<Option<SqlOption>>,
    {
        let set = compose_set(set_options).inspect_err(|_| warn!("Rejected update without set options"))?;
        let filter = compose_where(where_options);
        if filter.is_empty() {
            warn!("Updating {} without a WHERE clause; every row is affected", APP_TABLE);
        }

        let result = self.execute(update_statement(set, filter), tx).await?;
        Ok(result.rows_affected())
    }

    /// Soft-deletes the rows matching `where_options` by setting
    /// `is_delete` and stamping `update_time`.
    pub async fn delete<W>(&self, tx: Option<&mut Tx<'_>>, where_options: W) -> TenantResult<u64>
    where
        W: IntoIterator,
        W::Item: Into<Option<SqlOption>>,
    {
        self.update(
            where_options,
            tx,
            [with_is_delete(true), with_update_time(now_timestamp())],
        )
        .await
    }

    /// Returns every app matching `where_options`; an empty list is not an error.
    pub async fn select<W>(&self, where_options: W) -> TenantResult<Vec<App>>
    where
        W: IntoIterator,
        W::Item: Into<Option<SqlOption>>,
    {
        let statement = select_statement(compose_where(where_options));
        debug!("Executing: {}", statement);

        let rows: Vec<AppRow> = statement.query_as::<AppRow>().fetch_all(self.pool.inner()).await?;
        Ok(rows.into_iter().map(App::from).collect())
    }

    /// Counts the rows matching `where_options`, or the distinct app ids
    /// among them when `distinct` is set.
    pub async fn count<W>(&self, distinct: bool, tx: Option<&mut Tx<'_>>, where_options: W) -> TenantResult<u64>
    where
        W: IntoIterator,
        W::Item: Into<Option<SqlOption>>,
    {
        let statement = count_statement(distinct, compose_where(where_options));
        debug!("Executing: {}", statement);

        let query = statement.query_scalar::<i64>();
        let count = match tx {
            Some(tx) => query.fetch_one(&mut **tx).await?,
            None => query.fetch_one(self.pool.inner()).await?,
        };
        row_count(count)
    }

    async fn execute(&self, statement: Statement, tx: Option<&mut Tx<'_>>) -> TenantResult<MySqlQueryResult> {
        debug!("Executing: {}", statement);

        let query = statement.query();
        let result = match tx {
            Some(tx) => query.execute(&mut **tx).await?,
            None => query.execute(self.pool.inner()).await?,
        };
        Ok(result)
    }
}

impl std::fmt::Debug for AppDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppDao").field("table", &APP_TABLE).finish_non_exhaustive()
    }
}
