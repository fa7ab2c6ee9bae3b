//! Clause options over the `tb_app` columns.
//!
//! Every constructor renders a single fragment:
//!
//! | Constructor | Fragment |
//! |---|---|
//! | [`with_app_id`] | `app_id=?` |
//! | [`with_not_app_id`] | `app_id!=?` |
//! | [`with_app_ids`] | `app_id IN(?,...)`, `None` when empty |
//! | [`with_name`] | `app_name like ?` |
//! | [`with_set_name`] | `app_name=?` |
//! | [`with_desc`] | `app_desc=?` |
//! | [`with_dev_id`] | `dev_id=?` |
//! | [`with_channel_id`] | `channel_id=?` |
//! | [`with_no_channel_id`] | `channel_id!=?` |
//! | [`with_source`] | `source=?` |
//! | [`with_is_disable`] | `is_disable=?` |
//! | [`with_is_delete`] | `is_delete=?` |
//! | [`with_update_time`] | `update_time=?` |
//! | [`with_extend`] | `extend=?` |
//!
//! Options with `=` work in both WHERE and SET position.

use crate::dao::option::{SqlOption, SqlValue};

/// Column names of `tb_app`.
pub mod column {
    pub const APP_ID: &str = "app_id";
    pub const APP_NAME: &str = "app_name";
    pub const DEV_ID: &str = "dev_id";
    pub const CHANNEL_ID: &str = "channel_id";
    pub const SOURCE: &str = "source";
    pub const IS_DISABLE: &str = "is_disable";
    pub const APP_DESC: &str = "app_desc";
    pub const IS_DELETE: &str = "is_delete";
    pub const CREATE_TIME: &str = "create_time";
    pub const UPDATE_TIME: &str = "update_time";
    pub const EXTEND: &str = "extend";
}

/// Zero options, for operations that should run unfiltered.
pub const NO_OPTIONS: [SqlOption; 0] = [];

/// `app_id=?`
#[must_use]
pub fn with_app_id(app_id: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::APP_ID, app_id.into())
}

/// `app_id!=?`
#[must_use]
pub fn with_not_app_id(app_id: impl Into<String>) -> SqlOption {
    SqlOption::ne(column::APP_ID, app_id.into())
}

/// `app_id IN(?,...)`; `None` when `app_ids` is empty.
#[must_use]
pub fn with_app_ids<I>(app_ids: I) -> Option<SqlOption>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    SqlOption::in_list(
        column::APP_ID,
        app_ids.into_iter().map(|id| SqlValue::Text(id.into())),
    )
}

/// `app_name like ?`. Wildcards are the caller's to add.
#[must_use]
pub fn with_name(pattern: impl Into<String>) -> SqlOption {
    SqlOption::like(column::APP_NAME, pattern.into())
}

/// `app_name=?`, used as an assignment.
#[must_use]
pub fn with_set_name(name: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::APP_NAME, name.into())
}

/// `app_desc=?`
#[must_use]
pub fn with_desc(desc: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::APP_DESC, desc.into())
}

/// `dev_id=?`
#[must_use]
pub fn with_dev_id(dev_id: i64) -> SqlOption {
    SqlOption::eq(column::DEV_ID, dev_id)
}

/// `channel_id=?`
#[must_use]
pub fn with_channel_id(channel_id: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::CHANNEL_ID, channel_id.into())
}

/// `channel_id!=?`
#[must_use]
pub fn with_no_channel_id(channel_id: impl Into<String>) -> SqlOption {
    SqlOption::ne(column::CHANNEL_ID, channel_id.into())
}

/// `source=?`
#[must_use]
pub fn with_source(source: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::SOURCE, source.into())
}

/// `is_disable=?`
#[must_use]
pub fn with_is_disable(is_disable: bool) -> SqlOption {
    SqlOption::eq(column::IS_DISABLE, is_disable)
}

/// `is_delete=?`
#[must_use]
pub fn with_is_delete(is_delete: bool) -> SqlOption {
    SqlOption::eq(column::IS_DELETE, is_delete)
}

/// `update_time=?`
#[must_use]
pub fn with_update_time(update_time: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::UPDATE_TIME, update_time.into())
}

/// `extend=?`
#[must_use]
pub fn with_extend(extend: impl Into<String>) -> SqlOption {
    SqlOption::eq(column::EXTEND, extend.into())
}
