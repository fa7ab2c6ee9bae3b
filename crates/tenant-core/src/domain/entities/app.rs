//! App entity.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Text layout used for `create_time` / `update_time`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time rendered with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// An application registered with the tenant service.
///
/// Timestamps are opaque `YYYY-MM-DD HH:MM:SS` text and `extend` is an opaque
/// structured payload; neither is parsed by the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    /// Unique identifier, immutable once created.
    pub app_id: String,

    /// Display name.
    pub app_name: String,

    /// Owning developer.
    pub dev_id: i64,

    /// Distribution channel.
    pub channel_id: String,

    /// Where the app was registered from (e.g. `admin`).
    pub source: String,

    /// Whether the app is disabled.
    pub is_disable: bool,

    /// Free-form description.
    #[serde(rename = "desc")]
    pub app_desc: String,

    /// Soft-delete flag.
    pub is_delete: bool,

    /// Creation timestamp.
    pub create_time: String,

    /// Last update timestamp.
    pub update_time: String,

    /// Opaque extension payload.
    pub extend: String,
}

impl App {
    /// Creates an enabled, not-deleted app stamped with the current time.
    #[must_use]
    pub fn new(
        app_id: impl Into<String>,
        app_name: impl Into<String>,
        dev_id: i64,
        channel_id: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let now = now_timestamp();
        Self {
            app_id: app_id.into(),
            app_name: app_name.into(),
            dev_id,
            channel_id: channel_id.into(),
            source: source.into(),
            is_disable: false,
            app_desc: String::new(),
            is_delete: false,
            create_time: now.clone(),
            update_time: now,
            extend: String::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.app_desc = desc.into();
        self
    }

    /// Sets the extension payload.
    #[must_use]
    pub fn with_extend(mut self, extend: impl Into<String>) -> Self {
        self.extend = extend.into();
        self
    }

    /// Checks if the app can be used: neither disabled nor deleted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_disable && !self.is_delete
    }
}
