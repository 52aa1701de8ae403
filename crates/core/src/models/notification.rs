use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::formatting::format_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Warning,
    Critical,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Expense,
    Savings,
    Stock,
    General,
}

/// A message shown in the notifications panel.
///
/// `id` and `timestamp` are opaque display strings so lists written by the
/// web view (millisecond ids, locale timestamps) load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    #[serde(rename = "type")]
    pub notification_type: NotificationType,

    pub message: String,

    pub category: NotificationCategory,

    pub timestamp: String,

    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(
        notification_type: NotificationType,
        category: NotificationCategory,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            notification_type,
            message: message.into(),
            category,
            timestamp: format_timestamp(timestamp),
            read: false,
        }
    }
}
