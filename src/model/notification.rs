//! Notification DTOs.

use chrono::{DateTime, Utc};
use entity::notification::NotificationCategory;
use serde::{Deserialize, Serialize};

/// A notification row as served to the recipient.
///
/// `diary_id` is set for diary-category notifications so the client can
/// link straight to the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDto {
    pub id: i32,
    pub category: NotificationCategory,
    pub content: String,
    pub diary_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
