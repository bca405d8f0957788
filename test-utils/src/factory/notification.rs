//! Notification factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::notification::NotificationCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread mate-category notification for the given recipient.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        category: ActiveValue::Set(NotificationCategory::Mate),
        content: ActiveValue::Set(format!("Notification {}", next_id())),
        diary_id: ActiveValue::Set(None),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an unread diary-category notification pointing at a diary entry.
pub async fn create_diary_notification(
    db: &DatabaseConnection,
    user_id: i32,
    diary_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        category: ActiveValue::Set(NotificationCategory::Diary),
        content: ActiveValue::Set(format!("Notification {}", next_id())),
        diary_id: ActiveValue::Set(Some(diary_id)),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
