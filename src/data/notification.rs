//! Notification data repository for database operations.

use entity::notification::NotificationCategory;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for user notifications.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a notification for a recipient.
    ///
    /// `diary_id` links diary-category notifications to the entry they are
    /// about; mate-category rows leave it empty.
    pub async fn create(
        &self,
        user_id: i32,
        category: NotificationCategory,
        content: String,
        diary_id: Option<i32>,
    ) -> Result<(), DbErr> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            category: ActiveValue::Set(category),
            content: ActiveValue::Set(content),
            diary_id: ActiveValue::Set(diary_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        };

        entity::prelude::Notification::insert(notification)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Finds a notification by its primary key.
    pub async fn find_by_id(
        &self,
        notification_id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await
    }

    /// The recipient's unread notifications, newest first.
    pub async fn unread_for(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    /// The recipient's already-read notifications, newest first.
    pub async fn read_for(&self, user_id: i32) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(true))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks a notification as read.
    pub async fn mark_read(
        &self,
        notification: entity::notification::Model,
    ) -> Result<entity::notification::Model, DbErr> {
        let mut active: entity::notification::ActiveModel = notification.into();
        active.is_read = ActiveValue::Set(true);

        active.update(self.db).await
    }
}
