//! Notification listing and read state.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::NotificationDto,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The user's unread notifications, newest first.
    pub async fn unread(&self, user_id: i32) -> Result<Vec<NotificationDto>, AppError> {
        let rows = NotificationRepository::new(self.db).unread_for(user_id).await?;
        Ok(rows.into_iter().map(to_dto).collect())
    }

    /// The user's read notifications, newest first.
    pub async fn read(&self, user_id: i32) -> Result<Vec<NotificationDto>, AppError> {
        let rows = NotificationRepository::new(self.db).read_for(user_id).await?;
        Ok(rows.into_iter().map(to_dto).collect())
    }

    /// Marks one of the user's notifications as read.
    ///
    /// Another recipient's notification is indistinguishable from a missing
    /// one.
    ///
    /// # Returns
    /// - `Ok(NotificationDto)` - The updated notification
    /// - `Err(AppError::NotFound)` - Unknown id, or not this user's
    pub async fn mark_read(
        &self,
        user_id: i32,
        notification_id: i32,
    ) -> Result<NotificationDto, AppError> {
        let repo = NotificationRepository::new(self.db);

        let Some(notification) = repo.find_by_id(notification_id).await? else {
            return Err(AppError::NotFound("Notification not found".to_string()));
        };

        if notification.user_id != user_id {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        let updated = repo.mark_read(notification).await?;

        Ok(to_dto(updated))
    }
}

fn to_dto(row: entity::notification::Model) -> NotificationDto {
    NotificationDto {
        id: row.id,
        category: row.category,
        content: row.content,
        diary_id: row.diary_id,
        is_read: row.is_read,
        created_at: row.created_at,
    }
}
