//! Like factory.
//!
//! Inserts the raw like row only; `diary.like_count` maintenance lives in
//! the like service, so tests exercising the counter invariant should go
//! through the service instead.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a like row for the given user and diary.
pub async fn create_like(
    db: &DatabaseConnection,
    user_id: i32,
    diary_id: i32,
) -> Result<entity::likes::Model, DbErr> {
    entity::likes::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        diary_id: ActiveValue::Set(diary_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
