//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on the given diary by the given writer.
pub async fn create_comment(
    db: &DatabaseConnection,
    diary_id: i32,
    writer_user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        diary_id: ActiveValue::Set(diary_id),
        writer_user_id: ActiveValue::Set(writer_user_id),
        mentioned_user_id: ActiveValue::Set(None),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a comment that mentions another user.
pub async fn create_comment_with_mention(
    db: &DatabaseConnection,
    diary_id: i32,
    writer_user_id: i32,
    mentioned_user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        diary_id: ActiveValue::Set(diary_id),
        writer_user_id: ActiveValue::Set(writer_user_id),
        mentioned_user_id: ActiveValue::Set(Some(mentioned_user_id)),
        content: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
