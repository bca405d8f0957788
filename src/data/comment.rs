//! Comment data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Repository providing database operations for diary comments.
pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment.
    pub async fn create(
        &self,
        diary_id: i32,
        writer_user_id: i32,
        mentioned_user_id: Option<i32>,
        content: String,
    ) -> Result<entity::comment::Model, DbErr> {
        let comment = entity::comment::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            writer_user_id: ActiveValue::Set(writer_user_id),
            mentioned_user_id: ActiveValue::Set(mentioned_user_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        };

        entity::prelude::Comment::insert(comment)
            .exec_with_returning(self.db)
            .await
    }

    /// Finds a comment by its primary key.
    pub async fn find_by_id(
        &self,
        comment_id: i32,
    ) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(comment_id)
            .one(self.db)
            .await
    }

    /// All comments on a diary, newest first.
    pub async fn list_for_diary(
        &self,
        diary_id: i32,
    ) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::DiaryId.eq(diary_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    /// Rewrites a comment's content and mention.
    pub async fn update(
        &self,
        comment: entity::comment::Model,
        content: String,
        mentioned_user_id: Option<i32>,
    ) -> Result<entity::comment::Model, DbErr> {
        let mut active: entity::comment::ActiveModel = comment.into();
        active.content = ActiveValue::Set(content);
        active.mentioned_user_id = ActiveValue::Set(mentioned_user_id);

        active.update(self.db).await
    }

    /// Deletes a comment row.
    pub async fn delete(&self, comment_id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every comment on a diary; part of the diary delete pipeline.
    pub async fn delete_by_diary(&self, diary_id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
