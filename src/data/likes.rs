//! Like data repository for database operations.
//!
//! One row per (user, diary) pair, enforced by a unique index. The
//! denormalized `diary.like_count` is adjusted by [`DiaryRepository`] inside
//! the same transaction as these inserts and deletes.
//!
//! [`DiaryRepository`]: crate::data::diary::DiaryRepository

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for diary likes.
pub struct LikeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LikeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether the user has liked the diary.
    pub async fn exists(&self, user_id: i32, diary_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Likes::find()
            .filter(entity::likes::Column::UserId.eq(user_id))
            .filter(entity::likes::Column::DiaryId.eq(diary_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a like row.
    ///
    /// The unique (user_id, diary_id) index turns a duplicate into a `DbErr`
    /// which the service maps to a conflict.
    pub async fn insert(&self, user_id: i32, diary_id: i32) -> Result<(), DbErr> {
        let like = entity::likes::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            diary_id: ActiveValue::Set(diary_id),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        };

        entity::prelude::Likes::insert(like).exec(self.db).await?;
        Ok(())
    }

    /// Deletes the user's like on a diary.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows removed (0 when no like existed)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, diary_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Likes::delete_many()
            .filter(entity::likes::Column::UserId.eq(user_id))
            .filter(entity::likes::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Of the given diaries, the IDs the user has liked.
    ///
    /// Batch lookup used when assembling feed pages.
    pub async fn liked_diary_ids(
        &self,
        user_id: i32,
        diary_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if diary_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Likes::find()
            .filter(entity::likes::Column::UserId.eq(user_id))
            .filter(entity::likes::Column::DiaryId.is_in(diary_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.diary_id).collect())
    }

    /// Counts the like rows for a diary.
    pub async fn count_for(&self, diary_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Likes::find()
            .filter(entity::likes::Column::DiaryId.eq(diary_id))
            .count(self.db)
            .await
    }

    /// Deletes every like on a diary; part of the diary delete pipeline.
    pub async fn delete_by_diary(&self, diary_id: i32) -> Result<(), DbErr> {
        entity::prelude::Likes::delete_many()
            .filter(entity::likes::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
