//! Like toggling with a denormalized counter.
//!
//! The like row and the counter move together inside one transaction, and
//! the unique (user_id, diary_id) index is the arbiter for duplicates, so
//! `diary.like_count == COUNT(likes)` holds after any sequence of calls,
//! concurrent duplicates included.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{diary::DiaryRepository, likes::LikeRepository},
    error::AppError,
    service::{access, conflict_on_unique},
};

pub struct LikeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LikeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Likes a diary on behalf of the viewer.
    ///
    /// # Returns
    /// - `Ok(())` - Like recorded and counter incremented
    /// - `Err(AppError::NotFound)` - Unknown diary
    /// - `Err(AppError::Forbidden)` - Privacy tier excludes the viewer
    /// - `Err(AppError::Conflict)` - Already liked; nothing changes
    pub async fn like(&self, viewer_id: i32, diary_id: i32) -> Result<(), AppError> {
        let diary = self.viewable_diary(viewer_id, diary_id).await?;

        let txn = self.db.begin().await?;

        LikeRepository::new(&txn)
            .insert(viewer_id, diary.id)
            .await
            .map_err(|err| conflict_on_unique(err, "You have already liked this diary"))?;
        DiaryRepository::new(&txn)
            .adjust_like_count(diary.id, 1)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Removes the viewer's like from a diary.
    ///
    /// # Returns
    /// - `Ok(())` - Like removed and counter decremented
    /// - `Err(AppError::NotFound)` - Unknown diary, or no like to remove;
    ///   the counter is untouched either way
    pub async fn unlike(&self, viewer_id: i32, diary_id: i32) -> Result<(), AppError> {
        let Some(diary) = DiaryRepository::new(self.db).find_by_id(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        let txn = self.db.begin().await?;

        let removed = LikeRepository::new(&txn).delete(viewer_id, diary.id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Like not found".to_string()));
        }

        DiaryRepository::new(&txn)
            .adjust_like_count(diary.id, -1)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Whether the viewer has liked the diary.
    ///
    /// # Returns
    /// - `Ok(bool)` - Liked status
    /// - `Err(AppError::NotFound)` - Unknown diary
    /// - `Err(AppError::Forbidden)` - Privacy tier excludes the viewer
    pub async fn liked(&self, viewer_id: i32, diary_id: i32) -> Result<bool, AppError> {
        let diary = self.viewable_diary(viewer_id, diary_id).await?;

        let liked = LikeRepository::new(self.db)
            .exists(viewer_id, diary.id)
            .await?;

        Ok(liked)
    }

    async fn viewable_diary(
        &self,
        viewer_id: i32,
        diary_id: i32,
    ) -> Result<entity::diary::Model, AppError> {
        let Some(diary) = DiaryRepository::new(self.db).find_by_id(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        if !access::can_view(self.db, viewer_id, diary.user_id, diary.privacy).await? {
            return Err(AppError::Forbidden(
                "You do not have permission to view this diary".to_string(),
            ));
        }

        Ok(diary)
    }
}
