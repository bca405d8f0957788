//! Comments on diary entries.
//!
//! Posting runs behind the same privacy check as reading the diary, and
//! fans out notifications to the diary owner and any mentioned user in the
//! same transaction as the comment row.

use std::collections::HashMap;

use entity::notification::NotificationCategory;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        comment::CommentRepository, diary::DiaryRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        comment::{CommentDto, PostCommentDto},
        user::UserProfileDto,
    },
    service::{access, view::user_profile_dto},
    storage::ObjectStorage,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// Posts a comment on a diary.
    ///
    /// Notifies the diary owner and any mentioned user, skipping
    /// self-notifications, in the same transaction as the comment itself.
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The stored comment with presigned profiles
    /// - `Err(AppError::BadRequest)` - Empty content
    /// - `Err(AppError::NotFound)` - Unknown diary or mentioned user
    /// - `Err(AppError::Forbidden)` - Privacy tier excludes the writer
    pub async fn post(
        &self,
        writer_id: i32,
        diary_id: i32,
        dto: PostCommentDto,
    ) -> Result<CommentDto, AppError> {
        if dto.content.trim().is_empty() {
            return Err(AppError::BadRequest("Comment must not be empty".to_string()));
        }

        let Some(diary) = DiaryRepository::new(self.db).find_by_id(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        if !access::can_view(self.db, writer_id, diary.user_id, diary.privacy).await? {
            return Err(AppError::Forbidden(
                "You do not have permission to view this diary".to_string(),
            ));
        }

        if let Some(mentioned_id) = dto.mentioned_user_id {
            if UserRepository::new(self.db)
                .find_by_id(mentioned_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Mentioned user not found".to_string()));
            }
        }

        let writer = UserRepository::new(self.db)
            .find_by_id(writer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let txn = self.db.begin().await?;

        let comment = CommentRepository::new(&txn)
            .create(diary.id, writer_id, dto.mentioned_user_id, dto.content)
            .await?;

        let notifications = NotificationRepository::new(&txn);
        if diary.user_id != writer_id {
            notifications
                .create(
                    diary.user_id,
                    NotificationCategory::Diary,
                    format!("{} commented on your diary", writer.nickname),
                    Some(diary.id),
                )
                .await?;
        }
        if let Some(mentioned_id) = dto.mentioned_user_id {
            if mentioned_id != writer_id && mentioned_id != diary.user_id {
                notifications
                    .create(
                        mentioned_id,
                        NotificationCategory::Diary,
                        format!("{} mentioned you in a comment", writer.nickname),
                        Some(diary.id),
                    )
                    .await?;
            }
        }

        txn.commit().await?;

        self.to_dto(comment).await
    }

    /// Lists a diary's comments, newest first, with presigned profiles.
    ///
    /// # Returns
    /// - `Ok(Vec<CommentDto>)` - Comments visible to the viewer
    /// - `Err(AppError::NotFound)` - Unknown diary
    /// - `Err(AppError::Forbidden)` - Privacy tier excludes the viewer
    pub async fn list(&self, viewer_id: i32, diary_id: i32) -> Result<Vec<CommentDto>, AppError> {
        let Some(diary) = DiaryRepository::new(self.db).find_by_id(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        if !access::can_view(self.db, viewer_id, diary.user_id, diary.privacy).await? {
            return Err(AppError::Forbidden(
                "You do not have permission to view this diary".to_string(),
            ));
        }

        let comments = CommentRepository::new(self.db).list_for_diary(diary.id).await?;

        // One profile lookup and one presign per distinct user.
        let mut user_ids: Vec<i32> = comments
            .iter()
            .flat_map(|comment| {
                std::iter::once(comment.writer_user_id).chain(comment.mentioned_user_id)
            })
            .collect();
        user_ids.sort();
        user_ids.dedup();

        let profiles = self.profiles_by_id(&user_ids).await?;

        let mut dtos = Vec::with_capacity(comments.len());
        for comment in comments {
            let writer = profiles
                .get(&comment.writer_user_id)
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Comment {} references missing writer {}",
                        comment.id, comment.writer_user_id
                    ))
                })?;
            let mentioned = comment
                .mentioned_user_id
                .and_then(|id| profiles.get(&id).cloned());

            dtos.push(CommentDto {
                id: comment.id,
                diary_id: comment.diary_id,
                writer,
                mentioned,
                content: comment.content,
                created_at: comment.created_at,
            });
        }

        Ok(dtos)
    }

    /// Edits a comment; only the writer may do so.
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The updated comment
    /// - `Err(AppError::BadRequest)` - Empty content
    /// - `Err(AppError::NotFound)` - Unknown comment or mentioned user
    /// - `Err(AppError::Forbidden)` - Caller did not write the comment
    pub async fn put(
        &self,
        writer_id: i32,
        comment_id: i32,
        dto: PostCommentDto,
    ) -> Result<CommentDto, AppError> {
        if dto.content.trim().is_empty() {
            return Err(AppError::BadRequest("Comment must not be empty".to_string()));
        }

        let Some(comment) = CommentRepository::new(self.db).find_by_id(comment_id).await? else {
            return Err(AppError::NotFound("Comment not found".to_string()));
        };

        if comment.writer_user_id != writer_id {
            return Err(AppError::Forbidden(
                "Only the writer may edit this comment".to_string(),
            ));
        }

        if let Some(mentioned_id) = dto.mentioned_user_id {
            if UserRepository::new(self.db)
                .find_by_id(mentioned_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Mentioned user not found".to_string()));
            }
        }

        let updated = CommentRepository::new(self.db)
            .update(comment, dto.content, dto.mentioned_user_id)
            .await?;

        self.to_dto(updated).await
    }

    /// Deletes a comment; only the writer may do so.
    ///
    /// # Returns
    /// - `Ok(())` - Comment removed
    /// - `Err(AppError::NotFound)` - Unknown comment
    /// - `Err(AppError::Forbidden)` - Caller did not write the comment
    pub async fn delete(&self, writer_id: i32, comment_id: i32) -> Result<(), AppError> {
        let Some(comment) = CommentRepository::new(self.db).find_by_id(comment_id).await? else {
            return Err(AppError::NotFound("Comment not found".to_string()));
        };

        if comment.writer_user_id != writer_id {
            return Err(AppError::Forbidden(
                "Only the writer may delete this comment".to_string(),
            ));
        }

        CommentRepository::new(self.db).delete(comment.id).await?;

        Ok(())
    }

    async fn profiles_by_id(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, UserProfileDto>, AppError> {
        let users = UserRepository::new(self.db).find_by_ids(user_ids).await?;

        let mut profiles = HashMap::with_capacity(users.len());
        for user in &users {
            profiles.insert(user.id, user_profile_dto(self.storage, user).await?);
        }

        Ok(profiles)
    }

    async fn to_dto(&self, comment: entity::comment::Model) -> Result<CommentDto, AppError> {
        let mut ids = vec![comment.writer_user_id];
        ids.extend(comment.mentioned_user_id);

        let profiles = self.profiles_by_id(&ids).await?;

        let writer = profiles
            .get(&comment.writer_user_id)
            .cloned()
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Comment {} references missing writer {}",
                    comment.id, comment.writer_user_id
                ))
            })?;

        Ok(CommentDto {
            id: comment.id,
            diary_id: comment.diary_id,
            writer,
            mentioned: comment
                .mentioned_user_id
                .and_then(|id| profiles.get(&id).cloned()),
            content: comment.content,
            created_at: comment.created_at,
        })
    }
}
