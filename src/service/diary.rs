//! Diary write pipeline and single-entry reads.
//!
//! All multi-row writes (entry plus music, weather and image rows) run in
//! one transaction; a failure anywhere rolls the whole write back. The
//! one-entry-per-day rule is enforced by the store's unique
//! (user_id, entry_date) index rather than a check-then-insert, so two
//! simultaneous posts cannot both land.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        comment::CommentRepository,
        diary::{DiaryContentParams, DiaryRepository},
        likes::LikeRepository,
    },
    error::AppError,
    model::diary::{DiaryDto, PostDiaryDto},
    service::{access, conflict_on_unique, view::assemble_diary_views},
    storage::ObjectStorage,
};

pub struct DiaryService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> DiaryService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// Creates today's diary entry with its attachments.
    ///
    /// # Arguments
    /// - `user_id` - The author
    /// - `dto` - Entry content, privacy, and optional attachments
    ///
    /// # Returns
    /// - `Ok(DiaryDto)` - The assembled view of the new entry
    /// - `Err(AppError::BadRequest)` - Missing or malformed fields
    /// - `Err(AppError::Conflict)` - The author already posted today
    pub async fn post(&self, user_id: i32, dto: PostDiaryDto) -> Result<DiaryDto, AppError> {
        validate(&dto)?;

        let txn = self.db.begin().await?;
        let repo = DiaryRepository::new(&txn);

        let diary = repo
            .create(user_id, content_params(&dto), Utc::now())
            .await
            .map_err(|err| conflict_on_unique(err, "A diary entry already exists for today"))?;

        if let Some(music) = dto.music {
            repo.create_music(diary.id, music).await?;
        }
        if let Some(weather) = dto.weather {
            repo.create_weather(diary.id, weather).await?;
        }
        repo.create_images(diary.id, &dto.img_urls).await?;

        txn.commit().await?;

        self.get(user_id, diary.id).await
    }

    /// Fetches a single entry as seen by `viewer_id`.
    ///
    /// # Returns
    /// - `Ok(DiaryDto)` - The assembled view
    /// - `Err(AppError::NotFound)` - No such entry
    /// - `Err(AppError::Forbidden)` - Privacy tier excludes the viewer
    pub async fn get(&self, viewer_id: i32, diary_id: i32) -> Result<DiaryDto, AppError> {
        let repo = DiaryRepository::new(self.db);

        let Some((diary, author)) = repo.find_by_id_with_author(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        if !access::can_view(self.db, viewer_id, diary.user_id, diary.privacy).await? {
            return Err(AppError::Forbidden(
                "You do not have permission to view this diary".to_string(),
            ));
        }

        let views = assemble_diary_views(self.db, self.storage, viewer_id, vec![(diary, author)])
            .await?;

        views
            .into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError(format!("Diary {} view assembly came back empty", diary_id)))
    }

    /// Replaces an entry's content and attachments.
    ///
    /// Music and weather are upserted by diary, images by (diary, order)
    /// with surplus rows trimmed, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(DiaryDto)` - The updated view
    /// - `Err(AppError::NotFound)` - No such entry
    /// - `Err(AppError::Forbidden)` - Caller is not the author
    pub async fn put(
        &self,
        user_id: i32,
        diary_id: i32,
        dto: PostDiaryDto,
    ) -> Result<DiaryDto, AppError> {
        validate(&dto)?;

        let Some(diary) = DiaryRepository::new(self.db).find_by_id(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        if diary.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the author may edit this diary".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let repo = DiaryRepository::new(&txn);

        repo.update(diary, content_params(&dto)).await?;
        repo.put_music(diary_id, dto.music).await?;
        repo.put_weather(diary_id, dto.weather).await?;
        repo.put_images(diary_id, &dto.img_urls).await?;

        txn.commit().await?;

        self.get(user_id, diary_id).await
    }

    /// Deletes an entry and everything hanging off it.
    ///
    /// Likes, comments and attachments are removed explicitly before the
    /// diary row, inside one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Entry and dependents removed
    /// - `Err(AppError::NotFound)` - No such entry
    /// - `Err(AppError::Forbidden)` - Caller is not the author
    pub async fn delete(&self, user_id: i32, diary_id: i32) -> Result<(), AppError> {
        let Some(diary) = DiaryRepository::new(self.db).find_by_id(diary_id).await? else {
            return Err(AppError::NotFound("Diary not found".to_string()));
        };

        if diary.user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the author may delete this diary".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        LikeRepository::new(&txn).delete_by_diary(diary_id).await?;
        CommentRepository::new(&txn).delete_by_diary(diary_id).await?;

        let repo = DiaryRepository::new(&txn);
        repo.delete_attachments(diary_id).await?;
        repo.delete(diary_id).await?;

        txn.commit().await?;

        Ok(())
    }
}

fn content_params(dto: &PostDiaryDto) -> DiaryContentParams {
    DiaryContentParams {
        title: dto.title.clone(),
        content: dto.content.clone(),
        mood: dto.mood.clone(),
        emoji: dto.emoji.clone(),
        privacy: dto.privacy,
        background_color: dto.background_color.clone(),
    }
}

fn validate(dto: &PostDiaryDto) -> Result<(), AppError> {
    if dto.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if dto.content.trim().is_empty() {
        return Err(AppError::BadRequest("Content must not be empty".to_string()));
    }

    if let Some(music) = &dto.music {
        if music.music_url.trim().is_empty()
            || music.title.trim().is_empty()
            || music.artist.trim().is_empty()
        {
            return Err(AppError::BadRequest(
                "Music attachment requires url, title and artist".to_string(),
            ));
        }
    }

    if let Some(weather) = &dto.weather {
        if weather.location.trim().is_empty() || weather.icon.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Weather attachment requires location and icon".to_string(),
            ));
        }
    }

    Ok(())
}
