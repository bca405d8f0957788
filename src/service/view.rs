//! Batch assembly of diary views.
//!
//! Turns raw diary rows into the nested JSON served by feeds and single
//! reads: attachments fetched per batch (never row by row), the viewer's
//! like status bound per call, and every storage key replaced with a
//! presigned URL before it leaves the service layer.

use std::collections::{HashMap, HashSet};

use sea_orm::ConnectionTrait;

use crate::{
    data::{
        diary::{DiaryRepository, DiaryWithAuthor},
        likes::LikeRepository,
    },
    error::AppError,
    model::{
        diary::{DiaryBodyDto, DiaryDto, PostMusicDto, PostWeatherDto},
        user::UserProfileDto,
    },
    storage::{presign_optional, ObjectStorage},
};

/// Builds the compact profile DTO for a user, presigning the profile image.
pub(crate) async fn user_profile_dto(
    storage: &dyn ObjectStorage,
    user: &entity::user::Model,
) -> Result<UserProfileDto, AppError> {
    Ok(UserProfileDto {
        user_id: user.id,
        nickname: user.nickname.clone(),
        profile_img_url: presign_optional(storage, user.profile_img_url.as_deref()).await?,
    })
}

/// Assembles full diary views for a page of rows, in input order.
///
/// One query per attachment table for the whole batch, one like lookup for
/// the viewer, then per-row presigning of author and image keys.
pub(crate) async fn assemble_diary_views<C: ConnectionTrait>(
    db: &C,
    storage: &dyn ObjectStorage,
    viewer_id: i32,
    rows: Vec<DiaryWithAuthor>,
) -> Result<Vec<DiaryDto>, AppError> {
    let diary_ids: Vec<i32> = rows.iter().map(|(diary, _)| diary.id).collect();

    let diary_repo = DiaryRepository::new(db);
    let like_repo = LikeRepository::new(db);

    let mut music_by_diary: HashMap<i32, entity::music::Model> = diary_repo
        .music_for(&diary_ids)
        .await?
        .into_iter()
        .map(|row| (row.diary_id, row))
        .collect();

    let mut weather_by_diary: HashMap<i32, entity::weather::Model> = diary_repo
        .weather_for(&diary_ids)
        .await?
        .into_iter()
        .map(|row| (row.diary_id, row))
        .collect();

    // Rows arrive ordered by (diary_id, image_order); pushing in order keeps
    // each diary's list sorted.
    let mut images_by_diary: HashMap<i32, Vec<entity::image::Model>> = HashMap::new();
    for image in diary_repo.images_for(&diary_ids).await? {
        images_by_diary.entry(image.diary_id).or_default().push(image);
    }

    let liked: HashSet<i32> = like_repo
        .liked_diary_ids(viewer_id, &diary_ids)
        .await?
        .into_iter()
        .collect();

    let mut views = Vec::with_capacity(rows.len());

    for (diary, author) in rows {
        let Some(author) = author else {
            return Err(AppError::InternalError(format!(
                "Diary {} has no author row",
                diary.id
            )));
        };

        let user_profile = user_profile_dto(storage, &author).await?;

        let mut img_urls = Vec::new();
        for image in images_by_diary.remove(&diary.id).unwrap_or_default() {
            img_urls.push(storage.download_url(&image.image_url).await?);
        }

        let music = music_by_diary.remove(&diary.id).map(|row| PostMusicDto {
            music_url: row.music_url,
            title: row.title,
            artist: row.artist,
        });

        let weather = weather_by_diary.remove(&diary.id).map(|row| PostWeatherDto {
            location: row.location,
            icon: row.icon,
            avg_temperature: row.avg_temperature,
        });

        views.push(DiaryDto {
            id: diary.id,
            user_profile,
            like_count: diary.like_count,
            created_at: diary.created_at,
            liked: liked.contains(&diary.id),
            body: DiaryBodyDto {
                title: diary.title,
                content: diary.content,
                img_urls,
                mood: diary.mood,
                emoji: diary.emoji,
                privacy: diary.privacy,
                music,
                weather,
                background_color: diary.background_color,
            },
        });
    }

    Ok(views)
}
