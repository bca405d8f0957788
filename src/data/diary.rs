//! Diary data repository for database operations.
//!
//! Covers the diary table itself plus its three attachment tables (music,
//! weather, image). Feed queries join the author row and share one ordering:
//! `created_at DESC, id DESC` so pages are deterministic even when several
//! entries share a timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use entity::diary::Privacy;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::diary::{PostMusicDto, PostWeatherDto};

/// User-authored diary fields shared by create and update.
#[derive(Debug, Clone)]
pub struct DiaryContentParams {
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
    pub emoji: Option<String>,
    pub privacy: Privacy,
    pub background_color: Option<String>,
}

/// A diary row joined with its author.
pub type DiaryWithAuthor = (entity::diary::Model, Option<entity::user::Model>);

/// Repository providing database operations for diaries and attachments.
pub struct DiaryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiaryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a diary row.
    ///
    /// `entry_date` is materialized from `created_at`'s calendar date; the
    /// unique index on (user_id, entry_date) rejects a second entry for the
    /// same day, which callers map to a conflict via `DbErr::sql_err()`.
    ///
    /// # Arguments
    /// - `user_id` - Author of the entry
    /// - `params` - User-authored diary fields
    /// - `created_at` - Creation timestamp; also determines the entry date
    ///
    /// # Returns
    /// - `Ok(Model)` - The created diary
    /// - `Err(DbErr)` - Database error, including the daily-post uniqueness violation
    pub async fn create(
        &self,
        user_id: i32,
        params: DiaryContentParams,
        created_at: DateTime<Utc>,
    ) -> Result<entity::diary::Model, DbErr> {
        let diary = entity::diary::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            mood: ActiveValue::Set(params.mood),
            emoji: ActiveValue::Set(params.emoji),
            privacy: ActiveValue::Set(params.privacy),
            background_color: ActiveValue::Set(params.background_color),
            like_count: ActiveValue::Set(0),
            entry_date: ActiveValue::Set(created_at.date_naive()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        entity::prelude::Diary::insert(diary)
            .exec_with_returning(self.db)
            .await
    }

    /// Finds a diary by its primary key.
    pub async fn find_by_id(&self, diary_id: i32) -> Result<Option<entity::diary::Model>, DbErr> {
        entity::prelude::Diary::find_by_id(diary_id)
            .one(self.db)
            .await
    }

    /// Finds a diary together with its author row.
    pub async fn find_by_id_with_author(
        &self,
        diary_id: i32,
    ) -> Result<Option<DiaryWithAuthor>, DbErr> {
        entity::prelude::Diary::find_by_id(diary_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// One page of a single user's diaries, every privacy level.
    pub async fn page_by_owner(
        &self,
        owner_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DiaryWithAuthor>, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(owner_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::diary::Column::CreatedAt)
            .order_by_desc(entity::diary::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// One page of public diaries across all users.
    pub async fn page_public(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DiaryWithAuthor>, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::Privacy.eq(Privacy::Public))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::diary::Column::CreatedAt)
            .order_by_desc(entity::diary::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// One page of diaries by the given authors at the given privacy levels.
    ///
    /// The mate feed calls this with the viewer's accepted mates and
    /// `[Public, Mate]`. An empty author list short-circuits to an empty
    /// page.
    pub async fn page_by_authors(
        &self,
        author_ids: &[i32],
        privacies: &[Privacy],
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DiaryWithAuthor>, DbErr> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.is_in(author_ids.iter().copied()))
            .filter(entity::diary::Column::Privacy.is_in(privacies.iter().cloned()))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::diary::Column::CreatedAt)
            .order_by_desc(entity::diary::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// All of a user's diaries within a date range, optionally privacy-filtered.
    ///
    /// Backs the calendar view; `privacies` of `None` means the viewer is
    /// the owner and sees everything.
    pub async fn range_for_user(
        &self,
        user_id: i32,
        from: NaiveDate,
        to: NaiveDate,
        privacies: Option<&[Privacy]>,
    ) -> Result<Vec<entity::diary::Model>, DbErr> {
        let mut query = entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .filter(entity::diary::Column::EntryDate.between(from, to));

        if let Some(privacies) = privacies {
            query = query.filter(entity::diary::Column::Privacy.is_in(privacies.iter().cloned()));
        }

        query
            .order_by_asc(entity::diary::Column::EntryDate)
            .all(self.db)
            .await
    }

    /// Updates the user-authored fields of a diary.
    pub async fn update(
        &self,
        diary: entity::diary::Model,
        params: DiaryContentParams,
    ) -> Result<entity::diary::Model, DbErr> {
        use sea_orm::ActiveModelTrait;

        let mut active: entity::diary::ActiveModel = diary.into();
        active.title = ActiveValue::Set(params.title);
        active.content = ActiveValue::Set(params.content);
        active.mood = ActiveValue::Set(params.mood);
        active.emoji = ActiveValue::Set(params.emoji);
        active.privacy = ActiveValue::Set(params.privacy);
        active.background_color = ActiveValue::Set(params.background_color);

        active.update(self.db).await
    }

    /// Deletes a diary row.
    pub async fn delete(&self, diary_id: i32) -> Result<(), DbErr> {
        entity::prelude::Diary::delete_by_id(diary_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adds `delta` to a diary's denormalized like counter.
    ///
    /// Runs in the same transaction as the like-row insert or delete so the
    /// counter never drifts from `COUNT(likes)`.
    pub async fn adjust_like_count(&self, diary_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Diary::update_many()
            .col_expr(
                entity::diary::Column::LikeCount,
                Expr::col(entity::diary::Column::LikeCount).add(delta),
            )
            .filter(entity::diary::Column::Id.eq(diary_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    // Attachment tables. Music and weather are one-row-per-diary (unique
    // diary_id); images are ordered 0..N-1 with a unique (diary_id, order).

    /// Inserts the music attachment for a new diary.
    pub async fn create_music(&self, diary_id: i32, music: PostMusicDto) -> Result<(), DbErr> {
        let row = entity::music::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            music_url: ActiveValue::Set(music.music_url),
            title: ActiveValue::Set(music.title),
            artist: ActiveValue::Set(music.artist),
            ..Default::default()
        };

        entity::prelude::Music::insert(row).exec(self.db).await?;
        Ok(())
    }

    /// Replaces the music attachment: upsert when present, delete when not.
    pub async fn put_music(
        &self,
        diary_id: i32,
        music: Option<PostMusicDto>,
    ) -> Result<(), DbErr> {
        let Some(music) = music else {
            entity::prelude::Music::delete_many()
                .filter(entity::music::Column::DiaryId.eq(diary_id))
                .exec(self.db)
                .await?;
            return Ok(());
        };

        let row = entity::music::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            music_url: ActiveValue::Set(music.music_url),
            title: ActiveValue::Set(music.title),
            artist: ActiveValue::Set(music.artist),
            ..Default::default()
        };

        entity::prelude::Music::insert(row)
            .on_conflict(
                OnConflict::column(entity::music::Column::DiaryId)
                    .update_columns([
                        entity::music::Column::MusicUrl,
                        entity::music::Column::Title,
                        entity::music::Column::Artist,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Music rows for a batch of diaries.
    pub async fn music_for(&self, diary_ids: &[i32]) -> Result<Vec<entity::music::Model>, DbErr> {
        if diary_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Music::find()
            .filter(entity::music::Column::DiaryId.is_in(diary_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// A user's music attachments joined with their diary rows, newest
    /// entry first.
    ///
    /// Backs the music-history view; `privacies` of `None` means the viewer
    /// is the owner and sees music from every tier.
    pub async fn music_history(
        &self,
        user_id: i32,
        privacies: Option<&[Privacy]>,
    ) -> Result<Vec<(entity::music::Model, Option<entity::diary::Model>)>, DbErr> {
        let mut query = entity::prelude::Music::find()
            .find_also_related(entity::prelude::Diary)
            .filter(entity::diary::Column::UserId.eq(user_id));

        if let Some(privacies) = privacies {
            query = query.filter(entity::diary::Column::Privacy.is_in(privacies.iter().cloned()));
        }

        query
            .order_by_desc(entity::diary::Column::CreatedAt)
            .order_by_desc(entity::diary::Column::Id)
            .all(self.db)
            .await
    }

    /// Inserts the weather attachment for a new diary.
    pub async fn create_weather(
        &self,
        diary_id: i32,
        weather: PostWeatherDto,
    ) -> Result<(), DbErr> {
        let row = entity::weather::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            location: ActiveValue::Set(weather.location),
            icon: ActiveValue::Set(weather.icon),
            avg_temperature: ActiveValue::Set(weather.avg_temperature),
            ..Default::default()
        };

        entity::prelude::Weather::insert(row).exec(self.db).await?;
        Ok(())
    }

    /// Replaces the weather attachment: upsert when present, delete when not.
    pub async fn put_weather(
        &self,
        diary_id: i32,
        weather: Option<PostWeatherDto>,
    ) -> Result<(), DbErr> {
        let Some(weather) = weather else {
            entity::prelude::Weather::delete_many()
                .filter(entity::weather::Column::DiaryId.eq(diary_id))
                .exec(self.db)
                .await?;
            return Ok(());
        };

        let row = entity::weather::ActiveModel {
            diary_id: ActiveValue::Set(diary_id),
            location: ActiveValue::Set(weather.location),
            icon: ActiveValue::Set(weather.icon),
            avg_temperature: ActiveValue::Set(weather.avg_temperature),
            ..Default::default()
        };

        entity::prelude::Weather::insert(row)
            .on_conflict(
                OnConflict::column(entity::weather::Column::DiaryId)
                    .update_columns([
                        entity::weather::Column::Location,
                        entity::weather::Column::Icon,
                        entity::weather::Column::AvgTemperature,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Weather rows for a batch of diaries.
    pub async fn weather_for(
        &self,
        diary_ids: &[i32],
    ) -> Result<Vec<entity::weather::Model>, DbErr> {
        if diary_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Weather::find()
            .filter(entity::weather::Column::DiaryId.is_in(diary_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Inserts image rows in caller order, `image_order` running 0..N-1.
    pub async fn create_images(&self, diary_id: i32, keys: &[String]) -> Result<(), DbErr> {
        if keys.is_empty() {
            return Ok(());
        }

        let rows = keys.iter().enumerate().map(|(order, key)| {
            entity::image::ActiveModel {
                diary_id: ActiveValue::Set(diary_id),
                image_url: ActiveValue::Set(key.clone()),
                image_order: ActiveValue::Set(order as i32),
                ..Default::default()
            }
        });

        entity::prelude::Image::insert_many(rows)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces a diary's images with the given ordered list.
    ///
    /// Upserts each slot by (diary_id, image_order), then deletes any rows
    /// beyond the new length.
    pub async fn put_images(&self, diary_id: i32, keys: &[String]) -> Result<(), DbErr> {
        for (order, key) in keys.iter().enumerate() {
            let row = entity::image::ActiveModel {
                diary_id: ActiveValue::Set(diary_id),
                image_url: ActiveValue::Set(key.clone()),
                image_order: ActiveValue::Set(order as i32),
                ..Default::default()
            };

            entity::prelude::Image::insert(row)
                .on_conflict(
                    OnConflict::columns([
                        entity::image::Column::DiaryId,
                        entity::image::Column::ImageOrder,
                    ])
                    .update_columns([entity::image::Column::ImageUrl])
                    .to_owned(),
                )
                .exec(self.db)
                .await?;
        }

        entity::prelude::Image::delete_many()
            .filter(entity::image::Column::DiaryId.eq(diary_id))
            .filter(entity::image::Column::ImageOrder.gte(keys.len() as i32))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Image rows for a batch of diaries, ordered by `image_order`.
    pub async fn images_for(&self, diary_ids: &[i32]) -> Result<Vec<entity::image::Model>, DbErr> {
        if diary_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Image::find()
            .filter(entity::image::Column::DiaryId.is_in(diary_ids.iter().copied()))
            .order_by_asc(entity::image::Column::DiaryId)
            .order_by_asc(entity::image::Column::ImageOrder)
            .all(self.db)
            .await
    }

    /// Deletes all attachment rows for a diary.
    ///
    /// Part of the explicit delete pipeline; runs before the diary row is
    /// removed.
    pub async fn delete_attachments(&self, diary_id: i32) -> Result<(), DbErr> {
        entity::prelude::Music::delete_many()
            .filter(entity::music::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;

        entity::prelude::Weather::delete_many()
            .filter(entity::weather::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;

        entity::prelude::Image::delete_many()
            .filter(entity::image::Column::DiaryId.eq(diary_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
