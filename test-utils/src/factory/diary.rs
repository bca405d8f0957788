//! Diary factory for creating test diary entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Days, NaiveDate, Utc};
use entity::diary::Privacy;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test diary entries with customizable fields.
///
/// Every factory invocation lands on a distinct calendar day by default so
/// tests do not trip the one-diary-per-day unique index unless they mean to.
/// `entry_date` and `created_at` stay consistent with each other unless both
/// are overridden explicitly.
pub struct DiaryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    content: String,
    mood: Option<String>,
    emoji: Option<String>,
    privacy: Privacy,
    background_color: Option<String>,
    entry_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl<'a> DiaryFactory<'a> {
    /// Creates a new DiaryFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Diary {id}"`, content: `"Content {id}"`
    /// - privacy: `Public`, no mood/emoji/background
    /// - entry_date: a unique day per invocation, created_at at noon UTC of it
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        // Spread entries over distinct days, newest for the highest id.
        let entry_date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(id))
            .unwrap();
        let created_at = entry_date.and_hms_opt(12, 0, 0).unwrap().and_utc();

        Self {
            db,
            user_id,
            title: format!("Diary {}", id),
            content: format!("Content {}", id),
            mood: None,
            emoji: None,
            privacy: Privacy::Public,
            background_color: None,
            entry_date,
            created_at,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Pins the entry to a specific calendar day, moving created_at with it.
    pub fn entry_date(mut self, date: NaiveDate) -> Self {
        self.entry_date = date;
        self.created_at = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the diary entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::diary::Model)` - Created diary entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::diary::Model, DbErr> {
        entity::diary::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            mood: ActiveValue::Set(self.mood),
            emoji: ActiveValue::Set(self.emoji),
            privacy: ActiveValue::Set(self.privacy),
            background_color: ActiveValue::Set(self.background_color),
            like_count: ActiveValue::Set(0),
            entry_date: ActiveValue::Set(self.entry_date),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public diary with default values for the given author.
///
/// Shorthand for `DiaryFactory::new(db, user_id).build().await`.
pub async fn create_diary(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::diary::Model, DbErr> {
    DiaryFactory::new(db, user_id).build().await
}

/// Creates a diary with the given privacy tier.
pub async fn create_diary_with_privacy(
    db: &DatabaseConnection,
    user_id: i32,
    privacy: Privacy,
) -> Result<entity::diary::Model, DbErr> {
    DiaryFactory::new(db, user_id).privacy(privacy).build().await
}
