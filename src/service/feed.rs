//! Privacy-filtered diary feeds and the calendar view.
//!
//! Three feeds share one ordering (`created_at DESC, id DESC`) and one
//! offset-pagination scheme; they differ only in which rows are eligible:
//! my-posts shows the viewer's own entries at every tier, the mate feed
//! shows accepted mates' public and mate-tier entries, and explore shows
//! public entries from anyone.

use chrono::{Days, Months, NaiveDate};
use entity::diary::Privacy;
use sea_orm::DatabaseConnection;

use crate::{
    data::{diary::DiaryRepository, mate::MateRepository, user::UserRepository},
    error::AppError,
    model::{
        api::PaginationQuery,
        diary::{CalendarEntryDto, DiaryDto},
    },
    service::{access, view::assemble_diary_views},
    storage::ObjectStorage,
};

pub struct FeedService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> FeedService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// One page of the viewer's own entries, every privacy tier.
    pub async fn my_posts(
        &self,
        viewer_id: i32,
        pagination: &PaginationQuery,
    ) -> Result<Vec<DiaryDto>, AppError> {
        let rows = DiaryRepository::new(self.db)
            .page_by_owner(viewer_id, pagination.offset(), pagination.limit())
            .await?;

        assemble_diary_views(self.db, self.storage, viewer_id, rows).await
    }

    /// One page of accepted mates' entries at public and mate tier.
    ///
    /// A viewer with no mates gets an empty page, not an error.
    pub async fn mate_feed(
        &self,
        viewer_id: i32,
        pagination: &PaginationQuery,
    ) -> Result<Vec<DiaryDto>, AppError> {
        let mate_ids = MateRepository::new(self.db).mate_ids(viewer_id).await?;

        let rows = DiaryRepository::new(self.db)
            .page_by_authors(
                &mate_ids,
                &[Privacy::Public, Privacy::Mate],
                pagination.offset(),
                pagination.limit(),
            )
            .await?;

        assemble_diary_views(self.db, self.storage, viewer_id, rows).await
    }

    /// One page of public entries from every user.
    pub async fn explore(
        &self,
        viewer_id: i32,
        pagination: &PaginationQuery,
    ) -> Result<Vec<DiaryDto>, AppError> {
        let rows = DiaryRepository::new(self.db)
            .page_public(pagination.offset(), pagination.limit())
            .await?;

        assemble_diary_views(self.db, self.storage, viewer_id, rows).await
    }

    /// A month of a user's entries as (date, id, emoji, mood) cells.
    ///
    /// The visible tiers depend on the viewer's relation to the target:
    /// owners see everything, mates see public and mate tier, strangers
    /// public only.
    ///
    /// # Arguments
    /// - `viewer_id` - The requesting user
    /// - `target_user_id` - Whose calendar to read
    /// - `month` - Calendar month in `YYYY-MM` form
    ///
    /// # Returns
    /// - `Ok(Vec<CalendarEntryDto>)` - Visible entries, earliest date first
    /// - `Err(AppError::BadRequest)` - Unparsable month
    /// - `Err(AppError::NotFound)` - Unknown target user
    pub async fn calendar(
        &self,
        viewer_id: i32,
        target_user_id: i32,
        month: &str,
    ) -> Result<Vec<CalendarEntryDto>, AppError> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
            .map_err(|_| AppError::BadRequest("Month must be in YYYY-MM format".to_string()))?;
        let last = first + Months::new(1) - Days::new(1);

        if UserRepository::new(self.db)
            .find_by_id(target_user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let privacies = access::visible_tiers(self.db, viewer_id, target_user_id).await?;

        let rows = DiaryRepository::new(self.db)
            .range_for_user(target_user_id, first, last, privacies)
            .await?;

        Ok(rows
            .into_iter()
            .map(|diary| CalendarEntryDto {
                date: diary.entry_date,
                diary_id: diary.id,
                emoji: diary.emoji,
                mood: diary.mood,
            })
            .collect())
    }
}
