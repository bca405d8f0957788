//! Music attachment factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a music attachment for the given diary.
///
/// # Returns
/// - `Ok(entity::music::Model)` - Created music entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_music(
    db: &DatabaseConnection,
    diary_id: i32,
) -> Result<entity::music::Model, DbErr> {
    let id = next_id();

    entity::music::ActiveModel {
        diary_id: ActiveValue::Set(diary_id),
        music_url: ActiveValue::Set(format!("https://music.test/{}", id)),
        title: ActiveValue::Set(format!("Track {}", id)),
        artist: ActiveValue::Set(format!("Artist {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
