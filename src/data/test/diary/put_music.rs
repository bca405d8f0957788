use super::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::model::diary::PostMusicDto;

fn music(title: &str) -> PostMusicDto {
    PostMusicDto {
        music_url: "https://example.com/track".to_string(),
        title: title.to_string(),
        artist: "Artist".to_string(),
    }
}

async fn music_rows(
    db: &sea_orm::DatabaseConnection,
    diary_id: i32,
) -> Result<Vec<entity::music::Model>, DbErr> {
    entity::prelude::Music::find()
        .filter(entity::music::Column::DiaryId.eq(diary_id))
        .all(db)
        .await
}

/// Tests the one-row-per-diary upsert for the music attachment.
///
/// Expected: insert on first put, in-place replace on second, delete on None
#[tokio::test]
async fn upserts_and_deletes_by_diary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let diary = create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);

    repo.put_music(diary.id, Some(music("First song"))).await?;
    let rows = music_rows(db, diary.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "First song");

    repo.put_music(diary.id, Some(music("Second song"))).await?;
    let rows = music_rows(db, diary.id).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Second song");

    repo.put_music(diary.id, None).await?;
    assert!(music_rows(db, diary.id).await?.is_empty());

    Ok(())
}
