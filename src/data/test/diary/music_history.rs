use super::*;

use test_utils::factory::music::create_music;

/// Tests the privacy filter on the music join.
///
/// Expected: only tracks from entries at the allowed tiers, newest first
#[tokio::test]
async fn filters_by_privacy_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let public = create_diary_with_privacy(db, user.id, Privacy::Public).await?;
    let mate = create_diary_with_privacy(db, user.id, Privacy::Mate).await?;
    let private = create_diary_with_privacy(db, user.id, Privacy::Private).await?;
    create_music(db, public.id).await?;
    create_music(db, mate.id).await?;
    create_music(db, private.id).await?;

    let repo = DiaryRepository::new(db);

    let all = repo.music_history(user.id, None).await?;
    let all_ids: Vec<i32> = all.iter().map(|(music, _)| music.diary_id).collect();
    assert_eq!(all_ids, vec![private.id, mate.id, public.id]);

    let public_only = repo.music_history(user.id, Some(&[Privacy::Public])).await?;
    let public_ids: Vec<i32> = public_only.iter().map(|(music, _)| music.diary_id).collect();
    assert_eq!(public_ids, vec![public.id]);

    Ok(())
}

/// Tests that other users' tracks and music-less entries are excluded.
///
/// Expected: only the target user's diaries that carry music
#[tokio::test]
async fn scopes_to_the_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listener = create_user(db).await?;
    let other = create_user(db).await?;

    let with_music = create_diary(db, listener.id).await?;
    create_diary(db, listener.id).await?; // no music attached
    let others_diary = create_diary(db, other.id).await?;
    create_music(db, with_music.id).await?;
    create_music(db, others_diary.id).await?;

    let repo = DiaryRepository::new(db);
    let rows = repo.music_history(listener.id, None).await?;

    assert_eq!(rows.len(), 1);
    let (music, diary) = &rows[0];
    assert_eq!(music.diary_id, with_music.id);
    assert_eq!(diary.as_ref().map(|d| d.id), Some(with_music.id));

    Ok(())
}
