use super::*;

/// Tests the batch liked-status lookup used by feed assembly.
///
/// Expected: only the viewer's likes among the queried diaries come back
#[tokio::test]
async fn returns_only_viewers_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, liked) = create_user_with_diary(db).await?;
    let unliked = create_diary(db, author.id).await?;
    let viewer = create_user(db).await?;
    let other = create_user(db).await?;

    create_like(db, viewer.id, liked.id).await?;
    create_like(db, other.id, unliked.id).await?;

    let repo = LikeRepository::new(db);
    let ids = repo
        .liked_diary_ids(viewer.id, &[liked.id, unliked.id])
        .await?;

    assert_eq!(ids, vec![liked.id]);

    Ok(())
}

/// Tests the empty-input shortcut.
///
/// Expected: empty result without querying
#[tokio::test]
async fn empty_input_yields_empty_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = create_user(db).await?;

    let repo = LikeRepository::new(db);
    let ids = repo.liked_diary_ids(viewer.id, &[]).await?;

    assert!(ids.is_empty());

    Ok(())
}
