use super::*;

/// Tests inserting a like row.
///
/// Expected: exists() flips to true
#[tokio::test]
async fn inserts_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, diary) = create_user_with_diary(db).await?;
    let viewer = create_user(db).await?;

    let repo = LikeRepository::new(db);

    assert!(!repo.exists(viewer.id, diary.id).await?);

    repo.insert(viewer.id, diary.id).await?;

    assert!(repo.exists(viewer.id, diary.id).await?);

    Ok(())
}

/// Tests that a second like by the same user hits the unique pair index.
///
/// Expected: Err(UniqueConstraintViolation), exactly one row persisted
#[tokio::test]
async fn rejects_duplicate_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, diary) = create_user_with_diary(db).await?;
    let viewer = create_user(db).await?;

    let repo = LikeRepository::new(db);

    repo.insert(viewer.id, diary.id).await?;
    let result = repo.insert(viewer.id, diary.id).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count_for(diary.id).await?, 1);

    Ok(())
}
