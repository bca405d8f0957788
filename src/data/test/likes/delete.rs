use super::*;

/// Tests deleting an existing like.
///
/// Expected: one row affected, exists() flips to false
#[tokio::test]
async fn deletes_existing_like() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, diary) = create_user_with_diary(db).await?;
    let viewer = create_user(db).await?;
    create_like(db, viewer.id, diary.id).await?;

    let repo = LikeRepository::new(db);
    let rows = repo.delete(viewer.id, diary.id).await?;

    assert_eq!(rows, 1);
    assert!(!repo.exists(viewer.id, diary.id).await?);

    Ok(())
}

/// Tests deleting a like that was never placed.
///
/// Expected: zero rows affected, no error
#[tokio::test]
async fn missing_like_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, diary) = create_user_with_diary(db).await?;
    let viewer = create_user(db).await?;

    let repo = LikeRepository::new(db);
    let rows = repo.delete(viewer.id, diary.id).await?;

    assert_eq!(rows, 0);

    Ok(())
}
