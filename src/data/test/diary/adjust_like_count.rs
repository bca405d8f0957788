use super::*;

/// Tests incrementing and decrementing the denormalized counter.
///
/// Expected: counter moves by exactly the delta each call
#[tokio::test]
async fn moves_counter_by_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let diary = create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);

    repo.adjust_like_count(diary.id, 1).await?;
    repo.adjust_like_count(diary.id, 1).await?;
    assert_eq!(repo.find_by_id(diary.id).await?.unwrap().like_count, 2);

    repo.adjust_like_count(diary.id, -1).await?;
    assert_eq!(repo.find_by_id(diary.id).await?.unwrap().like_count, 1);

    Ok(())
}
