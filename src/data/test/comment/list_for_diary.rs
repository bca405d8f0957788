use super::*;

/// Tests listing comments newest first.
///
/// Factory rows share near-identical timestamps, so the id tie-break must
/// keep the order deterministic.
///
/// Expected: later comments before earlier ones, other diaries excluded
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, diary) = create_user_with_diary(db).await?;
    let other_diary = test_utils::factory::diary::create_diary(db, author.id).await?;
    let writer = create_user(db).await?;

    let first = create_comment(db, diary.id, writer.id).await?;
    let second = create_comment(db, diary.id, writer.id).await?;
    create_comment(db, other_diary.id, writer.id).await?;

    let repo = CommentRepository::new(db);
    let comments = repo.list_for_diary(diary.id).await?;

    let ids: Vec<i32> = comments.iter().map(|comment| comment.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests deleting every comment on a diary.
///
/// Expected: listed comments gone, other diaries untouched
#[tokio::test]
async fn delete_by_diary_clears_only_that_diary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, diary) = create_user_with_diary(db).await?;
    let other_diary = test_utils::factory::diary::create_diary(db, author.id).await?;
    let writer = create_user(db).await?;

    create_comment(db, diary.id, writer.id).await?;
    create_comment(db, other_diary.id, writer.id).await?;

    let repo = CommentRepository::new(db);
    repo.delete_by_diary(diary.id).await?;

    assert!(repo.list_for_diary(diary.id).await?.is_empty());
    assert_eq!(repo.list_for_diary(other_diary.id).await?.len(), 1);

    Ok(())
}
