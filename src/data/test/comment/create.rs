use super::*;

/// Tests creating a comment with a mention.
///
/// Expected: Ok(Model) carrying writer, mention and content
#[tokio::test]
async fn creates_comment_with_mention() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, diary) = create_user_with_diary(db).await?;
    let writer = create_user(db).await?;
    let mentioned = create_user(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(
            diary.id,
            writer.id,
            Some(mentioned.id),
            "Lovely entry".to_string(),
        )
        .await?;

    assert_eq!(comment.diary_id, diary.id);
    assert_eq!(comment.writer_user_id, writer.id);
    assert_eq!(comment.mentioned_user_id, Some(mentioned.id));
    assert_eq!(comment.content, "Lovely entry");

    Ok(())
}

/// Tests editing a comment's content and clearing the mention.
///
/// Expected: updated fields persisted
#[tokio::test]
async fn update_rewrites_content_and_mention() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, diary) = create_user_with_diary(db).await?;
    let writer = create_user(db).await?;
    let comment = create_comment(db, diary.id, writer.id).await?;

    let repo = CommentRepository::new(db);
    let updated = repo.update(comment, "Edited".to_string(), None).await?;

    assert_eq!(updated.content, "Edited");
    assert_eq!(updated.mentioned_user_id, None);

    Ok(())
}
