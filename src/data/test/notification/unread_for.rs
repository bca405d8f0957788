use super::*;

/// Tests the unread/read split per recipient.
///
/// Expected: unread_for excludes read rows and other users' rows;
/// read_for returns only the marked row
#[tokio::test]
async fn splits_unread_and_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let recipient = create_user(db).await?;
    let other = create_user(db).await?;

    let first = create_notification(db, recipient.id).await?;
    let second = create_notification(db, recipient.id).await?;
    create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);

    let read = repo.mark_read(first).await?;

    let unread = repo.unread_for(recipient.id).await?;
    let ids: Vec<i32> = unread.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id]);

    let read_list = repo.read_for(recipient.id).await?;
    let ids: Vec<i32> = read_list.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![read.id]);

    Ok(())
}

/// Tests that diary-category notifications carry their diary link.
///
/// Expected: diary_id present on the listed row
#[tokio::test]
async fn diary_rows_carry_diary_id() -> Result<(), DbErr> {
    use test_utils::factory::helpers::create_user_with_diary;

    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, diary) = create_user_with_diary(db).await?;
    create_diary_notification(db, owner.id, diary.id).await?;

    let repo = NotificationRepository::new(db);
    let unread = repo.unread_for(owner.id).await?;

    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].diary_id, Some(diary.id));

    Ok(())
}
