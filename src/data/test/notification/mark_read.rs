use super::*;

/// Tests marking a notification as read.
///
/// Expected: is_read persisted
#[tokio::test]
async fn marks_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let recipient = create_user(db).await?;
    let notification = create_notification(db, recipient.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notification).await?;

    assert!(updated.is_read);

    let reloaded = repo.find_by_id(updated.id).await?.unwrap();
    assert!(reloaded.is_read);

    Ok(())
}
