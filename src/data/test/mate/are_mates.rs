use super::*;

/// Tests that an accepted relation is seen from both orderings.
///
/// Relations are a single row; the check must be symmetric regardless of
/// who sent the request.
///
/// Expected: true for (requester, receiver) and (receiver, requester)
#[tokio::test]
async fn accepted_relation_is_symmetric() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, receiver, _) = create_mate_pair(db).await?;

    let repo = MateRepository::new(db);

    assert!(repo.are_mates(requester.id, receiver.id).await?);
    assert!(repo.are_mates(receiver.id, requester.id).await?);

    Ok(())
}

/// Tests that a pending request does not grant mate status.
///
/// Expected: false until the request is accepted
#[tokio::test]
async fn pending_request_is_not_mate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = create_user(db).await?;
    let receiver = create_user(db).await?;
    create_mate_request(db, requester.id, receiver.id).await?;

    let repo = MateRepository::new(db);

    assert!(!repo.are_mates(requester.id, receiver.id).await?);
    assert!(!repo.are_mates(receiver.id, requester.id).await?);

    Ok(())
}

/// Tests unrelated users.
///
/// Expected: false with no relation row at all
#[tokio::test]
async fn strangers_are_not_mates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = create_user(db).await?;
    let b = create_user(db).await?;

    let repo = MateRepository::new(db);

    assert!(!repo.are_mates(a.id, b.id).await?);

    Ok(())
}
