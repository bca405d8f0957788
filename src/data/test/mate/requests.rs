use super::*;

/// Tests the pending request lists on both sides.
///
/// Expected: the row shows up in the sender's sent list and the receiver's
/// received list, and nowhere after acceptance
#[tokio::test]
async fn lists_pending_requests_per_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = create_user(db).await?;
    let receiver = create_user(db).await?;

    let repo = MateRepository::new(db);
    let relation = repo.create_request(requester.id, receiver.id).await?;

    assert_eq!(relation.status, MateStatus::Pending);

    let sent = repo.sent_requests(requester.id).await?;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].id, relation.id);

    let received = repo.received_requests(receiver.id).await?;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, relation.id);

    let accepted = repo.accept(relation).await?;
    assert_eq!(accepted.status, MateStatus::Accepted);

    assert!(repo.sent_requests(requester.id).await?.is_empty());
    assert!(repo.received_requests(receiver.id).await?.is_empty());
    assert!(repo.are_mates(requester.id, receiver.id).await?);

    Ok(())
}

/// Tests that relation_between finds the row in either orientation and any
/// status.
///
/// Expected: Some for both orderings, None for strangers
#[tokio::test]
async fn finds_relation_in_either_orientation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = create_user(db).await?;
    let receiver = create_user(db).await?;
    let stranger = create_user(db).await?;
    let relation = create_mate_request(db, requester.id, receiver.id).await?;

    let repo = MateRepository::new(db);

    let forward = repo.relation_between(requester.id, receiver.id).await?;
    assert_eq!(forward.map(|r| r.id), Some(relation.id));

    let backward = repo.relation_between(receiver.id, requester.id).await?;
    assert_eq!(backward.map(|r| r.id), Some(relation.id));

    assert!(repo.relation_between(requester.id, stranger.id).await?.is_none());

    Ok(())
}

/// Tests removing a relation.
///
/// Expected: mate status gone after delete
#[tokio::test]
async fn delete_removes_relation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, receiver, relation) = create_mate_pair(db).await?;

    let repo = MateRepository::new(db);
    repo.delete(relation.id).await?;

    assert!(!repo.are_mates(requester.id, receiver.id).await?);

    Ok(())
}
