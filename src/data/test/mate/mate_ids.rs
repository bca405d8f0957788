use super::*;

/// Tests collecting the other side of each accepted relation.
///
/// The user appears as requester in one row and receiver in another; both
/// counterparts must come back, pending rows must not.
///
/// Expected: exactly the accepted counterparts
#[tokio::test]
async fn collects_counterparts_from_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let requested_by_user = create_user(db).await?;
    let requested_user = create_user(db).await?;
    let pending = create_user(db).await?;

    create_accepted_mate(db, user.id, requested_by_user.id).await?;
    create_accepted_mate(db, requested_user.id, user.id).await?;
    create_mate_request(db, user.id, pending.id).await?;

    let repo = MateRepository::new(db);
    let mut ids = repo.mate_ids(user.id).await?;
    ids.sort();

    let mut expected = vec![requested_by_user.id, requested_user.id];
    expected.sort();
    assert_eq!(ids, expected);

    assert_eq!(repo.mate_count(user.id).await?, 2);

    Ok(())
}
