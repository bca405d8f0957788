use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some(Model)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).email("known@example.com").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("known@example.com").await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests querying for an email with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
