use super::*;

/// Tests creating a user with email and nickname.
///
/// Expected: Ok(Model) with the provided identity fields and no profile images
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create("amy@example.com".to_string(), "amy".to_string())
        .await?;

    assert_eq!(user.email, "amy@example.com");
    assert_eq!(user.nickname, "amy");
    assert!(user.profile_img_url.is_none());

    Ok(())
}

/// Tests that a duplicate nickname is rejected by the unique index.
///
/// Expected: Err with a uniqueness violation
#[tokio::test]
async fn rejects_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create("first@example.com".to_string(), "taken".to_string())
        .await?;

    let result = repo
        .create("second@example.com".to_string(), "taken".to_string())
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
