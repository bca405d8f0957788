use super::*;

/// Tests that a partial update only touches the provided fields.
///
/// Expected: nickname changes, email and untouched profile fields survive
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .profile_img_url("profiles/original.png")
        .build()
        .await?;
    let email = user.email.clone();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user,
            UpdateUserParams {
                nickname: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.nickname, "renamed");
    assert_eq!(updated.email, email);
    assert_eq!(updated.profile_img_url.as_deref(), Some("profiles/original.png"));

    Ok(())
}

/// Tests that renaming to a taken nickname violates the unique index.
///
/// Expected: Err with a uniqueness violation
#[tokio::test]
async fn rejects_taken_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = create_user(db).await?;
    let user = create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            user,
            UpdateUserParams {
                nickname: Some(existing.nickname),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
