use super::*;

/// Tests matching nicknames by fragment.
///
/// Expected: only nicknames containing the fragment, ordered by nickname
#[tokio::test]
async fn matches_fragment_in_nickname_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).nickname("rainfern").build().await?;
    UserFactory::new(db).nickname("fernhollow").build().await?;
    UserFactory::new(db).nickname("mosswren").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.search_by_nickname("fern", 20).await?;

    let nicknames: Vec<&str> = found.iter().map(|u| u.nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["fernhollow", "rainfern"]);

    Ok(())
}

/// Tests the result cap.
///
/// Expected: no more rows than the limit
#[tokio::test]
async fn caps_result_at_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for suffix in ["one", "two", "three"] {
        UserFactory::new(db)
            .nickname(format!("pine{}", suffix))
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let found = repo.search_by_nickname("pine", 2).await?;

    assert_eq!(found.len(), 2);

    Ok(())
}
