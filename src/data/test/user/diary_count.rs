use super::*;

use test_utils::factory::diary::create_diary;

/// Tests counting a user's diaries.
///
/// Expected: only the counted user's entries are included
#[tokio::test]
async fn counts_only_own_diaries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = create_user(db).await?;
    let other = create_user(db).await?;

    create_diary(db, author.id).await?;
    create_diary(db, author.id).await?;
    create_diary(db, other.id).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.diary_count(author.id).await?, 2);
    assert_eq!(repo.diary_count(other.id).await?, 1);

    Ok(())
}
