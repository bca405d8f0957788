use super::*;

/// Tests page ordering and offset arithmetic for a single owner.
///
/// Three entries on consecutive days; `created_at DESC` puts the newest
/// first, and offset 1 / limit 1 lands on the middle entry.
///
/// Expected: pages slice the newest-first ordering
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let oldest = create_diary(db, user.id).await?;
    let middle = create_diary(db, user.id).await?;
    let newest = create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);

    let first_page = repo.page_by_owner(user.id, 0, 2).await?;
    let ids: Vec<i32> = first_page.iter().map(|(diary, _)| diary.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);

    let second_page = repo.page_by_owner(user.id, 2, 2).await?;
    let ids: Vec<i32> = second_page.iter().map(|(diary, _)| diary.id).collect();
    assert_eq!(ids, vec![oldest.id]);

    Ok(())
}

/// Tests that the joined author row is present.
///
/// Expected: each page row carries Some(author)
#[tokio::test]
async fn joins_author_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);
    let page = repo.page_by_owner(user.id, 0, 5).await?;

    assert_eq!(page.len(), 1);
    let (_, author) = &page[0];
    assert_eq!(author.as_ref().map(|a| a.id), Some(user.id));

    Ok(())
}

/// Tests paging past the last entry.
///
/// Expected: an empty page, not an error
#[tokio::test]
async fn past_last_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);
    let page = repo.page_by_owner(user.id, 10, 5).await?;

    assert!(page.is_empty());

    Ok(())
}
