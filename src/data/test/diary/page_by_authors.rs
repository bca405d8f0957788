use super::*;

/// Tests the mate-feed query: given authors, given privacy tiers.
///
/// Expected: only listed authors' entries at the listed tiers appear
#[tokio::test]
async fn filters_by_author_and_privacy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mate = create_user(db).await?;
    let stranger = create_user(db).await?;

    let visible_public = create_diary_with_privacy(db, mate.id, Privacy::Public).await?;
    let visible_mate = create_diary_with_privacy(db, mate.id, Privacy::Mate).await?;
    create_diary_with_privacy(db, mate.id, Privacy::Private).await?;
    create_diary_with_privacy(db, stranger.id, Privacy::Public).await?;

    let repo = DiaryRepository::new(db);
    let page = repo
        .page_by_authors(&[mate.id], &[Privacy::Public, Privacy::Mate], 0, 10)
        .await?;

    let mut ids: Vec<i32> = page.iter().map(|(diary, _)| diary.id).collect();
    ids.sort();
    let mut expected = vec![visible_public.id, visible_mate.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that an empty author list short-circuits.
///
/// Expected: empty page without touching the database
#[tokio::test]
async fn empty_author_list_yields_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiaryRepository::new(db);
    let page = repo
        .page_by_authors(&[], &[Privacy::Public, Privacy::Mate], 0, 10)
        .await?;

    assert!(page.is_empty());

    Ok(())
}
