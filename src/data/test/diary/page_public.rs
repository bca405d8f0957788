use super::*;

/// Tests that only public entries appear in the explore page.
///
/// Expected: mate and private entries are filtered out
#[tokio::test]
async fn filters_to_public_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let public = create_diary_with_privacy(db, user.id, Privacy::Public).await?;
    create_diary_with_privacy(db, user.id, Privacy::Mate).await?;
    create_diary_with_privacy(db, user.id, Privacy::Private).await?;

    let repo = DiaryRepository::new(db);
    let page = repo.page_public(0, 10).await?;

    let ids: Vec<i32> = page.iter().map(|(diary, _)| diary.id).collect();
    assert_eq!(ids, vec![public.id]);

    Ok(())
}
