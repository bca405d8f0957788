use super::*;

/// Tests replacing a diary's ordered image list with a shorter one.
///
/// Expected: slots 0..N-1 updated in place, surplus rows trimmed
#[tokio::test]
async fn trims_surplus_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let diary = create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);

    repo.create_images(
        diary.id,
        &[
            "images/a.png".to_string(),
            "images/b.png".to_string(),
            "images/c.png".to_string(),
        ],
    )
    .await?;

    repo.put_images(diary.id, &["images/x.png".to_string(), "images/y.png".to_string()])
        .await?;

    let rows = repo.images_for(&[diary.id]).await?;
    let keys: Vec<(&str, i32)> = rows
        .iter()
        .map(|row| (row.image_url.as_str(), row.image_order))
        .collect();

    assert_eq!(keys, vec![("images/x.png", 0), ("images/y.png", 1)]);

    Ok(())
}

/// Tests that insertion order becomes the persisted image order.
///
/// Expected: image_order runs 0..N-1 in caller order
#[tokio::test]
async fn preserves_caller_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let diary = create_diary(db, user.id).await?;

    let repo = DiaryRepository::new(db);
    repo.create_images(
        diary.id,
        &["images/first.png".to_string(), "images/second.png".to_string()],
    )
    .await?;

    let rows = repo.images_for(&[diary.id]).await?;

    assert_eq!(rows[0].image_url, "images/first.png");
    assert_eq!(rows[0].image_order, 0);
    assert_eq!(rows[1].image_url, "images/second.png");
    assert_eq!(rows[1].image_order, 1);

    Ok(())
}
