use super::*;

/// Tests creating a diary entry.
///
/// Expected: Ok(Model) with entry_date materialized from created_at
#[tokio::test]
async fn creates_diary_with_materialized_entry_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = DiaryRepository::new(db);

    let created_at = Utc.with_ymd_and_hms(2026, 1, 15, 22, 30, 0).unwrap();
    let diary = repo
        .create(user.id, content_params("First entry"), created_at)
        .await?;

    assert_eq!(diary.user_id, user.id);
    assert_eq!(diary.title, "First entry");
    assert_eq!(diary.like_count, 0);
    assert_eq!(diary.created_at, created_at);
    assert_eq!(diary.entry_date, created_at.date_naive());

    Ok(())
}

/// Tests the one-entry-per-day store invariant.
///
/// A second insert for the same user and calendar date must violate the
/// unique (user_id, entry_date) index, leaving only the first row.
///
/// Expected: Err(UniqueConstraintViolation), one diary row persisted
#[tokio::test]
async fn rejects_second_entry_on_same_day() -> Result<(), DbErr> {
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let repo = DiaryRepository::new(db);

    let morning = Utc.with_ymd_and_hms(2026, 1, 15, 8, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 1, 15, 21, 0, 0).unwrap();

    repo.create(user.id, content_params("Morning"), morning).await?;
    let result = repo.create(user.id, content_params("Evening"), evening).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    let count = entity::prelude::Diary::find()
        .filter(entity::diary::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that different users may post on the same calendar date.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_same_day_for_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_user(db).await?;
    let second = create_user(db).await?;
    let repo = DiaryRepository::new(db);

    let created_at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();

    repo.create(first.id, content_params("Mine"), created_at).await?;
    repo.create(second.id, content_params("Yours"), created_at).await?;

    Ok(())
}
