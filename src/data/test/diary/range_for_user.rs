use super::*;

use chrono::NaiveDate;

/// Tests the calendar month query with and without a privacy filter.
///
/// Expected: date range bounds the result; Some(privacies) drops other tiers
#[tokio::test]
async fn bounds_by_date_and_privacy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;

    let in_month_public = DiaryFactory::new(db, user.id)
        .entry_date(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
        .privacy(Privacy::Public)
        .build()
        .await?;
    let in_month_private = DiaryFactory::new(db, user.id)
        .entry_date(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap())
        .privacy(Privacy::Private)
        .build()
        .await?;
    DiaryFactory::new(db, user.id)
        .entry_date(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
        .build()
        .await?;

    let from = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();

    let repo = DiaryRepository::new(db);

    // Owner view: all tiers, ordered by date.
    let all = repo.range_for_user(user.id, from, to, None).await?;
    let ids: Vec<i32> = all.iter().map(|diary| diary.id).collect();
    assert_eq!(ids, vec![in_month_public.id, in_month_private.id]);

    // Stranger view: public only.
    let public_only = repo
        .range_for_user(user.id, from, to, Some(&[Privacy::Public]))
        .await?;
    let ids: Vec<i32> = public_only.iter().map(|diary| diary.id).collect();
    assert_eq!(ids, vec![in_month_public.id]);

    Ok(())
}
