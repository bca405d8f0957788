//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets unique email/nickname/date
/// values to avoid tripping the schema's unique constraints.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a diary they authored.
///
/// # Returns
/// - `Ok((user, diary))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_diary(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::diary::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let diary = crate::factory::diary::create_diary(db, user.id).await?;

    Ok((user, diary))
}

/// Creates two users joined by an accepted mate relation.
///
/// # Returns
/// - `Ok((requester, receiver, relation))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mate_pair(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user::Model, entity::mate::Model), DbErr> {
    let requester = crate::factory::user::create_user(db).await?;
    let receiver = crate::factory::user::create_user(db).await?;
    let relation =
        crate::factory::mate::create_accepted_mate(db, requester.id, receiver.id).await?;

    Ok((requester, receiver, relation))
}
