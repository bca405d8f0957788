//! Mate relation factory.

use chrono::Utc;
use entity::mate::MateStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

async fn create_mate(
    db: &DatabaseConnection,
    requested_user_id: i32,
    received_user_id: i32,
    status: MateStatus,
) -> Result<entity::mate::Model, DbErr> {
    entity::mate::ActiveModel {
        requested_user_id: ActiveValue::Set(requested_user_id),
        received_user_id: ActiveValue::Set(received_user_id),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a pending mate request from requester to receiver.
pub async fn create_mate_request(
    db: &DatabaseConnection,
    requested_user_id: i32,
    received_user_id: i32,
) -> Result<entity::mate::Model, DbErr> {
    create_mate(db, requested_user_id, received_user_id, MateStatus::Pending).await
}

/// Creates an accepted (bidirectional) mate relation between two users.
pub async fn create_accepted_mate(
    db: &DatabaseConnection,
    requested_user_id: i32,
    received_user_id: i32,
) -> Result<entity::mate::Model, DbErr> {
    create_mate(db, requested_user_id, received_user_id, MateStatus::Accepted).await
}
