//! Mate relation data repository for database operations.
//!
//! A relation is a single row regardless of who initiated it, so every
//! lookup between two users probes both orderings of the pair. Feeds and
//! access control only consider rows with `Accepted` status.

use entity::mate::MateStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Both-orderings filter for a specific pair of users.
fn pair_condition(a: i32, b: i32) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(entity::mate::Column::RequestedUserId.eq(a))
                .add(entity::mate::Column::ReceivedUserId.eq(b)),
        )
        .add(
            Condition::all()
                .add(entity::mate::Column::RequestedUserId.eq(b))
                .add(entity::mate::Column::ReceivedUserId.eq(a)),
        )
}

/// Either-side filter for a single user.
fn side_condition(user_id: i32) -> Condition {
    Condition::any()
        .add(entity::mate::Column::RequestedUserId.eq(user_id))
        .add(entity::mate::Column::ReceivedUserId.eq(user_id))
}

/// Repository providing database operations for mate relations.
pub struct MateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether an accepted relation exists between the two users.
    ///
    /// This is the query behind mate-privacy access checks; it is symmetric
    /// by construction.
    pub async fn are_mates(&self, a: i32, b: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Mate::find()
            .filter(pair_condition(a, b))
            .filter(entity::mate::Column::Status.eq(MateStatus::Accepted))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// The relation row between two users in any status, if one exists.
    pub async fn relation_between(
        &self,
        a: i32,
        b: i32,
    ) -> Result<Option<entity::mate::Model>, DbErr> {
        entity::prelude::Mate::find()
            .filter(pair_condition(a, b))
            .one(self.db)
            .await
    }

    /// Finds a relation row by its primary key.
    pub async fn find_by_id(&self, mate_id: i32) -> Result<Option<entity::mate::Model>, DbErr> {
        entity::prelude::Mate::find_by_id(mate_id).one(self.db).await
    }

    /// IDs of every user the given user has an accepted relation with.
    ///
    /// Feeds this straight into the mate feed's author filter.
    pub async fn mate_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::Mate::find()
            .filter(side_condition(user_id))
            .filter(entity::mate::Column::Status.eq(MateStatus::Accepted))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                if row.requested_user_id == user_id {
                    row.received_user_id
                } else {
                    row.requested_user_id
                }
            })
            .collect())
    }

    /// Accepted relation rows involving the user, newest first.
    pub async fn accepted_relations(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::mate::Model>, DbErr> {
        entity::prelude::Mate::find()
            .filter(side_condition(user_id))
            .filter(entity::mate::Column::Status.eq(MateStatus::Accepted))
            .order_by_desc(entity::mate::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts the user's accepted relations.
    pub async fn mate_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Mate::find()
            .filter(side_condition(user_id))
            .filter(entity::mate::Column::Status.eq(MateStatus::Accepted))
            .count(self.db)
            .await
    }

    /// Inserts a pending request from one user to another.
    pub async fn create_request(
        &self,
        requested_user_id: i32,
        received_user_id: i32,
    ) -> Result<entity::mate::Model, DbErr> {
        let relation = entity::mate::ActiveModel {
            requested_user_id: ActiveValue::Set(requested_user_id),
            received_user_id: ActiveValue::Set(received_user_id),
            status: ActiveValue::Set(MateStatus::Pending),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        };

        entity::prelude::Mate::insert(relation)
            .exec_with_returning(self.db)
            .await
    }

    /// Moves a pending relation to accepted.
    pub async fn accept(&self, relation: entity::mate::Model) -> Result<entity::mate::Model, DbErr> {
        let mut active: entity::mate::ActiveModel = relation.into();
        active.status = ActiveValue::Set(MateStatus::Accepted);

        active.update(self.db).await
    }

    /// Removes a relation row (reject or un-mate).
    pub async fn delete(&self, mate_id: i32) -> Result<(), DbErr> {
        entity::prelude::Mate::delete_by_id(mate_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Pending requests the user has sent, newest first.
    pub async fn sent_requests(&self, user_id: i32) -> Result<Vec<entity::mate::Model>, DbErr> {
        entity::prelude::Mate::find()
            .filter(entity::mate::Column::RequestedUserId.eq(user_id))
            .filter(entity::mate::Column::Status.eq(MateStatus::Pending))
            .order_by_desc(entity::mate::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Pending requests the user has received, newest first.
    pub async fn received_requests(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::mate::Model>, DbErr> {
        entity::prelude::Mate::find()
            .filter(entity::mate::Column::ReceivedUserId.eq(user_id))
            .filter(entity::mate::Column::Status.eq(MateStatus::Pending))
            .order_by_desc(entity::mate::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
