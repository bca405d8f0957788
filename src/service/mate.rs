//! Mate relations: requests, acceptance, and the mate list.
//!
//! A relation is one row for the pair, whoever sent it; duplicate requests
//! in either direction are conflicts. Request and acceptance writes create
//! their notifications in the same transaction.

use entity::mate::MateStatus;
use entity::notification::NotificationCategory;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{mate::MateRepository, notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::mate::{MateDto, MateRequestDto, PostMateDto},
    service::view::user_profile_dto,
    storage::ObjectStorage,
};

pub struct MateService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> MateService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// The user's accepted mates with presigned profiles, newest first.
    pub async fn mates(&self, user_id: i32) -> Result<Vec<MateDto>, AppError> {
        let relations = MateRepository::new(self.db).accepted_relations(user_id).await?;

        let counterpart_ids: Vec<i32> = relations
            .iter()
            .map(|relation| counterpart(relation, user_id))
            .collect();
        let users = UserRepository::new(self.db).find_by_ids(&counterpart_ids).await?;

        let mut mates = Vec::with_capacity(relations.len());
        for relation in &relations {
            let counterpart_id = counterpart(relation, user_id);
            let Some(user) = users.iter().find(|user| user.id == counterpart_id) else {
                continue;
            };

            mates.push(MateDto {
                user: user_profile_dto(self.storage, user).await?,
                since: relation.created_at,
            });
        }

        Ok(mates)
    }

    /// Sends a mate request.
    ///
    /// # Returns
    /// - `Ok(())` - Request stored and receiver notified
    /// - `Err(AppError::BadRequest)` - Requesting yourself
    /// - `Err(AppError::NotFound)` - Unknown receiver
    /// - `Err(AppError::Conflict)` - A relation already exists in either
    ///   direction, pending or accepted
    pub async fn request(&self, requester_id: i32, dto: PostMateDto) -> Result<(), AppError> {
        if dto.user_id == requester_id {
            return Err(AppError::BadRequest(
                "You cannot send a mate request to yourself".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(dto.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let requester = user_repo
            .find_by_id(requester_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if MateRepository::new(self.db)
            .relation_between(requester_id, dto.user_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A mate relation with this user already exists".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        MateRepository::new(&txn)
            .create_request(requester_id, dto.user_id)
            .await?;
        NotificationRepository::new(&txn)
            .create(
                dto.user_id,
                NotificationCategory::Mate,
                format!("{} sent you a mate request", requester.nickname),
                None,
            )
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Accepts a pending request; only the receiver may do so.
    ///
    /// # Returns
    /// - `Ok(())` - Relation accepted and requester notified
    /// - `Err(AppError::NotFound)` - Unknown or non-pending request
    /// - `Err(AppError::Forbidden)` - Caller is not the receiver
    pub async fn accept(&self, user_id: i32, mate_id: i32) -> Result<(), AppError> {
        let relation = self.pending_relation(mate_id).await?;

        if relation.received_user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the receiver may accept a mate request".to_string(),
            ));
        }

        let receiver = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let requester_id = relation.requested_user_id;

        let txn = self.db.begin().await?;

        MateRepository::new(&txn).accept(relation).await?;
        NotificationRepository::new(&txn)
            .create(
                requester_id,
                NotificationCategory::Mate,
                format!("{} accepted your mate request", receiver.nickname),
                None,
            )
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Rejects a pending request; only the receiver may do so.
    pub async fn reject(&self, user_id: i32, mate_id: i32) -> Result<(), AppError> {
        let relation = self.pending_relation(mate_id).await?;

        if relation.received_user_id != user_id {
            return Err(AppError::Forbidden(
                "Only the receiver may reject a mate request".to_string(),
            ));
        }

        MateRepository::new(self.db).delete(relation.id).await?;

        Ok(())
    }

    /// Dissolves an accepted relation; either side may do so.
    pub async fn remove(&self, user_id: i32, mate_id: i32) -> Result<(), AppError> {
        let repo = MateRepository::new(self.db);

        let Some(relation) = repo.find_by_id(mate_id).await? else {
            return Err(AppError::NotFound("Mate relation not found".to_string()));
        };

        if relation.status != MateStatus::Accepted {
            return Err(AppError::NotFound("Mate relation not found".to_string()));
        }

        if relation.requested_user_id != user_id && relation.received_user_id != user_id {
            return Err(AppError::Forbidden(
                "You are not part of this mate relation".to_string(),
            ));
        }

        repo.delete(relation.id).await?;

        Ok(())
    }

    /// Pending requests the user has sent, with receiver profiles.
    pub async fn sent_requests(&self, user_id: i32) -> Result<Vec<MateRequestDto>, AppError> {
        let relations = MateRepository::new(self.db).sent_requests(user_id).await?;
        self.request_dtos(relations, user_id).await
    }

    /// Pending requests the user has received, with requester profiles.
    pub async fn received_requests(&self, user_id: i32) -> Result<Vec<MateRequestDto>, AppError> {
        let relations = MateRepository::new(self.db).received_requests(user_id).await?;
        self.request_dtos(relations, user_id).await
    }

    async fn pending_relation(&self, mate_id: i32) -> Result<entity::mate::Model, AppError> {
        let Some(relation) = MateRepository::new(self.db).find_by_id(mate_id).await? else {
            return Err(AppError::NotFound("Mate request not found".to_string()));
        };

        if relation.status != MateStatus::Pending {
            return Err(AppError::NotFound("Mate request not found".to_string()));
        }

        Ok(relation)
    }

    async fn request_dtos(
        &self,
        relations: Vec<entity::mate::Model>,
        user_id: i32,
    ) -> Result<Vec<MateRequestDto>, AppError> {
        let counterpart_ids: Vec<i32> = relations
            .iter()
            .map(|relation| counterpart(relation, user_id))
            .collect();
        let users = UserRepository::new(self.db).find_by_ids(&counterpart_ids).await?;

        let mut dtos = Vec::with_capacity(relations.len());
        for relation in &relations {
            let counterpart_id = counterpart(relation, user_id);
            let Some(user) = users.iter().find(|user| user.id == counterpart_id) else {
                continue;
            };

            dtos.push(MateRequestDto {
                mate_id: relation.id,
                user: user_profile_dto(self.storage, user).await?,
                requested_at: relation.created_at,
            });
        }

        Ok(dtos)
    }
}

fn counterpart(relation: &entity::mate::Model, user_id: i32) -> i32 {
    if relation.requested_user_id == user_id {
        relation.received_user_id
    } else {
        relation.requested_user_id
    }
}
