//! User data repository for database operations.
//!
//! Handles user creation during the OAuth callback, profile lookups and
//! updates, and the aggregate counts shown on profile pages.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Fields of a profile update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub nickname: Option<String>,
    pub profile_img_url: Option<String>,
    pub profile_background_img_url: Option<String>,
}

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// Called from the OAuth callback when the provider email has no account
    /// yet. The unique indexes on email and nickname surface duplicates as
    /// `DbErr`.
    ///
    /// # Arguments
    /// - `email` - Email address from the OAuth provider
    /// - `nickname` - Generated unique nickname
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including uniqueness violations
    pub async fn create(&self, email: String, nickname: String) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            nickname: ActiveValue::Set(nickname),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        };

        entity::prelude::User::insert(user)
            .exec_with_returning(self.db)
            .await
    }

    /// Finds a user by their primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by email address.
    ///
    /// Email is the stable identity the OAuth callback matches on.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Finds a user by nickname.
    ///
    /// Used to check nickname availability before generation retries and
    /// profile updates.
    pub async fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.eq(nickname))
            .one(self.db)
            .await
    }

    /// Users whose nickname contains the given fragment, nickname-ordered.
    ///
    /// Backs the user search endpoint; capped so a short fragment cannot
    /// pull the whole table.
    pub async fn search_by_nickname(
        &self,
        fragment: &str,
        limit: u64,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Nickname.contains(fragment))
            .order_by_asc(entity::user::Column::Nickname)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Loads the users with the given IDs.
    ///
    /// Batch lookup used when assembling diary and comment views; order of
    /// the result is unspecified.
    pub async fn find_by_ids(&self, user_ids: &[i32]) -> Result<Vec<entity::user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated user
    /// - `Err(DbErr)` - Database error, including nickname uniqueness violations
    pub async fn update(
        &self,
        user: entity::user::Model,
        params: UpdateUserParams,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();

        if let Some(nickname) = params.nickname {
            active.nickname = ActiveValue::Set(nickname);
        }
        if let Some(profile_img_url) = params.profile_img_url {
            active.profile_img_url = ActiveValue::Set(Some(profile_img_url));
        }
        if let Some(background) = params.profile_background_img_url {
            active.profile_background_img_url = ActiveValue::Set(Some(background));
        }

        active.update(self.db).await
    }

    /// Deletes a user account.
    pub async fn delete(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts the diaries a user has written.
    pub async fn diary_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Diary::find()
            .filter(entity::diary::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }
}
