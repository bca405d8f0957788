//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern with default values that can be overridden
/// per test. Email and nickname are unique per factory invocation.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .nickname("quiet otter")
///     .profile_img_url("profile/42.png")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    nickname: String,
    profile_img_url: Option<String>,
    profile_background_img_url: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - nickname: `"user {id}"`
    /// - profile images: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            nickname: format!("user {}", id),
            profile_img_url: None,
            profile_background_img_url: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the stored profile image key (not a presigned URL).
    pub fn profile_img_url(mut self, key: impl Into<String>) -> Self {
        self.profile_img_url = Some(key.into());
        self
    }

    pub fn profile_background_img_url(mut self, key: impl Into<String>) -> Self {
        self.profile_background_img_url = Some(key.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            profile_img_url: ActiveValue::Set(self.profile_img_url),
            profile_background_img_url: ActiveValue::Set(self.profile_background_img_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
