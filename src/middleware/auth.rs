use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Resolves the session's user ID to a database user.
///
/// Every authenticated endpoint goes through this guard. A session that
/// carries an ID for a user that no longer exists is treated the same as no
/// session at all.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user, or an authentication error.
    ///
    /// # Returns
    /// - `Ok(user)` - Session holds a valid user ID
    /// - `Err(AppError::AuthErr(_))` - Not logged in, or the user was deleted
    pub async fn require_user(&self) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_utils::builder::TestBuilder;
    use test_utils::factory::user::create_user;

    /// A request with no user id in the session is rejected.
    /// Expected: AuthError::NotLoggedIn.
    #[tokio::test]
    async fn rejects_request_without_session_user() {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let err = AuthGuard::new(db, session).require_user().await.unwrap_err();

        assert!(matches!(err, AppError::AuthErr(AuthError::NotLoggedIn)));
    }

    /// A session holding a valid user id resolves to that user.
    #[tokio::test]
    async fn resolves_session_user() {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = create_user(db).await.unwrap();
        AuthSession::new(session).set_user_id(user.id).await.unwrap();

        let resolved = AuthGuard::new(db, session).require_user().await.unwrap();

        assert_eq!(resolved.id, user.id);
    }

    /// A session for a since-deleted account is treated as not logged in.
    /// Expected: AuthError::UserNotInDatabase with the stale id.
    #[tokio::test]
    async fn rejects_stale_session_user() {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = create_user(db).await.unwrap();
        AuthSession::new(session).set_user_id(user.id).await.unwrap();

        UserRepository::new(db).delete(user.id).await.unwrap();

        let err = AuthGuard::new(db, session).require_user().await.unwrap_err();

        assert!(matches!(
            err,
            AppError::AuthErr(AuthError::UserNotInDatabase(id)) if id == user.id
        ));
    }
}
