//! User profiles: info, updates, and account deletion.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        diary::DiaryRepository,
        mate::MateRepository,
        user::{UpdateUserParams, UserRepository},
    },
    error::AppError,
    model::{
        diary::{MusicHistoryDto, MusicHistoryItemDto},
        user::{PutUserDto, UserInfoDto, UserProfileDto},
    },
    service::{access, conflict_on_unique, view::user_profile_dto},
    storage::{presign_optional, ObjectStorage},
};

const NICKNAME_MIN_CHARS: usize = 2;
const NICKNAME_MAX_CHARS: usize = 14;
const SEARCH_LIMIT: u64 = 20;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn ObjectStorage) -> Self {
        Self { db, storage }
    }

    /// Full profile for a user, with counts and presigned images.
    ///
    /// # Returns
    /// - `Ok(UserInfoDto)` - Profile with diary and mate counts
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn info(&self, user_id: i32) -> Result<UserInfoDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        self.to_info(user).await
    }

    /// Applies a partial profile update for the logged-in user.
    ///
    /// # Returns
    /// - `Ok(UserInfoDto)` - The updated profile
    /// - `Err(AppError::BadRequest)` - Nickname outside 2..=14 characters
    /// - `Err(AppError::Conflict)` - Nickname already taken
    pub async fn update(
        &self,
        user: entity::user::Model,
        dto: PutUserDto,
    ) -> Result<UserInfoDto, AppError> {
        if let Some(nickname) = &dto.nickname {
            let length = nickname.chars().count();
            if !(NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS).contains(&length) {
                return Err(AppError::BadRequest(format!(
                    "Nickname must be between {} and {} characters",
                    NICKNAME_MIN_CHARS, NICKNAME_MAX_CHARS
                )));
            }
        }

        let updated = UserRepository::new(self.db)
            .update(
                user,
                UpdateUserParams {
                    nickname: dto.nickname,
                    profile_img_url: dto.profile_img_url,
                    profile_background_img_url: dto.profile_background_img_url,
                },
            )
            .await
            .map_err(|err| conflict_on_unique(err, "Nickname already taken"))?;

        self.to_info(updated).await
    }

    /// Profiles whose nickname contains the fragment, nickname-ordered.
    ///
    /// # Returns
    /// - `Ok(Vec<UserProfileDto>)` - Up to 20 matches with presigned images
    /// - `Err(AppError::BadRequest)` - Blank search fragment
    pub async fn search(&self, nickname: &str) -> Result<Vec<UserProfileDto>, AppError> {
        let fragment = nickname.trim();
        if fragment.is_empty() {
            return Err(AppError::BadRequest(
                "Search nickname is required".to_string(),
            ));
        }

        let users = UserRepository::new(self.db)
            .search_by_nickname(fragment, SEARCH_LIMIT)
            .await?;

        let mut profiles = Vec::with_capacity(users.len());
        for user in &users {
            profiles.push(user_profile_dto(self.storage, user).await?);
        }

        Ok(profiles)
    }

    /// A user's music attachments, newest entry first.
    ///
    /// Visibility follows the viewer's relation to the listener: owners see
    /// tracks from every tier, mates from public and mate entries, strangers
    /// from public entries only.
    ///
    /// # Returns
    /// - `Ok(MusicHistoryDto)` - Profile plus visible tracks
    /// - `Err(AppError::NotFound)` - Unknown user
    pub async fn music_history(
        &self,
        viewer_id: i32,
        target_user_id: i32,
    ) -> Result<MusicHistoryDto, AppError> {
        let Some(target) = UserRepository::new(self.db).find_by_id(target_user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let privacies = access::visible_tiers(self.db, viewer_id, target_user_id).await?;

        let rows = DiaryRepository::new(self.db)
            .music_history(target_user_id, privacies)
            .await?;

        let mut musics = Vec::with_capacity(rows.len());
        for (music, diary) in rows {
            let Some(diary) = diary else {
                return Err(AppError::InternalError(format!(
                    "Music {} has no diary row",
                    music.id
                )));
            };

            musics.push(MusicHistoryItemDto {
                diary_id: music.diary_id,
                music_url: music.music_url,
                title: music.title,
                artist: music.artist,
                created_at: diary.created_at,
            });
        }

        Ok(MusicHistoryDto {
            user_profile: user_profile_dto(self.storage, &target).await?,
            musics,
        })
    }

    /// Deletes the user's account; dependent rows go with it via the
    /// schema's cascading foreign keys.
    pub async fn delete_account(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db).delete(user_id).await?;
        Ok(())
    }

    async fn to_info(&self, user: entity::user::Model) -> Result<UserInfoDto, AppError> {
        let diary_count = UserRepository::new(self.db).diary_count(user.id).await?;
        let mate_count = MateRepository::new(self.db).mate_count(user.id).await?;

        Ok(UserInfoDto {
            user_id: user.id,
            email: user.email,
            nickname: user.nickname,
            profile_img_url: presign_optional(self.storage, user.profile_img_url.as_deref())
                .await?,
            profile_background_img_url: presign_optional(
                self.storage,
                user.profile_background_img_url.as_deref(),
            )
            .await?,
            diary_count,
            mate_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use entity::diary::Privacy;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::diary::{create_diary, create_diary_with_privacy};
    use test_utils::factory::helpers::create_mate_pair;
    use test_utils::factory::music::create_music;
    use test_utils::factory::user::{create_user, UserFactory};

    use crate::service::testing::FakeStorage;

    /// Profile info aggregates diary and mate counts and presigns images.
    #[tokio::test]
    async fn info_aggregates_counts_and_presigns() {
        let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, mate, _) = create_mate_pair(db).await.unwrap();
        create_diary(db, user.id).await.unwrap();
        create_diary(db, mate.id).await.unwrap();

        let with_image = UserFactory::new(db)
            .profile_img_url("profiles/me.png")
            .build()
            .await
            .unwrap();

        let service = UserService::new(db, &FakeStorage);

        let info = service.info(user.id).await.unwrap();
        assert_eq!(info.diary_count, 1);
        assert_eq!(info.mate_count, 1);
        assert!(info.profile_img_url.is_none());

        let info = service.info(with_image.id).await.unwrap();
        assert_eq!(
            info.profile_img_url.as_deref(),
            Some("https://signed.test/profiles/me.png")
        );
    }

    /// Search matches nickname fragments in nickname order and skips
    /// non-matches; a blank fragment is a bad request.
    #[tokio::test]
    async fn search_matches_nickname_fragment() {
        let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        UserFactory::new(db).nickname("lunargrove").build().await.unwrap();
        UserFactory::new(db).nickname("grovekeeper").build().await.unwrap();
        UserFactory::new(db).nickname("meadowlark").build().await.unwrap();

        let service = UserService::new(db, &FakeStorage);

        let found = service.search("grove").await.unwrap();
        let nicknames: Vec<&str> = found.iter().map(|p| p.nickname.as_str()).collect();
        assert_eq!(nicknames, vec!["grovekeeper", "lunargrove"]);

        let err = service.search("   ").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    /// Music history filters tracks by the viewer's tier and orders them
    /// newest entry first.
    #[tokio::test]
    async fn music_history_follows_privacy_tiers() {
        let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (author, mate, _) = create_mate_pair(db).await.unwrap();
        let stranger = create_user(db).await.unwrap();

        let public = create_diary_with_privacy(db, author.id, Privacy::Public)
            .await
            .unwrap();
        let mate_entry = create_diary_with_privacy(db, author.id, Privacy::Mate)
            .await
            .unwrap();
        let private = create_diary_with_privacy(db, author.id, Privacy::Private)
            .await
            .unwrap();
        create_music(db, public.id).await.unwrap();
        create_music(db, mate_entry.id).await.unwrap();
        create_music(db, private.id).await.unwrap();

        let service = UserService::new(db, &FakeStorage);

        let own = service.music_history(author.id, author.id).await.unwrap();
        let own_ids: Vec<i32> = own.musics.iter().map(|m| m.diary_id).collect();
        assert_eq!(own_ids, vec![private.id, mate_entry.id, public.id]);
        assert_eq!(own.user_profile.user_id, author.id);

        let mates_view = service.music_history(mate.id, author.id).await.unwrap();
        let mate_ids: Vec<i32> = mates_view.musics.iter().map(|m| m.diary_id).collect();
        assert_eq!(mate_ids, vec![mate_entry.id, public.id]);

        let strangers_view = service
            .music_history(stranger.id, author.id)
            .await
            .unwrap();
        let stranger_ids: Vec<i32> =
            strangers_view.musics.iter().map(|m| m.diary_id).collect();
        assert_eq!(stranger_ids, vec![public.id]);
    }

    /// Music history for an unknown user is a not-found error.
    #[tokio::test]
    async fn music_history_unknown_user() {
        let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let viewer = create_user(db).await.unwrap();

        let err = UserService::new(db, &FakeStorage)
            .music_history(viewer.id, viewer.id + 999)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    /// Nickname length limits are enforced before the database is touched.
    #[tokio::test]
    async fn nickname_length_is_validated() {
        let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await.unwrap();
        let service = UserService::new(db, &FakeStorage);

        let err = service
            .update(
                user.clone(),
                PutUserDto {
                    nickname: Some("x".to_string()),
                    profile_img_url: None,
                    profile_background_img_url: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = service
            .update(
                user,
                PutUserDto {
                    nickname: Some("far-too-long-nickname".to_string()),
                    profile_img_url: None,
                    profile_background_img_url: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    /// Renaming onto a taken nickname is a conflict.
    #[tokio::test]
    async fn taken_nickname_conflicts() {
        let test = TestBuilder::new().with_diary_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let taken = UserFactory::new(db).nickname("snapdragon").build().await.unwrap();
        let user = create_user(db).await.unwrap();

        let service = UserService::new(db, &FakeStorage);
        let err = service
            .update(
                user,
                PutUserDto {
                    nickname: Some(taken.nickname),
                    profile_img_url: None,
                    profile_background_img_url: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }
}
