//! User profile DTOs.

use serde::{Deserialize, Serialize};

/// Compact author profile embedded in diaries, comments, mates and
/// notifications. `profile_img_url` is presigned, never the raw storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileDto {
    pub user_id: i32,
    pub nickname: String,
    pub profile_img_url: Option<String>,
}

/// Full profile returned from the user-info endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoDto {
    pub user_id: i32,
    pub email: String,
    pub nickname: String,
    pub profile_img_url: Option<String>,
    pub profile_background_img_url: Option<String>,
    pub diary_count: u64,
    pub mate_count: u64,
}

/// Profile update payload; absent fields are left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PutUserDto {
    pub nickname: Option<String>,
    pub profile_img_url: Option<String>,
    pub profile_background_img_url: Option<String>,
}
