//! Comment DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserProfileDto;

/// Payload for creating or editing a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct PostCommentDto {
    pub content: String,
    pub mentioned_user_id: Option<i32>,
}

/// Comment with writer and optional mentioned-user profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i32,
    pub diary_id: i32,
    pub writer: UserProfileDto,
    pub mentioned: Option<UserProfileDto>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
