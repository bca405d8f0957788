//! Mate relation DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserProfileDto;

/// Payload for sending a mate request.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMateDto {
    pub user_id: i32,
}

/// An accepted mate, as listed on the mates page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MateDto {
    pub user: UserProfileDto,
    pub since: DateTime<Utc>,
}

/// A pending request, from either the sent or received list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MateRequestDto {
    pub mate_id: i32,
    pub user: UserProfileDto,
    pub requested_at: DateTime<Utc>,
}
