//! Diary request/response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use entity::diary::Privacy;
use serde::{Deserialize, Serialize};

use crate::model::user::UserProfileDto;

/// Music attachment payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMusicDto {
    pub music_url: String,
    pub title: String,
    pub artist: String,
}

/// Weather attachment payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostWeatherDto {
    pub location: String,
    pub icon: String,
    pub avg_temperature: f64,
}

/// Payload for creating or replacing a diary entry.
///
/// `img_urls` carries storage keys in display order; `music` and `weather`
/// are optional but must be complete when present.
#[derive(Debug, Clone, Deserialize)]
pub struct PostDiaryDto {
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
    pub emoji: Option<String>,
    pub privacy: Privacy,
    pub background_color: Option<String>,
    #[serde(default)]
    pub img_urls: Vec<String>,
    pub music: Option<PostMusicDto>,
    pub weather: Option<PostWeatherDto>,
}

/// Nested diary body: the user-authored content plus presigned image URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryBodyDto {
    pub title: String,
    pub content: String,
    pub img_urls: Vec<String>,
    pub mood: Option<String>,
    pub emoji: Option<String>,
    pub privacy: Privacy,
    pub music: Option<PostMusicDto>,
    pub weather: Option<PostWeatherDto>,
    pub background_color: Option<String>,
}

/// Fully assembled diary view as served in feeds and single-entry reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryDto {
    pub id: i32,
    pub user_profile: UserProfileDto,
    pub like_count: i32,
    pub created_at: DateTime<Utc>,
    pub body: DiaryBodyDto,
    pub liked: bool,
}

/// One calendar cell: the entry a user posted on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntryDto {
    pub date: NaiveDate,
    pub diary_id: i32,
    pub emoji: Option<String>,
    pub mood: Option<String>,
}

/// One track of a user's music history, stamped with the entry's creation
/// time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicHistoryItemDto {
    pub diary_id: i32,
    pub music_url: String,
    pub title: String,
    pub artist: String,
    pub created_at: DateTime<Utc>,
}

/// Music history response: the listener's profile plus their tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicHistoryDto {
    pub user_profile: UserProfileDto,
    pub musics: Vec<MusicHistoryItemDto>,
}

/// Whether the viewer has liked a diary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikedDto {
    pub liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Privacy is lowercase on the wire and `img_urls` may be omitted.
    /// Expected: "mate" parses, missing img_urls becomes an empty list.
    #[test]
    fn post_diary_deserializes_wire_shape() {
        let payload: PostDiaryDto = serde_json::from_value(serde_json::json!({
            "title": "first snow",
            "content": "it finally snowed",
            "mood": null,
            "emoji": "❄️",
            "privacy": "mate",
            "background_color": null,
            "music": null,
            "weather": null,
        }))
        .unwrap();

        assert_eq!(payload.privacy, Privacy::Mate);
        assert!(payload.img_urls.is_empty());
        assert_eq!(payload.emoji.as_deref(), Some("❄️"));
    }

    /// Unknown privacy values are rejected at deserialization.
    #[test]
    fn post_diary_rejects_unknown_privacy() {
        let result: Result<PostDiaryDto, _> = serde_json::from_value(serde_json::json!({
            "title": "t",
            "content": "c",
            "mood": null,
            "emoji": null,
            "privacy": "friends-only",
            "background_color": null,
            "music": null,
            "weather": null,
        }));

        assert!(result.is_err());
    }
}
