use chrono::{TimeZone, Utc};
use entity::diary::Privacy;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::diary::{create_diary, create_diary_with_privacy, DiaryFactory};
use test_utils::factory::user::create_user;

use crate::data::diary::{DiaryContentParams, DiaryRepository};

fn content_params(title: &str) -> DiaryContentParams {
    DiaryContentParams {
        title: title.to_string(),
        content: "Body text".to_string(),
        mood: Some("calm".to_string()),
        emoji: Some("🌙".to_string()),
        privacy: Privacy::Public,
        background_color: None,
    }
}

mod adjust_like_count;
mod create;
mod music_history;
mod page_by_authors;
mod page_by_owner;
mod page_public;
mod put_images;
mod put_music;
mod range_for_user;
