use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::notification::{create_diary_notification, create_notification};
use test_utils::factory::user::create_user;

use crate::data::notification::NotificationRepository;

mod mark_read;
mod unread_for;
