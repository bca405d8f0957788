use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::diary::create_diary;
use test_utils::factory::helpers::create_user_with_diary;
use test_utils::factory::likes::create_like;
use test_utils::factory::user::create_user;

use crate::data::likes::LikeRepository;

mod delete;
mod insert;
mod liked_diary_ids;
