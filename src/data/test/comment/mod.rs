use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::comment::create_comment;
use test_utils::factory::helpers::create_user_with_diary;
use test_utils::factory::user::create_user;

use crate::data::comment::CommentRepository;

mod create;
mod list_for_diary;
