use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::user::{create_user, UserFactory};

use crate::data::user::{UpdateUserParams, UserRepository};

mod create;
mod diary_count;
mod find_by_email;
mod search_by_nickname;
mod update;
