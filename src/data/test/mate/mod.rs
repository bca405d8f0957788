use entity::mate::MateStatus;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory::helpers::create_mate_pair;
use test_utils::factory::mate::{create_accepted_mate, create_mate_request};
use test_utils::factory::user::create_user;

use crate::data::mate::MateRepository;

mod are_mates;
mod mate_ids;
mod requests;
