//! Diary entry entity.
//!
//! One entry per user per calendar day; the `entry_date` column is
//! materialised from `created_at` so the uniqueness is enforced by the
//! store rather than a check-then-insert.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visibility tier of a diary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[sea_orm(string_value = "public")]
    Public,
    #[sea_orm(string_value = "mate")]
    Mate,
    #[sea_orm(string_value = "private")]
    Private,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "diary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub mood: Option<String>,

    pub emoji: Option<String>,

    pub privacy: Privacy,

    pub background_color: Option<String>,

    /// Denormalised count kept equal to COUNT(likes) for this diary.
    pub like_count: i32,

    /// Calendar day of `created_at`; UNIQUE together with `user_id`.
    pub entry_date: Date,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_one = "super::music::Entity")]
    Music,
    #[sea_orm(has_one = "super::weather::Entity")]
    Weather,
    #[sea_orm(has_many = "super::image::Entity")]
    Image,
    #[sea_orm(has_many = "super::likes::Entity")]
    Likes,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::music::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Music.def()
    }
}

impl Related<super::weather::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weather.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Image.def()
    }
}

impl Related<super::likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
