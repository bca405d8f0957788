//! Comment entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub diary_id: i32,

    pub writer_user_id: i32,

    /// User mentioned in the comment, if any.
    pub mentioned_user_id: Option<i32>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::diary::Entity",
        from = "Column::DiaryId",
        to = "super::diary::Column::Id",
        on_delete = "Cascade"
    )]
    Diary,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::WriterUserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Writer,
}

impl Related<super::diary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diary.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Writer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
