//! Image attachment entity.
//!
//! A diary entry owns 0..N images ordered by `image_order` (0-based,
//! unique per diary). Order is always carried by this column, never by
//! concatenated URL strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub diary_id: i32,

    /// Storage key of the image, resolved to a presigned URL on read.
    pub image_url: String,

    /// Position within the diary's image list, 0..N-1.
    pub image_order: i32,
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
}

impl Related<super::diary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
