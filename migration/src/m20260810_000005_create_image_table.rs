use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000002_create_diary_table::Diary;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(pk_auto(Image::Id))
                    .col(integer(Image::DiaryId))
                    .col(string(Image::ImageUrl))
                    .col(integer(Image::ImageOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_image_diary_id")
                            .from(Image::Table, Image::DiaryId)
                            .to(Diary::Table, Diary::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_image_diary_id_image_order")
                    .table(Image::Table)
                    .col(Image::DiaryId)
                    .col(Image::ImageOrder)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Image::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Image {
    Table,
    Id,
    DiaryId,
    ImageUrl,
    ImageOrder,
}
