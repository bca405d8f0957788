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
                    .table(Music::Table)
                    .if_not_exists()
                    .col(pk_auto(Music::Id))
                    .col(integer_uniq(Music::DiaryId))
                    .col(string(Music::MusicUrl))
                    .col(string(Music::Title))
                    .col(string(Music::Artist))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_music_diary_id")
                            .from(Music::Table, Music::DiaryId)
                            .to(Diary::Table, Diary::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Music::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Music {
    Table,
    Id,
    DiaryId,
    MusicUrl,
    Title,
    Artist,
}
