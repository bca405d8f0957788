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
                    .table(Weather::Table)
                    .if_not_exists()
                    .col(pk_auto(Weather::Id))
                    .col(integer_uniq(Weather::DiaryId))
                    .col(string(Weather::Location))
                    .col(string(Weather::Icon))
                    .col(double(Weather::AvgTemperature))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weather_diary_id")
                            .from(Weather::Table, Weather::DiaryId)
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
            .drop_table(Table::drop().table(Weather::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Weather {
    Table,
    Id,
    DiaryId,
    Location,
    Icon,
    AvgTemperature,
}
