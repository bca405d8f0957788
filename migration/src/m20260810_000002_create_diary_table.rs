use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diary::Table)
                    .if_not_exists()
                    .col(pk_auto(Diary::Id))
                    .col(integer(Diary::UserId))
                    .col(string(Diary::Title))
                    .col(text(Diary::Content))
                    .col(string_null(Diary::Mood))
                    .col(string_null(Diary::Emoji))
                    .col(string_len(Diary::Privacy, 16))
                    .col(string_null(Diary::BackgroundColor))
                    .col(integer(Diary::LikeCount).default(0))
                    .col(date(Diary::EntryDate))
                    .col(
                        timestamp(Diary::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_diary_user_id")
                            .from(Diary::Table, Diary::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Closes the one-diary-per-day race at the store level.
        manager
            .create_index(
                Index::create()
                    .name("uq_diary_user_id_entry_date")
                    .table(Diary::Table)
                    .col(Diary::UserId)
                    .col(Diary::EntryDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Diary {
    Table,
    Id,
    UserId,
    Title,
    Content,
    Mood,
    Emoji,
    Privacy,
    BackgroundColor,
    LikeCount,
    EntryDate,
    CreatedAt,
}
