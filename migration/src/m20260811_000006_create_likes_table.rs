use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000001_create_user_table::User, m20260810_000002_create_diary_table::Diary,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(pk_auto(Likes::Id))
                    .col(integer(Likes::UserId))
                    .col(integer(Likes::DiaryId))
                    .col(
                        timestamp(Likes::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_user_id")
                            .from(Likes::Table, Likes::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_diary_id")
                            .from(Likes::Table, Likes::DiaryId)
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
                    .name("uq_likes_user_id_diary_id")
                    .table(Likes::Table)
                    .col(Likes::UserId)
                    .col(Likes::DiaryId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Likes {
    Table,
    Id,
    UserId,
    DiaryId,
    CreatedAt,
}
