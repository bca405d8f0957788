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
                    .table(Mate::Table)
                    .if_not_exists()
                    .col(pk_auto(Mate::Id))
                    .col(integer(Mate::RequestedUserId))
                    .col(integer(Mate::ReceivedUserId))
                    .col(string_len(Mate::Status, 16).default("pending"))
                    .col(
                        timestamp(Mate::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mate_requested_user_id")
                            .from(Mate::Table, Mate::RequestedUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mate_received_user_id")
                            .from(Mate::Table, Mate::ReceivedUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per directed pair; symmetry is handled at query time.
        manager
            .create_index(
                Index::create()
                    .name("uq_mate_requested_received")
                    .table(Mate::Table)
                    .col(Mate::RequestedUserId)
                    .col(Mate::ReceivedUserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mate {
    Table,
    Id,
    RequestedUserId,
    ReceivedUserId,
    Status,
    CreatedAt,
}
