use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_users::Users;

static IDX_MESSAGES_SENDER_RECEIVER: &str = "idx-messages-sender_id-receiver_id";
static FK_MESSAGES_SENDER_ID: &str = "fk-messages-sender_id";
static FK_MESSAGES_RECEIVER_ID: &str = "fk-messages-receiver_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(pk_auto(Messages::Id))
                    .col(integer(Messages::SenderId))
                    .col(integer(Messages::ReceiverId))
                    .col(text(Messages::Content))
                    .col(timestamp(Messages::Timestamp))
                    .col(boolean(Messages::IsRead))
                    .col(timestamp_null(Messages::ReadAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MESSAGES_SENDER_ID)
                            .from(Messages::Table, Messages::SenderId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MESSAGES_RECEIVER_ID)
                            .from(Messages::Table, Messages::ReceiverId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGES_SENDER_RECEIVER)
                    .table(Messages::Table)
                    .col(Messages::SenderId)
                    .col(Messages::ReceiverId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MESSAGES_SENDER_RECEIVER)
                    .table(Messages::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    SenderId,
    ReceiverId,
    Content,
    Timestamp,
    IsRead,
    ReadAt,
}
