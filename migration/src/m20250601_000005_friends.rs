use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_users::Users;

static FK_FRIENDS_USER_ID: &str = "fk-friends-user_id";
static FK_FRIENDS_FRIEND_ID: &str = "fk-friends-friend_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friends::Table)
                    .if_not_exists()
                    .col(integer(Friends::UserId))
                    .col(integer(Friends::FriendId))
                    .col(string_len(Friends::Status, 16))
                    .primary_key(Index::create().col(Friends::UserId).col(Friends::FriendId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FRIENDS_USER_ID)
                            .from(Friends::Table, Friends::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FRIENDS_FRIEND_ID)
                            .from(Friends::Table, Friends::FriendId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friends::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Friends {
    Table,
    UserId,
    FriendId,
    Status,
}
