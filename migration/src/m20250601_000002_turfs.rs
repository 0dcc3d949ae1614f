use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_users::Users;

static IDX_TURFS_OWNER_ID: &str = "idx-turfs-owner_id";
static FK_TURFS_OWNER_ID: &str = "fk-turfs-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Turfs::Table)
                    .if_not_exists()
                    .col(pk_auto(Turfs::Id))
                    .col(string(Turfs::Name))
                    .col(string_len(Turfs::SportType, 50))
                    .col(string(Turfs::City))
                    .col(text(Turfs::Location))
                    .col(text_null(Turfs::Amenities))
                    .col(double(Turfs::Price))
                    .col(string_len_null(Turfs::ImageUrl, 500))
                    .col(string_len(Turfs::Status, 16))
                    .col(integer(Turfs::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TURFS_OWNER_ID)
                            .from(Turfs::Table, Turfs::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TURFS_OWNER_ID)
                    .table(Turfs::Table)
                    .col(Turfs::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TURFS_OWNER_ID)
                    .table(Turfs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Turfs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Turfs {
    Table,
    Id,
    Name,
    SportType,
    City,
    Location,
    Amenities,
    Price,
    ImageUrl,
    Status,
    OwnerId,
}
