use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000002_turfs::Turfs};

static IDX_BOOKINGS_TURF_DATE: &str = "idx-bookings-turf_id-booking_date";
static IDX_BOOKINGS_GAME_ID: &str = "idx-bookings-game_id";
static FK_BOOKINGS_USER_ID: &str = "fk-bookings-user_id";
static FK_BOOKINGS_TURF_ID: &str = "fk-bookings-turf_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // GameId is unbounded like Users::Username, which it embeds.
        // No unique constraint on (turf_id, booking_date, start_time): two
        // organisers can still book the same slot concurrently.
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(integer(Bookings::UserId))
                    .col(integer(Bookings::TurfId))
                    .col(string(Bookings::GameId))
                    .col(double(Bookings::TotalAmount))
                    .col(double(Bookings::AdvanceAmount))
                    .col(integer(Bookings::NumPlayers))
                    .col(string_len(Bookings::Status, 16))
                    .col(string_len(Bookings::Mode, 16))
                    .col(date(Bookings::BookingDate))
                    .col(time(Bookings::StartTime))
                    .col(timestamp(Bookings::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOOKINGS_USER_ID)
                            .from(Bookings::Table, Bookings::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOOKINGS_TURF_ID)
                            .from(Bookings::Table, Bookings::TurfId)
                            .to(Turfs::Table, Turfs::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKINGS_TURF_DATE)
                    .table(Bookings::Table)
                    .col(Bookings::TurfId)
                    .col(Bookings::BookingDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOKINGS_GAME_ID)
                    .table(Bookings::Table)
                    .col(Bookings::GameId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKINGS_GAME_ID)
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOKINGS_TURF_DATE)
                    .table(Bookings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    UserId,
    TurfId,
    GameId,
    TotalAmount,
    AdvanceAmount,
    NumPlayers,
    Status,
    Mode,
    BookingDate,
    StartTime,
    CreatedAt,
}
