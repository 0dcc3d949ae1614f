use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_users::Users, m20250601_000003_bookings::Bookings};

static IDX_GAME_PAYMENTS_BOOKING_ID: &str = "idx-game_payments-booking_id";
static FK_GAME_PAYMENTS_BOOKING_ID: &str = "fk-game_payments-booking_id";
static FK_GAME_PAYMENTS_PLAYER_ID: &str = "fk-game_payments-player_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // (booking_id, player_name) is intentionally not unique, duplicates
        // are rejected by the service before insert.
        manager
            .create_table(
                Table::create()
                    .table(GamePayments::Table)
                    .if_not_exists()
                    .col(pk_auto(GamePayments::Id))
                    .col(integer(GamePayments::BookingId))
                    .col(string(GamePayments::PlayerName))
                    .col(integer_null(GamePayments::PlayerId))
                    .col(double(GamePayments::AmountPaid))
                    .col(string_len_null(GamePayments::UpiRef, 100))
                    .col(timestamp(GamePayments::PaidAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_PAYMENTS_BOOKING_ID)
                            .from(GamePayments::Table, GamePayments::BookingId)
                            .to(Bookings::Table, Bookings::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GAME_PAYMENTS_PLAYER_ID)
                            .from(GamePayments::Table, GamePayments::PlayerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GAME_PAYMENTS_BOOKING_ID)
                    .table(GamePayments::Table)
                    .col(GamePayments::BookingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GAME_PAYMENTS_BOOKING_ID)
                    .table(GamePayments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GamePayments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum GamePayments {
    Table,
    Id,
    BookingId,
    PlayerName,
    PlayerId,
    AmountPaid,
    UpiRef,
    PaidAt,
}
