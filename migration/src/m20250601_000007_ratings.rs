use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250601_000001_users::Users, m20250601_000002_turfs::Turfs,
    m20250601_000003_bookings::Bookings,
};

static FK_RATINGS_USER_ID: &str = "fk-ratings-user_id";
static FK_RATINGS_TURF_ID: &str = "fk-ratings-turf_id";
static FK_RATINGS_BOOKING_ID: &str = "fk-ratings-booking_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(pk_auto(Ratings::Id))
                    .col(integer(Ratings::UserId))
                    .col(integer(Ratings::TurfId))
                    .col(integer_uniq(Ratings::BookingId))
                    .col(integer(Ratings::Stars))
                    .col(text_null(Ratings::Review))
                    .col(timestamp(Ratings::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RATINGS_USER_ID)
                            .from(Ratings::Table, Ratings::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RATINGS_TURF_ID)
                            .from(Ratings::Table, Ratings::TurfId)
                            .to(Turfs::Table, Turfs::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_RATINGS_BOOKING_ID)
                            .from(Ratings::Table, Ratings::BookingId)
                            .to(Bookings::Table, Bookings::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    UserId,
    TurfId,
    BookingId,
    Stars,
    Review,
    CreatedAt,
}
