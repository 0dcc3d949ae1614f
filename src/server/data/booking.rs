use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::status::{BookingStatus, PaymentMode};

/// Fields of a new booking, amounts already computed
pub struct NewBooking {
    pub user_id: i32,
    pub turf_id: i32,
    pub game_id: String,
    pub total_amount: f64,
    pub advance_amount: f64,
    pub num_players: i32,
    pub status: BookingStatus,
    pub mode: PaymentMode,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
}

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new instance of [`BookingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        booking: NewBooking,
        created_at: NaiveDateTime,
    ) -> Result<entity::booking::Model, DbErr> {
        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(booking.user_id),
            turf_id: ActiveValue::Set(booking.turf_id),
            game_id: ActiveValue::Set(booking.game_id),
            total_amount: ActiveValue::Set(booking.total_amount),
            advance_amount: ActiveValue::Set(booking.advance_amount),
            num_players: ActiveValue::Set(booking.num_players),
            status: ActiveValue::Set(booking.status.as_str().to_string()),
            mode: ActiveValue::Set(booking.mode.as_str().to_string()),
            booking_date: ActiveValue::Set(booking.booking_date),
            start_time: ActiveValue::Set(booking.start_time),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        booking.insert(self.db).await
    }

    pub async fn get(&self, booking_id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await
    }

    /// Resolves a game identifier to the most recently created booking carrying it
    ///
    /// Game identifiers are derived from the organiser's name and slot hour and are not
    /// unique, later bookings shadow earlier ones.
    pub async fn latest_by_game_id(
        &self,
        game_id: &str,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::GameId.eq(game_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .one(self.db)
            .await
    }

    /// Bookings made by a user with their turf, newest first
    pub async fn list_by_user_with_turf(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::turf::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Turf)
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    /// Bookings on any of the provided turfs, latest date first and by start time within a date
    pub async fn list_for_turfs_with_turf(
        &self,
        turf_ids: &[i32],
    ) -> Result<Vec<(entity::booking::Model, Option<entity::turf::Model>)>, DbErr> {
        if turf_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::TurfId.is_in(turf_ids.iter().copied()))
            .find_also_related(entity::prelude::Turf)
            .order_by_desc(entity::booking::Column::BookingDate)
            .order_by_asc(entity::booking::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Start times of the confirmed bookings of a turf on a date
    pub async fn confirmed_start_times(
        &self,
        turf_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, DbErr> {
        entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::StartTime)
            .filter(entity::booking::Column::TurfId.eq(turf_id))
            .filter(entity::booking::Column::BookingDate.eq(date))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn ids_by_turf(&self, turf_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::Id)
            .filter(entity::booking::Column::TurfId.eq(turf_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn delete_by_turf(&self, turf_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Booking::delete_many()
            .filter(entity::booking::Column::TurfId.eq(turf_id))
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Booking::find().count(self.db).await
    }

    /// Sum of the totals of every booking, 0 when there are none
    pub async fn total_revenue(&self) -> Result<f64, DbErr> {
        let revenue: Option<Option<f64>> = entity::prelude::Booking::find()
            .select_only()
            .column_as(
                Expr::expr(Func::sum(Expr::col(entity::booking::Column::TotalAmount))),
                "revenue",
            )
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(revenue.flatten().unwrap_or(0.0))
    }
}
