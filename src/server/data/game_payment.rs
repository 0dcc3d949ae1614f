use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// A player's contribution towards a booking
pub struct NewGamePayment<'s> {
    pub booking_id: i32,
    pub player_name: &'s str,
    pub player_id: Option<i32>,
    pub amount_paid: f64,
    pub upi_ref: Option<&'s str>,
}

pub struct GamePaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GamePaymentRepository<'a, C> {
    /// Creates a new instance of [`GamePaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        payment: NewGamePayment<'_>,
        paid_at: NaiveDateTime,
    ) -> Result<entity::game_payment::Model, DbErr> {
        let payment = entity::game_payment::ActiveModel {
            booking_id: ActiveValue::Set(payment.booking_id),
            player_name: ActiveValue::Set(payment.player_name.to_string()),
            player_id: ActiveValue::Set(payment.player_id),
            amount_paid: ActiveValue::Set(payment.amount_paid),
            upi_ref: ActiveValue::Set(payment.upi_ref.map(str::to_string)),
            paid_at: ActiveValue::Set(paid_at),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    /// Payments towards a booking in the order they were made
    pub async fn list_by_booking(
        &self,
        booking_id: i32,
    ) -> Result<Vec<entity::game_payment::Model>, DbErr> {
        entity::prelude::GamePayment::find()
            .filter(entity::game_payment::Column::BookingId.eq(booking_id))
            .order_by_asc(entity::game_payment::Column::PaidAt)
            .order_by_asc(entity::game_payment::Column::Id)
            .all(self.db)
            .await
    }

    /// Whether a payment has been recorded under `player_name` for the booking
    ///
    /// Names are compared exactly. There is no unique constraint backing this check.
    pub async fn exists_for_player(
        &self,
        booking_id: i32,
        player_name: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::GamePayment::find()
            .filter(entity::game_payment::Column::BookingId.eq(booking_id))
            .filter(entity::game_payment::Column::PlayerName.eq(player_name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete_by_bookings(&self, booking_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::GamePayment::delete_many()
            .filter(entity::game_payment::Column::BookingId.is_in(booking_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}
