use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn booking(&self) -> BookingFixtures<'_> {
        BookingFixtures { setup: self }
    }
}

pub struct BookingFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BookingFixtures<'a> {
    /// Insert a confirmed, fully paid online booking without any payment rows.
    pub async fn insert_booking(
        &self,
        user_id: i32,
        turf_id: i32,
        date: NaiveDate,
        start_time: NaiveTime,
        total_amount: f64,
    ) -> Result<entity::booking::Model, TestError> {
        self.insert_booking_with(
            user_id,
            turf_id,
            date,
            start_time,
            total_amount,
            1,
            "online",
            "confirmed",
            &format!("player-{}", start_time.format("%H")),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert_booking_with(
        &self,
        user_id: i32,
        turf_id: i32,
        date: NaiveDate,
        start_time: NaiveTime,
        total_amount: f64,
        num_players: i32,
        mode: &str,
        status: &str,
        game_id: &str,
    ) -> Result<entity::booking::Model, TestError> {
        let advance_amount = if mode == "split" {
            (total_amount * 0.20 * 100.0).round() / 100.0
        } else {
            total_amount
        };

        Ok(entity::prelude::Booking::insert(entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            turf_id: ActiveValue::Set(turf_id),
            game_id: ActiveValue::Set(game_id.to_string()),
            total_amount: ActiveValue::Set(total_amount),
            advance_amount: ActiveValue::Set(advance_amount),
            num_players: ActiveValue::Set(num_players),
            status: ActiveValue::Set(status.to_string()),
            mode: ActiveValue::Set(mode.to_string()),
            booking_date: ActiveValue::Set(date),
            start_time: ActiveValue::Set(start_time),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_payment(
        &self,
        booking_id: i32,
        player_name: &str,
        amount_paid: f64,
        upi_ref: &str,
    ) -> Result<entity::game_payment::Model, TestError> {
        Ok(
            entity::prelude::GamePayment::insert(entity::game_payment::ActiveModel {
                booking_id: ActiveValue::Set(booking_id),
                player_name: ActiveValue::Set(player_name.to_string()),
                player_id: ActiveValue::Set(None),
                amount_paid: ActiveValue::Set(amount_paid),
                upi_ref: ActiveValue::Set(Some(upi_ref.to_string())),
                paid_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_rating(
        &self,
        user_id: i32,
        turf_id: i32,
        booking_id: i32,
        stars: i32,
    ) -> Result<entity::rating::Model, TestError> {
        Ok(entity::prelude::Rating::insert(entity::rating::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            turf_id: ActiveValue::Set(turf_id),
            booking_id: ActiveValue::Set(booking_id),
            stars: ActiveValue::Set(stars),
            review: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
