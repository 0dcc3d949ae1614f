use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::Numeric,
        booking::{BookingCreatedDto, NewBookingDto, UserBookingDto},
    },
    server::{
        data::{
            booking::{BookingRepository, NewBooking},
            game_payment::{GamePaymentRepository, NewGamePayment},
            rating::RatingRepository,
            turf::TurfRepository,
            user::UserRepository,
        },
        error::{turf::TurfError, user::UserError, validation::ValidationError, Error},
        model::status::{BookingStatus, PaymentMode},
        service::non_blank,
        util::{money, time},
    },
};

/// Reference stored on the payment an organiser makes when booking
pub const ORGANISER_UPI_REF: &str = "ORGANISER";

/// Part of a username before the `@`, used as a display fallback and in game identifiers
pub fn username_prefix(username: &str) -> &str {
    username.split('@').next().unwrap_or(username)
}

fn parse_num_players(value: Option<&Numeric>) -> Result<i32, ValidationError> {
    let Some(value) = value else {
        return Ok(1);
    };

    value
        .as_i64()
        .filter(|n| *n >= 1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ValidationError::invalid("num_players", "must be a whole number of at least 1"))
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a slot and records the organiser's advance as the game's first payment.
    ///
    /// Split bookings take 20% of the total up front, the other modes take the full total.
    /// Slot availability is not checked here, clients are expected to consult the slot list.
    ///
    /// # Returns
    /// - `Ok(BookingCreatedDto)` - The booking and the organiser payment were stored
    /// - `Err(Error::ValidationError)` - A field is missing or malformed
    /// - `Err(Error::UserError)` - The booking user does not exist
    /// - `Err(Error::TurfError)` - The turf does not exist
    pub async fn create_booking(&self, booking: NewBookingDto) -> Result<BookingCreatedDto, Error> {
        let user_id = booking.user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let turf_id = booking.turf_id.ok_or(ValidationError::MissingField("turf_id"))?;
        let date = non_blank(booking.date.as_deref()).ok_or(ValidationError::MissingField("date"))?;
        let date = time::parse_date("date", date)?;
        let start_time = non_blank(booking.start_time.as_deref())
            .ok_or(ValidationError::MissingField("start_time"))?;
        let start_time = time::parse_time_of_day("start_time", start_time)?;
        let total = booking
            .amount
            .as_ref()
            .ok_or(ValidationError::MissingField("amount"))?
            .as_f64()
            .filter(|a| *a >= 0.0)
            .ok_or_else(|| ValidationError::invalid("amount", "must be a non-negative number"))?;
        let num_players = parse_num_players(booking.num_players.as_ref())?;
        let mode = match non_blank(booking.mode.as_deref()) {
            Some(mode) => mode.parse::<PaymentMode>()?,
            None => PaymentMode::Online,
        };

        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        if TurfRepository::new(self.db).get(turf_id).await?.is_none() {
            return Err(TurfError::NotFound(turf_id).into());
        }

        let prefix = username_prefix(&user.username);
        let game_id = format!("{}-{}", prefix, time::slot_label(start_time));
        let advance = money::advance_amount(total, mode == PaymentMode::Split);
        let share = money::share_per_player(total, num_players);
        let organiser = user.name.as_deref().unwrap_or(prefix);
        let now = time::now();

        let txn = self.db.begin().await?;

        let created = BookingRepository::new(&txn)
            .create(
                NewBooking {
                    user_id,
                    turf_id,
                    game_id: game_id.clone(),
                    total_amount: total,
                    advance_amount: advance,
                    num_players,
                    status: BookingStatus::Confirmed,
                    mode,
                    booking_date: date,
                    start_time,
                },
                now,
            )
            .await?;

        GamePaymentRepository::new(&txn)
            .create(
                NewGamePayment {
                    booking_id: created.id,
                    player_name: organiser,
                    player_id: Some(user_id),
                    amount_paid: advance,
                    upi_ref: Some(ORGANISER_UPI_REF),
                },
                now,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            booking_id = %created.id,
            game_id = %game_id,
            mode = %mode,
            "Booking confirmed"
        );

        Ok(BookingCreatedDto {
            message: "Booking confirmed".to_string(),
            game_id,
            booking_id: created.id,
            advance_paid: advance,
            share_per_player: share,
        })
    }

    /// A user's bookings, newest first, with completion and any rating given
    pub async fn user_bookings(&self, user_id: i32) -> Result<Vec<UserBookingDto>, Error> {
        let bookings = BookingRepository::new(self.db)
            .list_by_user_with_turf(user_id)
            .await?;

        let booking_ids: Vec<i32> = bookings.iter().map(|(b, _)| b.id).collect();
        let ratings: HashMap<i32, i32> = RatingRepository::new(self.db)
            .stars_for_bookings(&booking_ids)
            .await?
            .into_iter()
            .collect();

        let now = time::now();

        Ok(bookings
            .into_iter()
            .map(|(b, turf)| UserBookingDto {
                id: b.id,
                turf_id: b.turf_id,
                turf_name: turf.map(|t| t.name).unwrap_or_default(),
                date: time::iso_date(b.booking_date),
                time: time::hour_minute_second(b.start_time),
                amount: b.total_amount,
                is_completed: time::is_completed(now, b.booking_date, b.start_time),
                rating: ratings.get(&b.id).copied(),
                status: b.status,
            })
            .collect())
    }
}
