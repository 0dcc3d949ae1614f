//! Shared game view and per-player share collection for split bookings.

use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{GameDto, GamePaymentDto, PayShareDto, ShareRecordedDto},
    server::{
        data::{
            booking::BookingRepository,
            game_payment::{GamePaymentRepository, NewGamePayment},
            turf::TurfRepository,
            user::UserRepository,
        },
        error::{booking::BookingError, user::UserError, validation::ValidationError, Error},
        service::non_blank,
        util::{money, time},
    },
};

/// Display name used when an organiser has no name on record
const UNKNOWN_ORGANISER: &str = "Unknown";

/// `(collected, remaining)` for a booking total and its payments
fn tally(total: f64, payments: &[entity::game_payment::Model]) -> (f64, f64) {
    let collected: f64 = payments.iter().map(|p| p.amount_paid).sum();

    (money::round2(collected), money::round2(total - collected))
}

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn booking_for(&self, game_id: &str) -> Result<entity::booking::Model, Error> {
        Ok(BookingRepository::new(self.db)
            .latest_by_game_id(game_id)
            .await?
            .ok_or_else(|| BookingError::GameNotFound(game_id.to_string()))?)
    }

    /// Aggregated view of the game behind `game_id`.
    ///
    /// Game identifiers are not unique, the most recently created booking wins.
    pub async fn get_game(&self, game_id: &str) -> Result<GameDto, Error> {
        let booking = self.booking_for(game_id).await?;

        let user_repo = UserRepository::new(self.db);
        let turf = TurfRepository::new(self.db).get(booking.turf_id).await?;
        let owner = match &turf {
            Some(turf) => user_repo.get(turf.owner_id).await?,
            None => None,
        };
        let organiser = user_repo
            .get(booking.user_id)
            .await?
            .and_then(|u| u.name)
            .unwrap_or_else(|| UNKNOWN_ORGANISER.to_string());

        let payments = GamePaymentRepository::new(self.db)
            .list_by_booking(booking.id)
            .await?;
        let (collected, remaining) = tally(booking.total_amount, &payments);

        let (turf_name, turf_location) = turf
            .map(|t| (t.name, t.location))
            .unwrap_or_default();

        Ok(GameDto {
            game_id: booking.game_id,
            booking_id: booking.id,
            turf_name,
            turf_location,
            date: time::iso_date(booking.booking_date),
            time: time::hour_minute(booking.start_time),
            total_amount: booking.total_amount,
            num_players: booking.num_players,
            share_per_player: money::share_per_player(booking.total_amount, booking.num_players),
            amount_collected: collected,
            remaining,
            organiser,
            owner_upi: owner.and_then(|o| o.upi_id).filter(|upi| !upi.trim().is_empty()),
            slots_filled: payments.len() as u64,
            payments: payments
                .into_iter()
                .map(|p| GamePaymentDto {
                    player_name: p.player_name,
                    amount_paid: p.amount_paid,
                    upi_ref: p.upi_ref.unwrap_or_default(),
                    paid_at: time::hour_minute(p.paid_at.time()),
                })
                .collect(),
            status: booking.status,
        })
    }

    /// Records one player's share of the game's total.
    ///
    /// The share is recomputed from the booking's current total and player count on every
    /// call. A player may pay only once per game, matched on the exact name given.
    ///
    /// # Returns
    /// - `Ok(ShareRecordedDto)` - The payment was stored, with the updated totals
    /// - `Err(Error::BookingError(BookingError::GameNotFound))` - No booking carries `game_id`
    /// - `Err(Error::ValidationError)` - `player_name` or `upi_ref` is blank
    /// - `Err(Error::BookingError(BookingError::AlreadyPaid))` - The player has already paid
    /// - `Err(Error::UserError)` - `player_id` refers to a user that does not exist
    pub async fn record_share(
        &self,
        game_id: &str,
        share: PayShareDto,
    ) -> Result<ShareRecordedDto, Error> {
        let booking = self.booking_for(game_id).await?;

        let player_name = non_blank(share.player_name.as_deref())
            .ok_or(ValidationError::MissingField("player_name"))?;
        let upi_ref =
            non_blank(share.upi_ref.as_deref()).ok_or(ValidationError::MissingField("upi_ref"))?;

        let payment_repo = GamePaymentRepository::new(self.db);

        if payment_repo.exists_for_player(booking.id, player_name).await? {
            return Err(BookingError::AlreadyPaid {
                game_id: game_id.to_string(),
                player_name: player_name.to_string(),
            }
            .into());
        }

        if let Some(player_id) = share.player_id {
            if UserRepository::new(self.db).get(player_id).await?.is_none() {
                return Err(UserError::NotFound(player_id).into());
            }
        }

        let amount = money::share_per_player(booking.total_amount, booking.num_players);

        payment_repo
            .create(
                NewGamePayment {
                    booking_id: booking.id,
                    player_name,
                    player_id: share.player_id,
                    amount_paid: amount,
                    upi_ref: Some(upi_ref),
                },
                time::now(),
            )
            .await?;

        let payments = payment_repo.list_by_booking(booking.id).await?;
        let (collected, remaining) = tally(booking.total_amount, &payments);

        tracing::info!(
            booking_id = %booking.id,
            game_id = %game_id,
            amount = %amount,
            "Player share recorded"
        );

        Ok(ShareRecordedDto {
            message: format!("Payment of ₹{} recorded for {}", amount, player_name),
            share_paid: amount,
            slots_filled: payments.len() as u64,
            amount_collected: collected,
            remaining,
        })
    }
}
