use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::Numeric;

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewBookingDto {
    pub user_id: Option<i32>,
    pub turf_id: Option<i32>,
    /// Date formatted `YYYY-MM-DD`
    pub date: Option<String>,
    /// Start of the slot, `HH:MM`
    pub start_time: Option<String>,
    /// Total price of the slot
    pub amount: Option<Numeric>,
    /// Number of players splitting the total, defaults to 1
    pub num_players: Option<Numeric>,
    /// `online`, `offline` or `split`, defaults to `online`
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingCreatedDto {
    pub message: String,
    pub game_id: String,
    pub booking_id: i32,
    pub advance_paid: f64,
    pub share_per_player: f64,
}

/// A booking in the organiser's history
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserBookingDto {
    pub id: i32,
    pub turf_id: i32,
    pub turf_name: String,
    pub date: String,
    pub time: String,
    pub amount: f64,
    pub status: String,
    /// Whether the one hour slot has already ended
    pub is_completed: bool,
    /// Stars given to this booking, if rated
    pub rating: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GamePaymentDto {
    pub player_name: String,
    pub amount_paid: f64,
    pub upi_ref: String,
    /// Time of payment, `HH:MM`
    pub paid_at: String,
}

/// Aggregate view of a game shared with the players joining it
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub game_id: String,
    pub booking_id: i32,
    pub turf_name: String,
    pub turf_location: String,
    pub date: String,
    pub time: String,
    pub total_amount: f64,
    pub num_players: i32,
    pub share_per_player: f64,
    pub amount_collected: f64,
    /// Total less everything collected, negative when overpaid
    pub remaining: f64,
    pub organiser: String,
    /// UPI id of the turf owner that players pay their share to
    pub owner_upi: Option<String>,
    pub payments: Vec<GamePaymentDto>,
    pub slots_filled: u64,
    pub status: String,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PayShareDto {
    pub player_name: Option<String>,
    /// UPI transaction reference of the payment
    pub upi_ref: Option<String>,
    pub player_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ShareRecordedDto {
    pub message: String,
    pub share_paid: f64,
    pub slots_filled: u64,
    pub amount_collected: f64,
    pub remaining: f64,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewRatingDto {
    pub user_id: Option<i32>,
    pub turf_id: Option<i32>,
    pub booking_id: Option<i32>,
    pub stars: Option<Numeric>,
    pub review: Option<String>,
}
