//! Money arithmetic.
//!
//! Amounts are stored as doubles and rounded to paise at every computation boundary, so shares
//! need not add up exactly to the total. `remaining` is the figure to reconcile against.

/// Fraction of the total collected up front from the organiser of a split booking.
pub const SPLIT_ADVANCE_RATE: f64 = 0.20;

/// Rounds to two decimal places, half away from zero.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Rounds to one decimal place, used for average ratings.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Amount the organiser pays when booking.
///
/// # Arguments
/// - `total` - Total price of the slot
/// - `split` - Whether the booking cost is split among players
///
/// # Returns
/// 20% of the total rounded to two decimals for split bookings, otherwise the full total.
pub fn advance_amount(total: f64, split: bool) -> f64 {
    if split {
        round2(total * SPLIT_ADVANCE_RATE)
    } else {
        total
    }
}

/// Each player's share of the total. A player count below one is treated as one.
pub fn share_per_player(total: f64, num_players: i32) -> f64 {
    round2(total / f64::from(num_players.max(1)))
}
