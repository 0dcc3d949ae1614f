use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingCreatedDto, GameDto, NewBookingDto, PayShareDto, ShareRecordedDto},
    },
    server::{
        controller::util::json::ApiJson,
        error::Error,
        model::app::AppState,
        service::{booking::BookingService, game::GameService},
    },
};

pub static BOOKING_TAG: &str = "booking";

/// Book a turf slot
///
/// Split bookings charge the organiser 20% of the total up front and open a game that other
/// players join through the returned `game_id`.
///
/// # Responses
/// - 201 (Created): The booking is confirmed
/// - 400 (Bad Request): A field is missing or malformed
/// - 404 (Not Found): The user or the turf does not exist
#[utoipa::path(
    post,
    path = "/api/book",
    tag = BOOKING_TAG,
    request_body = NewBookingDto,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingCreatedDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 404, description = "User or turf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book(
    State(state): State<AppState>,
    ApiJson(booking): ApiJson<NewBookingDto>,
) -> Result<impl IntoResponse, Error> {
    let created = BookingService::new(&state.db).create_booking(booking).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get the shared view of a game
#[utoipa::path(
    get,
    path = "/api/game/{game_id}",
    tag = BOOKING_TAG,
    params(("game_id" = String, Path, description = "Game identifier, e.g. `alice-18PM`")),
    responses(
        (status = 200, description = "The game with its payments", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let game = GameService::new(&state.db).get_game(&game_id).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Record a player's share of a game
///
/// # Responses
/// - 201 (Created): The payment was recorded
/// - 400 (Bad Request): Player name or UPI reference missing
/// - 404 (Not Found): Game not found
/// - 409 (Conflict): The player has already paid
#[utoipa::path(
    post,
    path = "/api/game/{game_id}/pay",
    tag = BOOKING_TAG,
    params(("game_id" = String, Path, description = "Game identifier")),
    request_body = PayShareDto,
    responses(
        (status = 201, description = "Share recorded", body = ShareRecordedDto),
        (status = 400, description = "Missing player name or UPI reference", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 409, description = "Player already paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_share(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    ApiJson(share): ApiJson<PayShareDto>,
) -> Result<impl IntoResponse, Error> {
    let recorded = GameService::new(&state.db)
        .record_share(&game_id, share)
        .await?;

    Ok((StatusCode::CREATED, Json(recorded)))
}
