use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking ID {0} not found")]
    NotFound(i32),
    #[error("No booking found for game ID {0:?}")]
    GameNotFound(String),
    /// A share has already been recorded under this player name
    #[error("{player_name} has already paid their share")]
    AlreadyPaid { game_id: String, player_name: String },
    #[error("Booking ID {0} has already been rated")]
    AlreadyRated(i32),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Booking not found"),
            Self::GameNotFound(_) => error_response(StatusCode::NOT_FOUND, "Game not found"),
            Self::AlreadyPaid { .. } => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::AlreadyRated(_) => error_response(StatusCode::CONFLICT, "Already rated"),
        }
    }
}
