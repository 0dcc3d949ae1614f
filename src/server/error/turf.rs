use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum TurfError {
    #[error("Turf ID {0} not found")]
    NotFound(i32),
    #[error("User ID {owner_id:?} does not own turf ID {turf_id}")]
    NotOwner {
        turf_id: i32,
        owner_id: Option<i32>,
    },
    /// The owner submitting a new turf does not exist, usually a stale client session
    #[error("Owner ID {0} submitting a turf does not exist")]
    OwnerNotFound(i32),
}

impl IntoResponse for TurfError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Turf not found"),
            Self::NotOwner { .. } => error_response(StatusCode::FORBIDDEN, "Unauthorized"),
            Self::OwnerNotFound(_) => error_response(
                StatusCode::BAD_REQUEST,
                "User session invalid. Please logout and login again.",
            ),
        }
    }
}
