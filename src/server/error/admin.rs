use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("User ID {0} is not an owner")]
    NotAnOwner(i32),
    #[error("Owner ID {owner_id} still owns {turfs} turf(s)")]
    OwnerHasTurfs { owner_id: i32, turfs: u64 },
    #[error("Username {0:?} is already taken")]
    UsernameTaken(String),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotAnOwner(_) => error_response(StatusCode::BAD_REQUEST, "User is not an owner"),
            Self::OwnerHasTurfs { .. } => error_response(
                StatusCode::CONFLICT,
                "Owner still has turfs, delete them first",
            ),
            Self::UsernameTaken(_) => error_response(StatusCode::CONFLICT, "Username taken"),
        }
    }
}
