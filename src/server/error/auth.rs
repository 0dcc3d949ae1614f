use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login failed for {0:?}: unknown user or wrong password")]
    InvalidCredentials(String),
    #[error("Login refused for banned user ID {0}")]
    Banned(i32),
    #[error("Username {0:?} is already registered")]
    UsernameTaken(String),
    #[error("Failed to hash password: {0}")]
    HashError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Invalid credentials")
            }
            Self::Banned(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                error_response(StatusCode::FORBIDDEN, "Account suspended. Contact support.")
            }
            Self::UsernameTaken(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::CONFLICT, "User already exists")
            }
            Self::HashError(_) => InternalServerError(self).into_response(),
        }
    }
}
