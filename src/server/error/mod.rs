//! Error types for the turf booking server.
//!
//! Each domain (accounts, turfs, bookings, the social graph, administration) has its own
//! `thiserror` enum with an `IntoResponse` implementation choosing the HTTP status and the
//! short reason returned to the caller. They are aggregated into [`Error`], which handlers and
//! services return so that `?` converts any of them.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod config;
pub mod social;
pub mod turf;
pub mod user;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        admin::AdminError, auth::AuthError, booking::BookingError, config::ConfigError,
        social::SocialError, turf::TurfError, user::UserError, validation::ValidationError,
    },
};

/// Main error type for the turf booking server.
///
/// Domain errors map to client facing 4xx responses, database and internal errors are logged
/// and reported as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Login or signup failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Missing or malformed request field.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    UserError(#[from] UserError),
    #[error(transparent)]
    TurfError(#[from] TurfError),
    /// Booking, game payment and rating errors.
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Friend request and messaging errors.
    #[error(transparent)]
    SocialError(#[from] SocialError),
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Request body was not valid JSON for the endpoint.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Query string did not match the endpoint's parameters.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::TurfError(err) => err.into_response(),
            Self::BookingError(err) => err.into_response(),
            Self::SocialError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());

                // Well formed JSON with a wrongly typed field is a validation failure
                let status = match &rejection {
                    JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
                    other => other.status(),
                };

                error_response(status, rejection.body_text())
            }
            Self::QueryRejection(rejection) => {
                tracing::debug!("Rejected query string: {}", rejection.body_text());

                error_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `{"error": ...}` response with the provided status.
pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message, so that no
/// implementation details or query text leak to callers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Returns true when the database rejected a write because of a unique constraint.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::{booking::BookingError, validation::ValidationError, Error};

    #[test]
    fn database_errors_are_internal() {
        let err = Error::DbErr(sea_orm::DbErr::Custom("connection reset".to_string()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_keep_their_status() {
        let conflict = Error::from(BookingError::AlreadyPaid {
            game_id: "sam-18PM".to_string(),
            player_name: "Alice".to_string(),
        });
        let invalid = Error::from(ValidationError::MissingField("player_name"));

        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
