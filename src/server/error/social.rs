use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum SocialError {
    #[error("User ID {0} attempted to send a friend request to themselves")]
    SelfRequest(i32),
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Friend request from user ID {user_id} to user ID {friend_id} already exists")]
    DuplicateRequest { user_id: i32, friend_id: i32 },
    #[error("No friend request from user ID {requester_id} to user ID {target_id}")]
    RequestNotFound { requester_id: i32, target_id: i32 },
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::SelfRequest(_) => {
                error_response(StatusCode::BAD_REQUEST, "Cannot send a friend request to yourself")
            }
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::DuplicateRequest { .. } => {
                error_response(StatusCode::CONFLICT, "Friend request already sent")
            }
            Self::RequestNotFound { .. } => {
                error_response(StatusCode::NOT_FOUND, "Friend request not found")
            }
        }
    }
}
