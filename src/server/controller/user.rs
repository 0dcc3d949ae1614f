use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::UserBookingDto,
        social::FriendDto,
        user::{
            FriendRequestSenderDto, PublicUserDto, SearchQuery, UpdateUpiDto, UpiUpdatedDto,
            UserSummaryDto,
        },
    },
    server::{
        controller::util::{json::ApiJson, query::ApiQuery},
        error::Error,
        model::app::AppState,
        service::{booking::BookingService, friend::FriendService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Get a user's public profile
///
/// # Responses
/// - 200 (OK): The profile with the user's current presence
/// - 404 (Not Found): No user with the provided ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving the profile", body = PublicUserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let profile = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Set or clear the UPI id an owner collects split payments on
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}/upi",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    request_body = UpdateUpiDto,
    responses(
        (status = 200, description = "UPI id updated", body = UpiUpdatedDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_upi(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    ApiJson(update): ApiJson<UpdateUpiDto>,
) -> Result<impl IntoResponse, Error> {
    let updated = UserService::new(&state.db)
        .update_upi(user_id, update.upi_id.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// Search players by name
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = USER_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching players", body = Vec<UserSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).search(query.q.as_deref()).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Pending friend requests addressed to a user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/requests",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Users awaiting an answer", body = Vec<FriendRequestSenderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friend_requests(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let requests = FriendService::new(&state.db).pending_requests(user_id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/bookings",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Bookings of the user, newest first", body = Vec<UserBookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let bookings = BookingService::new(&state.db).user_bookings(user_id).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Accepted friends of a user with presence and unread counts
///
/// Friends with a conversation come first, most recent first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/friends",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Friends of the user", body = Vec<FriendDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let friends = FriendService::new(&state.db).list_friends(user_id).await?;

    Ok((StatusCode::OK, Json(friends)))
}
