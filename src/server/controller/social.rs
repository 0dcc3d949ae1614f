use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        social::{
            ChatMessageDto, ConversationQuery, FriendPairDto, MarkedReadDto, MessageSentDto,
            NewMessageDto,
        },
    },
    server::{
        controller::util::{json::ApiJson, query::ApiQuery},
        error::Error,
        model::app::AppState,
        service::{friend::FriendService, message::MessageService},
    },
};

pub static SOCIAL_TAG: &str = "social";

/// Send a friend request from `user_id` to `friend_id`
#[utoipa::path(
    post,
    path = "/api/friends/request",
    tag = SOCIAL_TAG,
    request_body = FriendPairDto,
    responses(
        (status = 200, description = "Request sent", body = MessageDto),
        (status = 400, description = "Missing ids or request to oneself", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Request already sent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_friend_request(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FriendPairDto>,
) -> Result<impl IntoResponse, Error> {
    let sent = FriendService::new(&state.db).send_request(request).await?;

    Ok((StatusCode::OK, Json(sent)))
}

/// Accept the friend request `friend_id` sent to `user_id`
#[utoipa::path(
    post,
    path = "/api/friends/respond",
    tag = SOCIAL_TAG,
    request_body = FriendPairDto,
    responses(
        (status = 200, description = "Request accepted", body = MessageDto),
        (status = 400, description = "Missing ids", body = ErrorDto),
        (status = 404, description = "No such request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_friend_request(
    State(state): State<AppState>,
    ApiJson(response): ApiJson<FriendPairDto>,
) -> Result<impl IntoResponse, Error> {
    let accepted = FriendService::new(&state.db).respond(response).await?;

    Ok((StatusCode::OK, Json(accepted)))
}

/// Open a conversation as `user_id`
///
/// Marks every message `friend_id` sent to `user_id` as read, then returns the latest 100
/// messages in chronological order.
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = SOCIAL_TAG,
    params(ConversationQuery),
    responses(
        (status = 200, description = "Messages of the conversation", body = Vec<ChatMessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ConversationQuery>,
) -> Result<impl IntoResponse, Error> {
    let messages = MessageService::new(&state.db)
        .conversation(query.user_id, query.friend_id)
        .await?;

    Ok((StatusCode::OK, Json(messages)))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = SOCIAL_TAG,
    request_body = NewMessageDto,
    responses(
        (status = 201, description = "Message sent", body = MessageSentDto),
        (status = 400, description = "Missing ids or empty text", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(message): ApiJson<NewMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let sent = MessageService::new(&state.db).send(message).await?;

    Ok((StatusCode::CREATED, Json(sent)))
}

#[utoipa::path(
    post,
    path = "/api/messages/read",
    tag = SOCIAL_TAG,
    request_body = FriendPairDto,
    responses(
        (status = 200, description = "Number of messages marked read", body = MarkedReadDto),
        (status = 400, description = "Missing ids", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_messages_read(
    State(state): State<AppState>,
    ApiJson(pair): ApiJson<FriendPairDto>,
) -> Result<impl IntoResponse, Error> {
    let marked = MessageService::new(&state.db)
        .mark_read(pair.user_id, pair.friend_id)
        .await?;

    Ok((StatusCode::OK, Json(marked)))
}
