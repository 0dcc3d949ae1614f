use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use turfbook::{
    model::social::{ConversationQuery, FriendPairDto, NewMessageDto},
    server::{
        controller::{
            social::{
                get_messages, mark_messages_read, respond_friend_request, send_friend_request,
                send_message,
            },
            user::{get_friend_requests, get_friends},
            util::{json::ApiJson, query::ApiQuery},
        },
        model::app::AppState,
    },
};

use super::*;

fn pair(user_id: i32, friend_id: i32) -> ApiJson<FriendPairDto> {
    ApiJson(FriendPairDto {
        user_id: Some(user_id),
        friend_id: Some(friend_id),
    })
}

fn conversation(user_id: i32, friend_id: i32) -> ApiQuery<ConversationQuery> {
    ApiQuery(ConversationQuery {
        user_id: Some(user_id),
        friend_id: Some(friend_id),
    })
}

#[tokio::test]
/// Expect an accepted request to list both users as each other's friends
async fn accepted_request_is_mutual() -> Result<(), TestError> {
    let test = TestBuilder::new().with_social_tables().build().await?;
    let sam = test.user().insert_user("sam@example.com").await?;
    let ana = test.user().insert_user("ana@example.com").await?;
    let state: AppState = test.to_app_state();

    let resp = respond(send_friend_request(State(state.clone()), pair(sam.id, ana.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], "Request sent");

    let requests =
        body_json(respond(get_friend_requests(State(state.clone()), Path(ana.id)).await)).await;
    assert_eq!(requests[0]["id"], sam.id);

    let resp = respond(respond_friend_request(State(state.clone()), pair(ana.id, sam.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], "Accepted");

    let sams = body_json(respond(get_friends(State(state.clone()), Path(sam.id)).await)).await;
    let anas = body_json(respond(get_friends(State(state), Path(ana.id)).await)).await;
    assert_eq!(sams[0]["id"], ana.id);
    assert_eq!(anas[0]["id"], sam.id);
    assert_eq!(anas[0]["status"], "offline");

    Ok(())
}

#[tokio::test]
/// Expect 409 for a repeated request and 400 for a request to oneself
async fn rejects_invalid_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_social_tables().build().await?;
    let sam = test.user().insert_user("sam@example.com").await?;
    let ana = test.user().insert_user("ana@example.com").await?;
    let state: AppState = test.to_app_state();

    respond(send_friend_request(State(state.clone()), pair(sam.id, ana.id)).await);
    let duplicate = respond(send_friend_request(State(state.clone()), pair(sam.id, ana.id)).await);
    let to_self = respond(send_friend_request(State(state.clone()), pair(sam.id, sam.id)).await);
    let unknown = respond(respond_friend_request(State(state), pair(sam.id, ana.id)).await);

    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    assert_eq!(to_self.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect reading a conversation to mark incoming messages read, and read to stick
async fn reading_conversation_is_monotonic() -> Result<(), TestError> {
    let test = TestBuilder::new().with_social_tables().build().await?;
    let sam = test.user().insert_user("sam@example.com").await?;
    let ana = test.user().insert_user("ana@example.com").await?;
    let state: AppState = test.to_app_state();

    let resp = respond(
        send_message(
            State(state.clone()),
            ApiJson(NewMessageDto {
                user_id: Some(ana.id),
                friend_id: Some(sam.id),
                text: Some("Game tonight?".to_string()),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);

    let first =
        body_json(respond(get_messages(State(state.clone()), conversation(sam.id, ana.id)).await))
            .await;
    let second =
        body_json(respond(get_messages(State(state.clone()), conversation(sam.id, ana.id)).await))
            .await;

    assert_eq!(first[0]["text"], "Game tonight?");
    assert_eq!(first[0]["sender"], "ana");
    assert_eq!(first[0]["is_read"], true);
    assert_eq!(second[0]["is_read"], true);
    assert_eq!(second[0]["read_at"], first[0]["read_at"]);

    let marked = body_json(respond(mark_messages_read(State(state), pair(sam.id, ana.id)).await)).await;
    assert_eq!(marked["marked_read"], 0);

    Ok(())
}

#[tokio::test]
/// Expect 400 when sending an empty message
async fn empty_message_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_social_tables().build().await?;
    let sam = test.user().insert_user("sam@example.com").await?;
    let ana = test.user().insert_user("ana@example.com").await?;

    let resp = respond(
        send_message(
            State(test.to_app_state()),
            ApiJson(NewMessageDto {
                user_id: Some(sam.id),
                friend_id: Some(ana.id),
                text: Some(String::new()),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
