use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use turfbook::{
    model::admin::{AnnounceDto, NewOwnerDto},
    server::{
        controller::{
            account::login,
            admin::{
                add_owner, announce, approve_turf, delete_owner, get_announcements, get_stats,
                get_users, toggle_ban,
            },
            util::json::ApiJson,
        },
        model::app::AppState,
    },
};

use super::*;

#[tokio::test]
/// Expect a banned user to be refused at login with 403
async fn banned_user_cannot_log_in() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("sam@example.com").await?;
    let state: AppState = test.to_app_state();

    let resp = respond(toggle_ban(State(state.clone()), Path(user.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["is_banned"], true);

    let resp = respond(
        login(
            State(state.clone()),
            ApiJson(turfbook::model::user::LoginDto {
                username: Some("sam@example.com".to_string()),
                password: Some("password".to_string()),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = respond(toggle_ban(State(state), Path(user.id + 100)).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect approving a pending turf to clear it from the pending count
async fn approving_turf_updates_stats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    test.user().insert_admin("admin@example.com").await?;
    let turf = test
        .turf()
        .insert_turf_with(owner.id, "Box Arena", "Mumbai", 600.0, "pending")
        .await?;
    let state: AppState = test.to_app_state();

    let stats = body_json(respond(get_stats(State(state.clone())).await)).await;
    assert_eq!(stats["pending_turfs"], 1);

    let resp = respond(approve_turf(State(state.clone()), Path(turf.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);

    let stats = body_json(respond(get_stats(State(state.clone())).await)).await;
    assert_eq!(stats["pending_turfs"], 0);
    assert_eq!(stats["owners"], 1);

    let users = body_json(respond(get_users(State(state)).await)).await;
    assert_eq!(users.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[tokio::test]
/// Expect 201 for a new owner, 409 for a taken username and deletion once added
async fn manages_owners() -> Result<(), TestError> {
    let test = TestBuilder::new().with_turf_tables().build().await?;
    let state: AppState = test.to_app_state();
    let owner = || {
        ApiJson(NewOwnerDto {
            username: Some("owner@example.com".to_string()),
            password: Some("secret".to_string()),
            name: None,
        })
    };

    let resp = respond(add_owner(State(state.clone()), owner()).await);
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = respond(add_owner(State(state.clone()), owner()).await);
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(resp).await["error"], "Username taken");

    let owner = turfbook::server::data::user::UserRepository::new(&test.db)
        .find_by_username("owner@example.com")
        .await?
        .unwrap();
    let resp = respond(delete_owner(State(state.clone()), Path(owner.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = respond(delete_owner(State(state), Path(owner.id)).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect announcements to be listed newest first and empty ones rejected
async fn broadcasts_announcements() -> Result<(), TestError> {
    let test = TestBuilder::new().with_announcement_tables().build().await?;
    let state: AppState = test.to_app_state();

    for message in ["Monsoon schedule", "New turfs in Pune"] {
        let resp = respond(
            announce(
                State(state.clone()),
                ApiJson(AnnounceDto {
                    message: Some(message.to_string()),
                }),
            )
            .await,
        );
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = respond(
        announce(
            State(state.clone()),
            ApiJson(AnnounceDto {
                message: Some(String::new()),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let feed = body_json(respond(get_announcements(State(state)).await)).await;
    assert_eq!(feed[0]["content"], "New turfs in Pune");
    assert_eq!(feed[1]["content"], "Monsoon schedule");

    Ok(())
}
