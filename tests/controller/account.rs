use axum::{extract::{Path, State}, http::StatusCode};
use turfbook::{
    model::user::{LoginDto, SignupDto},
    server::{
        controller::{
            account::{heartbeat, login, signup},
            user::get_user,
            util::json::ApiJson,
        },
        model::app::AppState,
    },
};

use super::*;

fn signup_body(email: &str) -> ApiJson<SignupDto> {
    ApiJson(SignupDto {
        email: Some(email.to_string()),
        password: Some("hunter22".to_string()),
        name: Some("Sam".to_string()),
    })
}

fn login_body(username: &str, password: &str) -> ApiJson<LoginDto> {
    ApiJson(LoginDto {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    })
}

#[tokio::test]
/// Expect 201 on signup and 200 when logging in with the same credentials
async fn signup_then_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = respond(signup(State(state.clone()), signup_body("sam@example.com")).await);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["username"], "sam@example.com");
    assert_eq!(body["user"]["role"], "user");

    let resp = respond(login(State(state), login_body("sam@example.com", "hunter22")).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["user"]["name"], "Sam");
    assert_eq!(body["user"]["uid"].as_str().map(str::len), Some(6));

    Ok(())
}

#[tokio::test]
/// Expect 409 when signing up twice with the same email
async fn signup_conflicts_on_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_user("sam@example.com").await?;

    let resp = respond(signup(State(test.to_app_state()), signup_body("sam@example.com")).await);

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "User already exists");

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    test.user().insert_user("sam@example.com").await?;

    let resp = respond(
        login(
            State(test.to_app_state()),
            login_body("sam@example.com", "not-the-password"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect a heartbeat to make the user show up online, and 200 even for unknown users
async fn heartbeat_marks_user_online() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_user("sam@example.com").await?;
    let state: AppState = test.to_app_state();

    let before = body_json(respond(get_user(State(state.clone()), Path(user.id)).await)).await;
    assert_eq!(before["is_online"], false);

    let resp = respond(heartbeat(State(state.clone()), Path(user.id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["ok"], true);

    let after = body_json(respond(get_user(State(state.clone()), Path(user.id)).await)).await;
    assert_eq!(after["is_online"], true);

    let resp = respond(heartbeat(State(state), Path(user.id + 100)).await);
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
