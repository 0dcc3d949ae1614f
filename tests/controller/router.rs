use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use turfbook::server::{model::app::AppState, router};

use super::*;

fn app(state: AppState) -> Router {
    router::routes().with_state(state)
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

#[tokio::test]
/// Expect turfs to be listed through the router with the city filter applied
async fn routes_list_turfs_with_city_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    test.turf()
        .insert_turf_with(owner.id, "Green Field", "Pune", 1000.0, "approved")
        .await?;
    test.turf()
        .insert_turf_with(owner.id, "Blue Court", "Mumbai", 800.0, "approved")
        .await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/api/turfs?city=pun"))
        .await
        .expect("Router is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let turfs = body.as_array().expect("Expected a JSON array");
    assert_eq!(turfs.len(), 1);
    assert_eq!(turfs[0]["name"], "Green Field");

    Ok(())
}

#[tokio::test]
/// Expect 14 slots for a dated request routed through the slot path
async fn routes_slot_listing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;

    let uri = format!("/api/turfs/{}/slots?date=2025-06-01", turf.id);
    let resp = app(test.to_app_state())
        .oneshot(get(&uri))
        .await
        .expect("Router is infallible");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(14));

    Ok(())
}

#[tokio::test]
/// Expect a malformed JSON body to be rejected with a 400 JSON error
async fn rejects_malformed_json_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(json_request(Method::POST, "/api/signup", "{not json"))
        .await
        .expect("Router is infallible");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect an unknown game code to return 404 through the router
async fn routes_unknown_game_to_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/api/game/nobody-18PM"))
        .await
        .expect("Router is infallible");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect wrongly typed booking fields to be rejected with a 400 JSON error
async fn rejects_wrongly_typed_booking_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let router = app(test.to_app_state());

    for body in [
        r#"{"user_id":1,"turf_id":1,"date":"2025-06-01","start_time":"18:00","amount":true}"#,
        r#"{"user_id":"2","turf_id":1,"date":"2025-06-01","start_time":"18:00","amount":1000}"#,
    ] {
        let resp = router
            .clone()
            .oneshot(json_request(Method::POST, "/api/book", body))
            .await
            .expect("Router is infallible");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error = body_json(resp).await;
        assert!(error["error"].is_string());
    }

    Ok(())
}

#[tokio::test]
/// Expect a non numeric id in the conversation query to be rejected with a 400 JSON error
async fn rejects_unparsable_conversation_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_social_tables().build().await?;

    let resp = app(test.to_app_state())
        .oneshot(get("/api/messages?user_id=abc&friend_id=2"))
        .await
        .expect("Router is infallible");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}
