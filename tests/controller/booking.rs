use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use turfbook::{
    model::{
        api::Numeric,
        booking::{NewBookingDto, NewRatingDto, PayShareDto},
        turf::SlotQuery,
    },
    server::{
        controller::{
            booking::{book, get_game, pay_share},
            rating::rate,
            turf::get_slots,
            user::get_user_bookings,
            util::{json::ApiJson, query::ApiQuery},
        },
        model::app::AppState,
    },
};

use super::*;

fn split_booking(user_id: i32, turf_id: i32) -> ApiJson<NewBookingDto> {
    ApiJson(NewBookingDto {
        user_id: Some(user_id),
        turf_id: Some(turf_id),
        date: Some("2025-06-01".to_string()),
        start_time: Some("18:00".to_string()),
        amount: Some(Numeric::Number(1000.0)),
        num_players: Some(Numeric::Number(4.0)),
        mode: Some("split".to_string()),
    })
}

fn share(player_name: &str, upi_ref: &str) -> ApiJson<PayShareDto> {
    ApiJson(PayShareDto {
        player_name: Some(player_name.to_string()),
        upi_ref: Some(upi_ref.to_string()),
        player_id: None,
    })
}

#[tokio::test]
/// Expect the split scenario: 200 advance, 250 shares, 450 collected after Alice pays
async fn split_booking_collects_shares() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test
        .user()
        .insert_owner_with_upi("owner@example.com", "greenfield@upi")
        .await?;
    let user = test.user().insert_user("organiser@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
    let state: AppState = test.to_app_state();

    let resp = respond(book(State(state.clone()), split_booking(user.id, turf.id)).await);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["advance_paid"], 200.0);
    assert_eq!(created["share_per_player"], 250.0);
    let game_id = created["game_id"].as_str().unwrap().to_string();
    assert_eq!(game_id, "organiser-18PM");

    let resp = respond(
        pay_share(
            State(state.clone()),
            Path(game_id.clone()),
            share("Alice", "TXN1"),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let paid = body_json(resp).await;
    assert_eq!(paid["amount_collected"], 450.0);
    assert_eq!(paid["remaining"], 550.0);
    assert_eq!(paid["slots_filled"], 2);

    let resp = respond(get_game(State(state), Path(game_id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    let game = body_json(resp).await;
    assert_eq!(game["share_per_player"], 250.0);
    assert_eq!(game["owner_upi"], "greenfield@upi");
    assert_eq!(game["payments"].as_array().map(Vec::len), Some(2));
    assert_eq!(game["payments"][1]["player_name"], "Alice");

    Ok(())
}

#[tokio::test]
/// Expect 409 when the same player pays twice, even with another reference
async fn duplicate_share_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    let user = test.user().insert_user("organiser@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
    let state: AppState = test.to_app_state();

    let created = body_json(respond(book(State(state.clone()), split_booking(user.id, turf.id)).await)).await;
    let game_id = created["game_id"].as_str().unwrap().to_string();

    let first = respond(
        pay_share(State(state.clone()), Path(game_id.clone()), share("Alice", "TXN1")).await,
    );
    let second = respond(pay_share(State(state), Path(game_id), share("Alice", "TXN2")).await);

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["error"], "Alice has already paid their share");

    Ok(())
}

#[tokio::test]
/// Expect 404 with "Game not found" for an unknown game
async fn unknown_game_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let state: AppState = test.to_app_state();

    let resp = respond(get_game(State(state.clone()), Path("ghost-09AM".to_string())).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Game not found");

    let resp = respond(
        pay_share(State(state), Path("ghost-09AM".to_string()), share("Alice", "TXN1")).await,
    );
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the player name is missing
async fn share_requires_player_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    let user = test.user().insert_user("organiser@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
    let state: AppState = test.to_app_state();

    let created = body_json(respond(book(State(state.clone()), split_booking(user.id, turf.id)).await)).await;
    let game_id = created["game_id"].as_str().unwrap().to_string();

    let resp = respond(pay_share(State(state), Path(game_id), share("", "TXN1")).await);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the booked 18:00 slot to be unavailable and the other 13 available
async fn booked_slot_becomes_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    let user = test.user().insert_user("organiser@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
    let state: AppState = test.to_app_state();

    respond(book(State(state.clone()), split_booking(user.id, turf.id)).await);

    let resp = respond(
        get_slots(
            State(state),
            Path(turf.id),
            ApiQuery(SlotQuery {
                date: Some("2025-06-01".to_string()),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);
    let slots = body_json(resp).await;
    let slots = slots.as_array().unwrap();

    assert_eq!(slots.len(), 14);
    let unavailable: Vec<&str> = slots
        .iter()
        .filter(|s| s["available"] == false)
        .filter_map(|s| s["start_raw"].as_str())
        .collect();
    assert_eq!(unavailable, vec!["18:00"]);

    Ok(())
}

#[tokio::test]
/// Expect a rated booking to show its stars in the booking history, and a second rating 409
async fn rating_shows_in_history() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    let user = test.user().insert_user("organiser@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
    let state: AppState = test.to_app_state();

    let created = body_json(respond(book(State(state.clone()), split_booking(user.id, turf.id)).await)).await;
    let booking_id = created["booking_id"].as_i64().unwrap() as i32;
    let rating = || {
        ApiJson(NewRatingDto {
            user_id: Some(user.id),
            turf_id: Some(turf.id),
            booking_id: Some(booking_id),
            stars: Some(Numeric::Text("4".to_string())),
            review: None,
        })
    };

    let resp = respond(rate(State(state.clone()), rating()).await);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = respond(rate(State(state.clone()), rating()).await);
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let history = body_json(respond(get_user_bookings(State(state), Path(user.id)).await)).await;
    assert_eq!(history[0]["id"], booking_id);
    assert_eq!(history[0]["rating"], 4);
    assert_eq!(history[0]["is_completed"], true);

    Ok(())
}
