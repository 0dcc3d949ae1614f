use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use turfbook::{
    model::{
        api::Numeric,
        turf::{CityQuery, NewTurfDto, OwnerQuery, TurfOwnerDto, UpdateTurfDto},
    },
    server::{
        controller::{
            turf::{add_turf, delete_turf, get_owner_turfs, get_turf, list_turfs, update_turf},
            util::{json::ApiJson, query::ApiQuery},
        },
        model::app::AppState,
    },
};

use super::*;

#[tokio::test]
/// Expect an added turf to be listed with split amenities and filtered by city
async fn added_turf_is_listed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    test.turf()
        .insert_turf_with(owner.id, "Box Arena", "Mumbai", 600.0, "approved")
        .await?;
    let state: AppState = test.to_app_state();

    let resp = respond(
        add_turf(
            State(state.clone()),
            ApiJson(NewTurfDto {
                owner_id: Some(owner.id),
                name: Some("Kick Off".to_string()),
                city: Some("Pune".to_string()),
                location: Some("Baner Road".to_string()),
                amenities: Some("Parking, Floodlights".to_string()),
                price: Some(Numeric::Text("1200".to_string())),
                ..Default::default()
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let turf_id = body_json(resp).await["id"].as_i64().unwrap() as i32;

    let listed = body_json(respond(
        list_turfs(
            State(state.clone()),
            ApiQuery(CityQuery {
                city: Some("pun".to_string()),
            }),
        )
        .await,
    ))
    .await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["sport_type"], "Cricket");
    assert_eq!(listed[0]["amenities"][1], "Floodlights");
    assert!(listed[0]["avg_rating"].is_null());

    let resp = respond(get_turf(State(state), Path(turf_id)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["price"], 1200.0);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the owner does not exist
async fn add_turf_requires_known_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_turf_tables().build().await?;

    let resp = respond(
        add_turf(
            State(test.to_app_state()),
            ApiJson(NewTurfDto {
                owner_id: Some(99),
                name: Some("Kick Off".to_string()),
                city: Some("Pune".to_string()),
                location: Some("Baner Road".to_string()),
                price: Some(Numeric::Number(1200.0)),
                ..Default::default()
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 when someone other than the owner edits or deletes the turf
async fn only_owner_may_modify() -> Result<(), TestError> {
    let test = TestBuilder::new().with_booking_tables().build().await?;
    let owner = test.user().insert_owner("owner@example.com").await?;
    let other = test.user().insert_owner("other@example.com").await?;
    let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
    let state: AppState = test.to_app_state();

    let resp = respond(
        update_turf(
            State(state.clone()),
            Path(turf.id),
            ApiJson(UpdateTurfDto {
                owner_id: Some(other.id),
                price: Some(Numeric::Number(1.0)),
                ..Default::default()
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = respond(
        delete_turf(
            State(state.clone()),
            Path(turf.id),
            ApiJson(TurfOwnerDto {
                owner_id: Some(other.id),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = respond(
        update_turf(
            State(state.clone()),
            Path(turf.id),
            ApiJson(UpdateTurfDto {
                owner_id: Some(owner.id),
                price: Some(Numeric::Number(1500.0)),
                ..Default::default()
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let turfs = body_json(respond(
        get_owner_turfs(
            State(state.clone()),
            ApiQuery(OwnerQuery {
                user_id: Some(owner.id),
            }),
        )
        .await,
    ))
    .await;
    assert_eq!(turfs[0]["price"], 1500.0);
    assert_eq!(turfs[0]["name"], "Green Field");

    let resp = respond(
        delete_turf(
            State(state.clone()),
            Path(turf.id),
            ApiJson(TurfOwnerDto {
                owner_id: Some(owner.id),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = respond(get_turf(State(state), Path(turf.id)).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
