use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        turf::{
            CityQuery, NewTurfDto, OwnerBookingDto, OwnerQuery, OwnerTurfDto, SlotDto, SlotQuery,
            TurfCreatedDto, TurfDto, TurfOwnerDto, UpdateTurfDto,
        },
    },
    server::{
        controller::util::{json::ApiJson, query::ApiQuery},
        error::Error,
        model::app::AppState,
        service::{slot::SlotService, turf::TurfService},
    },
};

pub static TURF_TAG: &str = "turf";

/// List turfs, optionally filtered by city
///
/// The city filter matches any part of the city name, ignoring case.
#[utoipa::path(
    get,
    path = "/api/turfs",
    tag = TURF_TAG,
    params(CityQuery),
    responses(
        (status = 200, description = "Turfs with their average rating", body = Vec<TurfDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_turfs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CityQuery>,
) -> Result<impl IntoResponse, Error> {
    let turfs = TurfService::new(&state.db).list(query.city.as_deref()).await?;

    Ok((StatusCode::OK, Json(turfs)))
}

#[utoipa::path(
    get,
    path = "/api/turfs/{turf_id}",
    tag = TURF_TAG,
    params(("turf_id" = i32, Path, description = "ID of the turf")),
    responses(
        (status = 200, description = "The turf", body = TurfDto),
        (status = 404, description = "Turf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_turf(
    State(state): State<AppState>,
    Path(turf_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let turf = TurfService::new(&state.db).get(turf_id).await?;

    Ok((StatusCode::OK, Json(turf)))
}

/// Add a turf on behalf of an owner
///
/// # Responses
/// - 201 (Created): The turf is listed
/// - 400 (Bad Request): A required field is missing, the price is invalid or the owner does
///   not exist
#[utoipa::path(
    post,
    path = "/api/turfs/add",
    tag = TURF_TAG,
    request_body = NewTurfDto,
    responses(
        (status = 201, description = "Turf added", body = TurfCreatedDto),
        (status = 400, description = "Invalid turf or unknown owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_turf(
    State(state): State<AppState>,
    ApiJson(turf): ApiJson<NewTurfDto>,
) -> Result<impl IntoResponse, Error> {
    let created = TurfService::new(&state.db).create(turf).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a turf's details, only its owner may do so
#[utoipa::path(
    put,
    path = "/api/turfs/{turf_id}",
    tag = TURF_TAG,
    params(("turf_id" = i32, Path, description = "ID of the turf")),
    request_body = UpdateTurfDto,
    responses(
        (status = 200, description = "Turf updated", body = MessageDto),
        (status = 400, description = "Invalid price", body = ErrorDto),
        (status = 403, description = "Not the owner of the turf", body = ErrorDto),
        (status = 404, description = "Turf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_turf(
    State(state): State<AppState>,
    Path(turf_id): Path<i32>,
    ApiJson(changes): ApiJson<UpdateTurfDto>,
) -> Result<impl IntoResponse, Error> {
    TurfService::new(&state.db).update(turf_id, changes).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Turf updated"))))
}

/// Delete a turf along with its bookings, their payments and its ratings
#[utoipa::path(
    delete,
    path = "/api/turfs/{turf_id}",
    tag = TURF_TAG,
    params(("turf_id" = i32, Path, description = "ID of the turf")),
    request_body = TurfOwnerDto,
    responses(
        (status = 200, description = "Turf deleted", body = MessageDto),
        (status = 403, description = "Not the owner of the turf", body = ErrorDto),
        (status = 404, description = "Turf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_turf(
    State(state): State<AppState>,
    Path(turf_id): Path<i32>,
    ApiJson(owner): ApiJson<TurfOwnerDto>,
) -> Result<impl IntoResponse, Error> {
    TurfService::new(&state.db)
        .delete(turf_id, owner.owner_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Turf deleted"))))
}

/// Hourly slots of a turf on a date
///
/// Returns an empty list when no date is given.
#[utoipa::path(
    get,
    path = "/api/turfs/{turf_id}/slots",
    tag = TURF_TAG,
    params(("turf_id" = i32, Path, description = "ID of the turf"), SlotQuery),
    responses(
        (status = 200, description = "Slots from 09:00 to 23:00", body = Vec<SlotDto>),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_slots(
    State(state): State<AppState>,
    Path(turf_id): Path<i32>,
    ApiQuery(query): ApiQuery<SlotQuery>,
) -> Result<impl IntoResponse, Error> {
    let slots = SlotService::new(&state.db)
        .list(turf_id, query.date.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(slots)))
}

#[utoipa::path(
    get,
    path = "/api/owner/turfs",
    tag = TURF_TAG,
    params(OwnerQuery),
    responses(
        (status = 200, description = "Turfs of the owner", body = Vec<OwnerTurfDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_turfs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<OwnerQuery>,
) -> Result<impl IntoResponse, Error> {
    let turfs = TurfService::new(&state.db).owner_turfs(query.user_id).await?;

    Ok((StatusCode::OK, Json(turfs)))
}

#[utoipa::path(
    get,
    path = "/api/owner/bookings",
    tag = TURF_TAG,
    params(OwnerQuery),
    responses(
        (status = 200, description = "Bookings across the owner's turfs", body = Vec<OwnerBookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner_bookings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<OwnerQuery>,
) -> Result<impl IntoResponse, Error> {
    let bookings = TurfService::new(&state.db)
        .owner_bookings(query.user_id)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}
