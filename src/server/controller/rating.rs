use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::NewRatingDto,
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::rating::RatingService,
    },
};

pub static RATING_TAG: &str = "rating";

/// Rate a booked turf from one to five stars
///
/// Each booking can be rated once.
#[utoipa::path(
    post,
    path = "/api/ratings",
    tag = RATING_TAG,
    request_body = NewRatingDto,
    responses(
        (status = 201, description = "Rating submitted", body = MessageDto),
        (status = 400, description = "Missing fields or stars outside 1 to 5", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking already rated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rate(
    State(state): State<AppState>,
    ApiJson(rating): ApiJson<NewRatingDto>,
) -> Result<impl IntoResponse, Error> {
    let submitted = RatingService::new(&state.db).rate(rating).await?;

    Ok((StatusCode::CREATED, Json(submitted)))
}
