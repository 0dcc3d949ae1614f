use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{
            AdminTurfDto, AdminUserDto, AnnounceDto, AnnouncementDto, BanToggledDto, NewOwnerDto,
            OwnerDto, StatsDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::util::json::ApiJson, error::Error, model::app::AppState,
        service::admin::AdminService,
    },
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Platform statistics", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = AdminService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All accounts except administrators", body = Vec<AdminUserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = AdminService::new(&state.db).users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Ban a user, or lift the ban of a banned user
#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/ban",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Ban toggled", body = BanToggledDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_ban(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let toggled = AdminService::new(&state.db).toggle_ban(user_id).await?;

    Ok((StatusCode::OK, Json(toggled)))
}

#[utoipa::path(
    get,
    path = "/api/admin/turfs",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All turfs regardless of status", body = Vec<AdminTurfDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_turfs(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let turfs = AdminService::new(&state.db).turfs().await?;

    Ok((StatusCode::OK, Json(turfs)))
}

#[utoipa::path(
    post,
    path = "/api/admin/turfs/{turf_id}/approve",
    tag = ADMIN_TAG,
    params(("turf_id" = i32, Path, description = "ID of the turf")),
    responses(
        (status = 200, description = "Turf approved", body = MessageDto),
        (status = 404, description = "Turf not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_turf(
    State(state): State<AppState>,
    Path(turf_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let approved = AdminService::new(&state.db).approve_turf(turf_id).await?;

    Ok((StatusCode::OK, Json(approved)))
}

#[utoipa::path(
    get,
    path = "/api/admin/owners",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Owner accounts", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let owners = AdminService::new(&state.db).owners().await?;

    Ok((StatusCode::OK, Json(owners)))
}

/// Create an owner account
#[utoipa::path(
    post,
    path = "/api/admin/add-owner",
    tag = ADMIN_TAG,
    request_body = NewOwnerDto,
    responses(
        (status = 201, description = "Owner added", body = MessageDto),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 409, description = "Username taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_owner(
    State(state): State<AppState>,
    ApiJson(owner): ApiJson<NewOwnerDto>,
) -> Result<impl IntoResponse, Error> {
    let added = AdminService::new(&state.db).add_owner(owner).await?;

    Ok((StatusCode::CREATED, Json(added)))
}

/// Delete an owner account
///
/// # Responses
/// - 200 (OK): The owner was deleted
/// - 400 (Bad Request): The user is not an owner
/// - 404 (Not Found): No user with the provided ID
/// - 409 (Conflict): The owner still has turfs
#[utoipa::path(
    delete,
    path = "/api/admin/owners/{owner_id}",
    tag = ADMIN_TAG,
    params(("owner_id" = i32, Path, description = "ID of the owner")),
    responses(
        (status = 200, description = "Owner deleted", body = MessageDto),
        (status = 400, description = "User is not an owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Owner still has turfs", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let deleted = AdminService::new(&state.db).delete_owner(owner_id).await?;

    Ok((StatusCode::OK, Json(deleted)))
}

#[utoipa::path(
    post,
    path = "/api/admin/announce",
    tag = ADMIN_TAG,
    request_body = AnnounceDto,
    responses(
        (status = 200, description = "Announcement broadcast", body = MessageDto),
        (status = 400, description = "Empty announcement", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn announce(
    State(state): State<AppState>,
    ApiJson(announcement): ApiJson<AnnounceDto>,
) -> Result<impl IntoResponse, Error> {
    let broadcast = AdminService::new(&state.db).announce(announcement).await?;

    Ok((StatusCode::OK, Json(broadcast)))
}

/// The five most recent announcements, newest first
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Latest announcements", body = Vec<AnnouncementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcements(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let announcements = AdminService::new(&state.db).announcements().await?;

    Ok((StatusCode::OK, Json(announcements)))
}
