use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            HeartbeatDto, LoginDto, LoginResponseDto, LogoutDto, SignupDto, SignupResponseDto,
        },
    },
    server::{
        controller::util::json::ApiJson,
        error::Error,
        model::app::AppState,
        service::{auth::AuthService, presence::PresenceService},
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Register a player account
///
/// # Responses
/// - 201 (Created): The account was created
/// - 400 (Bad Request): Email or password missing
/// - 409 (Conflict): The email is already registered
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = ACCOUNT_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = SignupResponseDto),
        (status = 400, description = "Missing email or password", body = ErrorDto),
        (status = 409, description = "User already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(signup): ApiJson<SignupDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db).signup(signup).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponseDto {
            message: "User created".to_string(),
            user,
        }),
    ))
}

/// Log in with a username and password
///
/// Refreshes the user's presence on success.
///
/// # Responses
/// - 200 (OK): Credentials are valid, returns the session user
/// - 400 (Bad Request): Username or password missing
/// - 401 (Unauthorized): Unknown user or wrong password
/// - 403 (Forbidden): The account is banned
#[utoipa::path(
    post,
    path = "/api/login",
    tag = ACCOUNT_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Missing username or password", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account suspended", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(login): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .login(login.username.as_deref(), login.password.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            user,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    tag = ACCOUNT_TAG,
    request_body = LogoutDto,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    ApiJson(logout): ApiJson<LogoutDto>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db).logout(logout.user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Presence heartbeat sent periodically by clients
///
/// Always answers `{"ok": true}`, heartbeats for unknown users are ignored.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/heartbeat",
    tag = ACCOUNT_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Heartbeat recorded", body = HeartbeatDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn heartbeat(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PresenceService::new(&state.db).heartbeat(user_id).await?;

    Ok((StatusCode::OK, Json(HeartbeatDto { ok: true })))
}
