//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document served at `/api/docs/openapi.json`. Handlers sharing a path
/// with different methods are registered together.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes, ready to be given its state and middleware.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Turfbook", description = "Turf booking API"), tags(
        (name = controller::account::ACCOUNT_TAG, description = "Signup, login and presence"),
        (name = controller::user::USER_TAG, description = "User profiles, friends and bookings"),
        (name = controller::turf::TURF_TAG, description = "Turf listings, slots and owner dashboards"),
        (name = controller::booking::BOOKING_TAG, description = "Bookings and split payment games"),
        (name = controller::rating::RATING_TAG, description = "Turf ratings"),
        (name = controller::social::SOCIAL_TAG, description = "Friend requests and messaging"),
        (name = controller::admin::ADMIN_TAG, description = "Administration and announcements"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::account::signup))
        .routes(routes!(controller::account::login))
        .routes(routes!(controller::account::logout))
        .routes(routes!(controller::account::heartbeat))
        .routes(routes!(controller::user::search_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::update_upi))
        .routes(routes!(controller::user::get_friend_requests))
        .routes(routes!(controller::user::get_user_bookings))
        .routes(routes!(controller::user::get_friends))
        .routes(routes!(controller::turf::list_turfs))
        .routes(routes!(controller::turf::add_turf))
        .routes(routes!(
            controller::turf::get_turf,
            controller::turf::update_turf,
            controller::turf::delete_turf
        ))
        .routes(routes!(controller::turf::get_slots))
        .routes(routes!(controller::turf::get_owner_turfs))
        .routes(routes!(controller::turf::get_owner_bookings))
        .routes(routes!(controller::booking::book))
        .routes(routes!(controller::booking::get_game))
        .routes(routes!(controller::booking::pay_share))
        .routes(routes!(controller::rating::rate))
        .routes(routes!(controller::social::send_friend_request))
        .routes(routes!(controller::social::respond_friend_request))
        .routes(routes!(
            controller::social::get_messages,
            controller::social::send_message
        ))
        .routes(routes!(controller::social::mark_messages_read))
        .routes(routes!(controller::admin::get_stats))
        .routes(routes!(controller::admin::get_users))
        .routes(routes!(controller::admin::toggle_ban))
        .routes(routes!(controller::admin::get_turfs))
        .routes(routes!(controller::admin::approve_turf))
        .routes(routes!(controller::admin::get_owners))
        .routes(routes!(controller::admin::add_owner))
        .routes(routes!(controller::admin::delete_owner))
        .routes(routes!(controller::admin::announce))
        .routes(routes!(controller::admin::get_announcements))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
