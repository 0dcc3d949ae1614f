//! HTTP controller endpoints for the turf booking API.
//!
//! Axum handlers for accounts, turfs, bookings and games, ratings, the social graph and
//! administration. Controllers extract the request, delegate to a service and wrap the result
//! in a JSON response. Each handler is annotated for utoipa's OpenAPI generation.

pub mod account;
pub mod admin;
pub mod booking;
pub mod rating;
pub mod social;
pub mod turf;
pub mod user;
pub mod util;
