//! Business logic services.
//!
//! Services validate requests, coordinate repositories and shape the DTOs returned by the
//! controllers. Operations writing more than one row open an explicit transaction and commit
//! it only once every write has succeeded.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod friend;
pub mod game;
pub mod message;
pub mod presence;
pub mod rating;
pub mod slot;
pub mod turf;
pub mod user;

/// Returns the trimmed value when it is present and not blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
