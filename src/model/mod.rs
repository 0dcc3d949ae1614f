//! JSON data transfer objects exchanged with API clients.

pub mod admin;
pub mod api;
pub mod booking;
pub mod social;
pub mod turf;
pub mod user;
