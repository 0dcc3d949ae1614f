//! Fixtures for inserting rows during test execution.
//!
//! - `user` - accounts with a role, credential and presence timestamp
//! - `turf` - venues owned by an owner account
//! - `booking` - bookings, game payments and ratings
//! - `social` - friendship edges and messages

pub mod booking;
pub mod social;
pub mod turf;
pub mod user;
