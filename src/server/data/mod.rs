//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over [`sea_orm::ConnectionTrait`] so
//! the same queries run against the pooled connection or inside a transaction.

pub mod announcement;
pub mod booking;
pub mod friend;
pub mod game_payment;
pub mod message;
pub mod rating;
pub mod turf;
pub mod user;
