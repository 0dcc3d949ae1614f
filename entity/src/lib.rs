//! SeaORM entity definitions for the turf booking schema.

pub mod prelude;

pub mod announcement;
pub mod booking;
pub mod friend;
pub mod game_payment;
pub mod message;
pub mod rating;
pub mod turf;
pub mod user;
