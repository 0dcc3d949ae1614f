pub use super::announcement::Entity as Announcement;
pub use super::booking::Entity as Booking;
pub use super::friend::Entity as Friend;
pub use super::game_payment::Entity as GamePayment;
pub use super::message::Entity as Message;
pub use super::rating::Entity as Rating;
pub use super::turf::Entity as Turf;
pub use super::user::Entity as User;
