pub use sea_orm_migration::prelude::*;

mod m20250601_000001_users;
mod m20250601_000002_turfs;
mod m20250601_000003_bookings;
mod m20250601_000004_game_payments;
mod m20250601_000005_friends;
mod m20250601_000006_messages;
mod m20250601_000007_ratings;
mod m20250601_000008_announcements;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_users::Migration),
            Box::new(m20250601_000002_turfs::Migration),
            Box::new(m20250601_000003_bookings::Migration),
            Box::new(m20250601_000004_game_payments::Migration),
            Box::new(m20250601_000005_friends::Migration),
            Box::new(m20250601_000006_messages::Migration),
            Box::new(m20250601_000007_ratings::Migration),
            Box::new(m20250601_000008_announcements::Migration),
        ]
    }
}
