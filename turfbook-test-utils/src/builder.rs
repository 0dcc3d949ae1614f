//! Declarative test builder.
//!
//! Tables are requested by domain; `build()` creates them in foreign key order so that
//! SQLite's foreign key enforcement behaves the same way as the production schema.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    users: bool,
    turfs: bool,
    bookings: bool,
    social: bool,
    announcements: bool,
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the `users` table.
    pub fn with_user_tables(mut self) -> Self {
        self.users = true;
        self
    }

    /// Add the `users` and `turfs` tables.
    pub fn with_turf_tables(mut self) -> Self {
        self.users = true;
        self.turfs = true;
        self
    }

    /// Add everything bookings depend on: users, turfs, bookings, game payments and ratings.
    pub fn with_booking_tables(mut self) -> Self {
        self.users = true;
        self.turfs = true;
        self.bookings = true;
        self
    }

    /// Add users, friends and messages.
    pub fn with_social_tables(mut self) -> Self {
        self.users = true;
        self.social = true;
        self
    }

    /// Add the announcements table.
    pub fn with_announcement_tables(mut self) -> Self {
        self.announcements = true;
        self
    }

    /// Add every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_booking_tables()
            .with_social_tables()
            .with_announcement_tables()
    }

    /// Add a custom entity table, created after the domain tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context by creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - In-memory database with the requested schema
    /// - `Err(TestError::DbErr)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.users {
            all_tables.push(schema.create_table_from_entity(entity::prelude::User));
        }

        if self.turfs {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Turf));
        }

        if self.bookings {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Booking),
                schema.create_table_from_entity(entity::prelude::GamePayment),
                schema.create_table_from_entity(entity::prelude::Rating),
            ]);
        }

        if self.social {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Friend),
                schema.create_table_from_entity(entity::prelude::Message),
            ]);
        }

        if self.announcements {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Announcement));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_all_tables() {
        let result = TestBuilder::new().with_all_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() {
        let result = TestBuilder::new()
            .with_turf_tables()
            .with_social_tables()
            .build()
            .await;
        assert!(result.is_ok());
    }
}
