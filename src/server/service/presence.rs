//! Online presence derived from the last activity timestamp.
//!
//! Clients call the heartbeat endpoint every 30 seconds while open. A user counts as online
//! while their last heartbeat or login lies within [`online_window`] of now, so several missed
//! beats are tolerated before they flip to offline. No online flag is stored.

use chrono::{Duration, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::Error, util::time};

/// How long after their last activity a user is still reported online.
pub fn online_window() -> Duration {
    Duration::minutes(2)
}

/// Whether a user last seen at `last_seen` is online at `now`.
///
/// The window is half open, a user seen exactly two minutes ago is offline.
pub fn is_online(now: NaiveDateTime, last_seen: Option<NaiveDateTime>) -> bool {
    last_seen.is_some_and(|seen| now - seen < online_window())
}

pub struct PresenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PresenceService<'a> {
    /// Creates a new instance of [`PresenceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records activity for a user.
    ///
    /// # Returns
    /// - `Ok(true)` - The user's last activity was refreshed
    /// - `Ok(false)` - No such user, nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn heartbeat(&self, user_id: i32) -> Result<bool, Error> {
        let updated = UserRepository::new(self.db)
            .touch_last_seen(user_id, time::now())
            .await?;

        Ok(updated > 0)
    }
}
