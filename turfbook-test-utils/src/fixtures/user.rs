use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

static NEXT_UID: AtomicU32 = AtomicU32::new(100000);

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an account with full control over role, credential and presence.
    pub async fn insert_account(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
        last_seen: Option<NaiveDateTime>,
    ) -> Result<entity::user::Model, TestError> {
        let uid = format!("{:06}", NEXT_UID.fetch_add(1, Ordering::Relaxed) % 1_000_000);
        let name = username.split('@').next().unwrap_or(username).to_string();

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role.to_string()),
            name: ActiveValue::Set(Some(name)),
            uid: ActiveValue::Set(uid),
            is_banned: ActiveValue::Set(false),
            upi_id: ActiveValue::Set(None),
            last_seen: ActiveValue::Set(last_seen),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a player account with a plain-text password of `password`.
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_account(username, "password", "user", None).await
    }

    /// Insert a turf owner account with a plain-text password of `password`.
    pub async fn insert_owner(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_account(username, "password", "owner", None).await
    }

    pub async fn insert_admin(&self, username: &str) -> Result<entity::user::Model, TestError> {
        self.insert_account(username, "password", "admin", None).await
    }

    /// Insert a turf owner who collects payments on the provided UPI id.
    pub async fn insert_owner_with_upi(
        &self,
        username: &str,
        upi_id: &str,
    ) -> Result<entity::user::Model, TestError> {
        let owner = self.insert_owner(username).await?;

        let mut owner_am: entity::user::ActiveModel = owner.into();
        owner_am.upi_id = ActiveValue::Set(Some(upi_id.to_string()));

        Ok(entity::prelude::User::update(owner_am)
            .exec(&self.setup.db)
            .await?)
    }
}
