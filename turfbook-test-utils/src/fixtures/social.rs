use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn social(&self) -> SocialFixtures<'_> {
        SocialFixtures { setup: self }
    }
}

pub struct SocialFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SocialFixtures<'a> {
    /// Insert a directed friendship edge from `user_id` to `friend_id`.
    pub async fn insert_friendship(
        &self,
        user_id: i32,
        friend_id: i32,
        status: &str,
    ) -> Result<entity::friend::Model, TestError> {
        Ok(entity::prelude::Friend::insert(entity::friend::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
            status: ActiveValue::Set(status.to_string()),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an unread message sent at `timestamp`.
    pub async fn insert_message(
        &self,
        sender_id: i32,
        receiver_id: i32,
        content: &str,
        timestamp: NaiveDateTime,
    ) -> Result<entity::message::Model, TestError> {
        Ok(entity::prelude::Message::insert(entity::message::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            content: ActiveValue::Set(content.to_string()),
            timestamp: ActiveValue::Set(timestamp),
            is_read: ActiveValue::Set(false),
            read_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
