use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::status::FriendStatus;

pub struct FriendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FriendRepository<'a, C> {
    /// Creates a new instance of [`FriendRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending edge from `user_id` to `friend_id`
    ///
    /// Fails with a unique constraint violation if the same directed edge already exists.
    pub async fn create_request(
        &self,
        user_id: i32,
        friend_id: i32,
    ) -> Result<entity::friend::Model, DbErr> {
        let edge = entity::friend::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            friend_id: ActiveValue::Set(friend_id),
            status: ActiveValue::Set(FriendStatus::Pending.as_str().to_string()),
        };

        edge.insert(self.db).await
    }

    pub async fn get(
        &self,
        user_id: i32,
        friend_id: i32,
    ) -> Result<Option<entity::friend::Model>, DbErr> {
        entity::prelude::Friend::find_by_id((user_id, friend_id))
            .one(self.db)
            .await
    }

    pub async fn set_status(
        &self,
        edge: entity::friend::Model,
        status: FriendStatus,
    ) -> Result<entity::friend::Model, DbErr> {
        let mut edge_am: entity::friend::ActiveModel = edge.into();
        edge_am.status = ActiveValue::Set(status.as_str().to_string());

        edge_am.update(self.db).await
    }

    /// Accepted edges with `user_id` on either side
    pub async fn accepted_for(&self, user_id: i32) -> Result<Vec<entity::friend::Model>, DbErr> {
        entity::prelude::Friend::find()
            .filter(
                Condition::any()
                    .add(entity::friend::Column::UserId.eq(user_id))
                    .add(entity::friend::Column::FriendId.eq(user_id)),
            )
            .filter(entity::friend::Column::Status.eq(FriendStatus::Accepted.as_str()))
            .all(self.db)
            .await
    }

    /// Pending requests addressed to `user_id`
    pub async fn pending_incoming(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::friend::Model>, DbErr> {
        entity::prelude::Friend::find()
            .filter(entity::friend::Column::FriendId.eq(user_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Pending.as_str()))
            .all(self.db)
            .await
    }
}
