use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Messages exchanged between `a` and `b` in either direction
fn between(a: i32, b: i32) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(entity::message::Column::SenderId.eq(a))
                .add(entity::message::Column::ReceiverId.eq(b)),
        )
        .add(
            Condition::all()
                .add(entity::message::Column::SenderId.eq(b))
                .add(entity::message::Column::ReceiverId.eq(a)),
        )
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        sender_id: i32,
        receiver_id: i32,
        content: &str,
        timestamp: NaiveDateTime,
    ) -> Result<entity::message::Model, DbErr> {
        let message = entity::message::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            content: ActiveValue::Set(content.to_string()),
            timestamp: ActiveValue::Set(timestamp),
            is_read: ActiveValue::Set(false),
            read_at: ActiveValue::Set(None),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    /// Marks every unread message from `sender_id` to `receiver_id` as read at `now`
    ///
    /// Returns the number of messages marked. Messages already read keep their original
    /// `read_at`.
    pub async fn mark_read(
        &self,
        sender_id: i32,
        receiver_id: i32,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::update_many()
            .col_expr(entity::message::Column::IsRead, Expr::value(true))
            .col_expr(entity::message::Column::ReadAt, Expr::value(now))
            .filter(entity::message::Column::SenderId.eq(sender_id))
            .filter(entity::message::Column::ReceiverId.eq(receiver_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// The most recent `limit` messages between two users in chronological order
    pub async fn conversation(
        &self,
        a: i32,
        b: i32,
        limit: u64,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        let mut messages = entity::prelude::Message::find()
            .filter(between(a, b))
            .order_by_desc(entity::message::Column::Timestamp)
            .order_by_desc(entity::message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        messages.reverse();

        Ok(messages)
    }

    /// The latest message between two users in either direction
    pub async fn last_between(
        &self,
        a: i32,
        b: i32,
    ) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(between(a, b))
            .order_by_desc(entity::message::Column::Timestamp)
            .order_by_desc(entity::message::Column::Id)
            .one(self.db)
            .await
    }

    /// The latest message sent from `sender_id` to `receiver_id`
    pub async fn last_sent(
        &self,
        sender_id: i32,
        receiver_id: i32,
    ) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::SenderId.eq(sender_id))
            .filter(entity::message::Column::ReceiverId.eq(receiver_id))
            .order_by_desc(entity::message::Column::Timestamp)
            .order_by_desc(entity::message::Column::Id)
            .one(self.db)
            .await
    }

    /// Counts messages from `sender_id` to `receiver_id`, only those strictly after `after`
    /// when provided
    pub async fn count_sent(
        &self,
        sender_id: i32,
        receiver_id: i32,
        after: Option<NaiveDateTime>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Message::find()
            .filter(entity::message::Column::SenderId.eq(sender_id))
            .filter(entity::message::Column::ReceiverId.eq(receiver_id));

        if let Some(after) = after {
            query = query.filter(entity::message::Column::Timestamp.gt(after));
        }

        query.count(self.db).await
    }
}
