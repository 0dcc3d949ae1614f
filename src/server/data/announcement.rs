use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct AnnouncementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnnouncementRepository<'a, C> {
    /// Creates a new instance of [`AnnouncementRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        content: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::announcement::Model, DbErr> {
        let announcement = entity::announcement::ActiveModel {
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        announcement.insert(self.db).await
    }

    /// The `limit` most recent announcements, newest first
    pub async fn latest(&self, limit: u64) -> Result<Vec<entity::announcement::Model>, DbErr> {
        entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
