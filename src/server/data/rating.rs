use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QuerySelect,
};

pub struct NewRating {
    pub user_id: i32,
    pub turf_id: i32,
    pub booking_id: i32,
    pub stars: i32,
    pub review: Option<String>,
}

pub struct RatingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingRepository<'a, C> {
    /// Creates a new instance of [`RatingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Rates a booking
    ///
    /// Fails with a unique constraint violation if the booking has already been rated.
    pub async fn create(
        &self,
        rating: NewRating,
        created_at: NaiveDateTime,
    ) -> Result<entity::rating::Model, DbErr> {
        let rating = entity::rating::ActiveModel {
            user_id: ActiveValue::Set(rating.user_id),
            turf_id: ActiveValue::Set(rating.turf_id),
            booking_id: ActiveValue::Set(rating.booking_id),
            stars: ActiveValue::Set(rating.stars),
            review: ActiveValue::Set(rating.review),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        rating.insert(self.db).await
    }

    pub async fn find_by_booking(
        &self,
        booking_id: i32,
    ) -> Result<Option<entity::rating::Model>, DbErr> {
        entity::prelude::Rating::find()
            .filter(entity::rating::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await
    }

    /// `(turf_id, stars)` for every rating of the provided turfs
    pub async fn stars_for_turfs(&self, turf_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        if turf_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Rating::find()
            .select_only()
            .column(entity::rating::Column::TurfId)
            .column(entity::rating::Column::Stars)
            .filter(entity::rating::Column::TurfId.is_in(turf_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// `(booking_id, stars)` for every rating of the provided bookings
    pub async fn stars_for_bookings(
        &self,
        booking_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        if booking_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Rating::find()
            .select_only()
            .column(entity::rating::Column::BookingId)
            .column(entity::rating::Column::Stars)
            .filter(entity::rating::Column::BookingId.is_in(booking_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await
    }

    pub async fn delete_by_turf(&self, turf_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Rating::delete_many()
            .filter(entity::rating::Column::TurfId.eq(turf_id))
            .exec(self.db)
            .await
    }
}
