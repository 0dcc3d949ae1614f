use sea_orm::DatabaseConnection;

use crate::{
    model::{api::MessageDto, booking::NewRatingDto},
    server::{
        data::{
            booking::BookingRepository,
            rating::{NewRating, RatingRepository},
        },
        error::{booking::BookingError, is_unique_violation, validation::ValidationError, Error},
        service::non_blank,
        util::time,
    },
};

pub struct RatingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rates a booking from one to five stars, once per booking
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - The rating was stored
    /// - `Err(Error::ValidationError)` - A field is missing, stars are outside 1 to 5, or the
    ///   turf does not match the booking
    /// - `Err(Error::BookingError(BookingError::NotFound))` - The booking does not exist
    /// - `Err(Error::BookingError(BookingError::AlreadyRated))` - The booking was already rated
    pub async fn rate(&self, rating: NewRatingDto) -> Result<MessageDto, Error> {
        let user_id = rating.user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let turf_id = rating.turf_id.ok_or(ValidationError::MissingField("turf_id"))?;
        let booking_id = rating
            .booking_id
            .ok_or(ValidationError::MissingField("booking_id"))?;
        let stars = rating
            .stars
            .as_ref()
            .ok_or(ValidationError::MissingField("stars"))?
            .as_i64()
            .filter(|s| (1..=5).contains(s))
            .and_then(|s| i32::try_from(s).ok())
            .ok_or_else(|| ValidationError::invalid("stars", "must be a whole number from 1 to 5"))?;

        let booking = BookingRepository::new(self.db)
            .get(booking_id)
            .await?
            .ok_or(BookingError::NotFound(booking_id))?;
        if booking.turf_id != turf_id {
            return Err(ValidationError::invalid(
                "turf_id",
                format!("booking {} is not for turf {}", booking_id, turf_id),
            )
            .into());
        }

        let rating_repo = RatingRepository::new(self.db);
        if rating_repo.find_by_booking(booking_id).await?.is_some() {
            return Err(BookingError::AlreadyRated(booking_id).into());
        }

        let new_rating = NewRating {
            user_id,
            turf_id,
            booking_id,
            stars,
            review: non_blank(rating.review.as_deref()).map(str::to_string),
        };

        match rating_repo.create(new_rating, time::now()).await {
            Ok(_) => {}
            Err(err) if is_unique_violation(&err) => {
                return Err(BookingError::AlreadyRated(booking_id).into())
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(booking_id = %booking_id, stars = %stars, "Booking rated");

        Ok(MessageDto::new("Rating submitted successfully"))
    }
}

#[cfg(test)]
mod tests {
    mod rate {
        use chrono::{NaiveDate, NaiveTime};
        use sea_orm::{EntityTrait, PaginatorTrait};
        use turfbook_test_utils::prelude::*;

        use crate::{
            model::{api::Numeric, booking::NewRatingDto},
            server::{
                error::{booking::BookingError, validation::ValidationError, Error},
                service::rating::RatingService,
            },
        };

        async fn booked(test: &TestContext) -> Result<entity::booking::Model, TestError> {
            let owner = test.user().insert_owner("owner@example.com").await?;
            let user = test.user().insert_user("sam@example.com").await?;
            let turf = test.turf().insert_turf(owner.id, 1000.0).await?;

            test.booking()
                .insert_booking(
                    user.id,
                    turf.id,
                    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                    NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                    1000.0,
                )
                .await
        }

        fn rating(booking: &entity::booking::Model, stars: f64) -> NewRatingDto {
            NewRatingDto {
                user_id: Some(booking.user_id),
                turf_id: Some(booking.turf_id),
                booking_id: Some(booking.id),
                stars: Some(Numeric::Number(stars)),
                review: Some("Great pitch".to_string()),
            }
        }

        /// Expect the first rating to be stored and a second to conflict
        #[tokio::test]
        async fn rates_once() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booking = booked(&test).await?;
            let service = RatingService::new(&test.db);

            service.rate(rating(&booking, 4.0)).await.unwrap();
            let result = service.rate(rating(&booking, 5.0)).await;

            assert!(matches!(
                result,
                Err(Error::BookingError(BookingError::AlreadyRated(_)))
            ));
            assert_eq!(entity::prelude::Rating::find().count(&test.db).await?, 1);

            Ok(())
        }

        /// Expect stars outside 1 to 5 to be rejected
        #[tokio::test]
        async fn rejects_out_of_range_stars() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booking = booked(&test).await?;

            let result = RatingService::new(&test.db).rate(rating(&booking, 6.0)).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField { field: "stars", .. }))
            ));

            Ok(())
        }

        /// Expect NotFound for an unknown booking
        #[tokio::test]
        async fn fails_for_unknown_booking() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let booking = booked(&test).await?;

            let result = RatingService::new(&test.db)
                .rate(NewRatingDto {
                    booking_id: Some(booking.id + 100),
                    ..rating(&booking, 3.0)
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::BookingError(BookingError::NotFound(_)))
            ));

            Ok(())
        }
    }
}
