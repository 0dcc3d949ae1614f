//! Turf listings and owner management.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::Numeric,
        turf::{NewTurfDto, OwnerBookingDto, OwnerTurfDto, TurfCreatedDto, TurfDto, UpdateTurfDto},
    },
    server::{
        data::{
            booking::BookingRepository,
            game_payment::GamePaymentRepository,
            rating::RatingRepository,
            turf::{TurfFields, TurfRepository},
            user::UserRepository,
        },
        error::{turf::TurfError, validation::ValidationError, Error},
        model::status::TurfStatus,
        service::non_blank,
        util::{money::round1, time},
    },
};

/// Sport assumed when an owner does not specify one
const DEFAULT_SPORT: &str = "Cricket";

/// Splits a comma-joined amenity list, dropping blank entries
fn split_amenities(amenities: Option<&str>) -> Vec<String> {
    amenities
        .map(|a| {
            a.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Mean of the stars rounded to one decimal, `None` without ratings
fn average_rating(stars: &[i32]) -> Option<f64> {
    if stars.is_empty() {
        return None;
    }

    let total: i32 = stars.iter().sum();

    Some(round1(f64::from(total) / stars.len() as f64))
}

fn parse_price(price: &Numeric) -> Result<f64, ValidationError> {
    price
        .as_f64()
        .filter(|p| *p >= 0.0)
        .ok_or_else(|| ValidationError::invalid("price", "must be a non-negative number"))
}

fn turf_dto(turf: entity::turf::Model, stars: &[i32]) -> TurfDto {
    TurfDto {
        id: turf.id,
        amenities: split_amenities(turf.amenities.as_deref()),
        avg_rating: average_rating(stars),
        name: turf.name,
        sport_type: turf.sport_type,
        city: turf.city,
        location: turf.location,
        price: turf.price,
        image_url: turf.image_url,
    }
}

pub struct TurfService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TurfService<'a> {
    /// Creates a new instance of [`TurfService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists turfs with their average rating, optionally filtered by city
    pub async fn list(&self, city: Option<&str>) -> Result<Vec<TurfDto>, Error> {
        let turfs = TurfRepository::new(self.db).list(non_blank(city)).await?;

        let turf_ids: Vec<i32> = turfs.iter().map(|t| t.id).collect();
        let mut stars_by_turf: HashMap<i32, Vec<i32>> = HashMap::new();
        for (turf_id, stars) in RatingRepository::new(self.db)
            .stars_for_turfs(&turf_ids)
            .await?
        {
            stars_by_turf.entry(turf_id).or_default().push(stars);
        }

        Ok(turfs
            .into_iter()
            .map(|turf| {
                let stars = stars_by_turf.remove(&turf.id).unwrap_or_default();
                turf_dto(turf, &stars)
            })
            .collect())
    }

    pub async fn get(&self, turf_id: i32) -> Result<TurfDto, Error> {
        let turf = TurfRepository::new(self.db)
            .get(turf_id)
            .await?
            .ok_or(TurfError::NotFound(turf_id))?;

        let stars: Vec<i32> = RatingRepository::new(self.db)
            .stars_for_turfs(&[turf_id])
            .await?
            .into_iter()
            .map(|(_, stars)| stars)
            .collect();

        Ok(turf_dto(turf, &stars))
    }

    /// Adds a turf on behalf of an owner.
    ///
    /// Turfs are listed immediately, administrators may still moderate them later.
    ///
    /// # Returns
    /// - `Ok(TurfCreatedDto)` - The turf was created
    /// - `Err(Error::ValidationError)` - A required field is missing or the price is invalid
    /// - `Err(Error::TurfError(TurfError::OwnerNotFound))` - The owner does not exist
    pub async fn create(&self, turf: NewTurfDto) -> Result<TurfCreatedDto, Error> {
        let owner_id = turf.owner_id.ok_or(ValidationError::MissingField("owner_id"))?;
        let price = parse_price(
            turf.price
                .as_ref()
                .ok_or(ValidationError::MissingField("price"))?,
        )?;
        let name = non_blank(turf.name.as_deref()).ok_or(ValidationError::MissingField("name"))?;
        let city = non_blank(turf.city.as_deref()).ok_or(ValidationError::MissingField("city"))?;
        let location =
            non_blank(turf.location.as_deref()).ok_or(ValidationError::MissingField("location"))?;

        if UserRepository::new(self.db).get(owner_id).await?.is_none() {
            return Err(TurfError::OwnerNotFound(owner_id).into());
        }

        let fields = TurfFields {
            name: name.to_string(),
            sport_type: non_blank(turf.sport_type.as_deref())
                .unwrap_or(DEFAULT_SPORT)
                .to_string(),
            city: city.to_string(),
            location: location.to_string(),
            amenities: non_blank(turf.amenities.as_deref()).map(str::to_string),
            price,
            image_url: non_blank(turf.image_url.as_deref()).map(str::to_string),
        };

        let created = TurfRepository::new(self.db)
            .create(owner_id, fields, TurfStatus::Approved)
            .await?;

        tracing::info!(turf_id = %created.id, owner_id = %owner_id, "Turf added");

        Ok(TurfCreatedDto {
            message: "Turf added successfully".to_string(),
            id: created.id,
        })
    }

    /// Fetches a turf and checks that `owner_id` owns it
    async fn owned_turf(
        &self,
        turf_id: i32,
        owner_id: Option<i32>,
    ) -> Result<entity::turf::Model, Error> {
        let turf = TurfRepository::new(self.db)
            .get(turf_id)
            .await?
            .ok_or(TurfError::NotFound(turf_id))?;

        if owner_id != Some(turf.owner_id) {
            return Err(TurfError::NotOwner { turf_id, owner_id }.into());
        }

        Ok(turf)
    }

    /// Updates the fields present in `changes`, leaving the others untouched
    pub async fn update(&self, turf_id: i32, changes: UpdateTurfDto) -> Result<(), Error> {
        let turf = self.owned_turf(turf_id, changes.owner_id).await?;

        let price = match changes.price.as_ref() {
            Some(price) => parse_price(price)?,
            None => turf.price,
        };

        let keep = |new: Option<String>, old: String| {
            non_blank(new.as_deref())
                .map(str::to_string)
                .unwrap_or(old)
        };

        let fields = TurfFields {
            name: keep(changes.name, turf.name.clone()),
            sport_type: keep(changes.sport_type, turf.sport_type.clone()),
            city: keep(changes.city, turf.city.clone()),
            location: keep(changes.location, turf.location.clone()),
            amenities: changes.amenities.or_else(|| turf.amenities.clone()),
            price,
            image_url: changes.image_url.or_else(|| turf.image_url.clone()),
        };

        TurfRepository::new(self.db).update(turf, fields).await?;

        tracing::info!(turf_id = %turf_id, "Turf updated");

        Ok(())
    }

    /// Deletes a turf together with its ratings, its bookings and their payments.
    ///
    /// Everything is removed in one transaction, on any failure nothing is deleted.
    pub async fn delete(&self, turf_id: i32, owner_id: Option<i32>) -> Result<(), Error> {
        self.owned_turf(turf_id, owner_id).await?;

        let txn = self.db.begin().await?;

        let booking_ids = BookingRepository::new(&txn).ids_by_turf(turf_id).await?;
        if !booking_ids.is_empty() {
            GamePaymentRepository::new(&txn)
                .delete_by_bookings(&booking_ids)
                .await?;
        }
        RatingRepository::new(&txn).delete_by_turf(turf_id).await?;
        BookingRepository::new(&txn).delete_by_turf(turf_id).await?;
        TurfRepository::new(&txn).delete(turf_id).await?;

        txn.commit().await?;

        tracing::info!(
            turf_id = %turf_id,
            bookings = booking_ids.len(),
            "Turf deleted"
        );

        Ok(())
    }

    /// Turfs owned by a user, empty when no user is given
    pub async fn owner_turfs(&self, owner_id: Option<i32>) -> Result<Vec<OwnerTurfDto>, Error> {
        let Some(owner_id) = owner_id else {
            return Ok(Vec::new());
        };

        let turfs = TurfRepository::new(self.db).list_by_owner(owner_id).await?;

        Ok(turfs
            .into_iter()
            .map(|t| OwnerTurfDto {
                id: t.id,
                name: t.name,
                sport_type: t.sport_type,
                city: t.city,
                location: t.location,
                price: t.price,
                image_url: t.image_url,
                amenities: t.amenities,
            })
            .collect())
    }

    /// Bookings across every turf of an owner, empty when no user is given
    pub async fn owner_bookings(
        &self,
        owner_id: Option<i32>,
    ) -> Result<Vec<OwnerBookingDto>, Error> {
        let Some(owner_id) = owner_id else {
            return Ok(Vec::new());
        };

        let turf_ids: Vec<i32> = TurfRepository::new(self.db)
            .list_by_owner(owner_id)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        let bookings = BookingRepository::new(self.db)
            .list_for_turfs_with_turf(&turf_ids)
            .await?;

        Ok(bookings
            .into_iter()
            .map(|(b, turf)| OwnerBookingDto {
                id: b.id,
                turf_name: turf.map(|t| t.name).unwrap_or_default(),
                date: time::iso_date(b.booking_date),
                time: time::hour_minute_second(b.start_time),
                status: b.status,
                mode: b.mode,
                amount: b.total_amount,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{average_rating, split_amenities};

    #[test]
    fn splits_amenities_on_commas() {
        assert_eq!(
            split_amenities(Some("Parking, Floodlights,,Showers")),
            vec!["Parking", "Floodlights", "Showers"]
        );
        assert!(split_amenities(None).is_empty());
    }

    #[test]
    fn averages_to_one_decimal() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(average_rating(&[5, 4, 4]), Some(4.3));
    }

    mod list {
        use turfbook_test_utils::prelude::*;

        use crate::server::service::turf::TurfService;

        /// Expect ratings to be averaged per turf
        #[tokio::test]
        async fn includes_average_rating() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let owner = test.user().insert_owner("owner@example.com").await?;
            let user = test.user().insert_user("sam@example.com").await?;
            let rated = test.turf().insert_turf(owner.id, 1000.0).await?;
            let unrated = test.turf().insert_turf(owner.id, 800.0).await?;
            let date = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            for (hour, stars) in [(9, 5), (10, 4)] {
                let booking = test
                    .booking()
                    .insert_booking(
                        user.id,
                        rated.id,
                        date,
                        chrono::NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
                        1000.0,
                    )
                    .await?;
                test.booking()
                    .insert_rating(user.id, rated.id, booking.id, stars)
                    .await?;
            }

            let turfs = TurfService::new(&test.db).list(None).await.unwrap();

            let rated = turfs.iter().find(|t| t.id == rated.id).unwrap();
            let unrated = turfs.iter().find(|t| t.id == unrated.id).unwrap();
            assert_eq!(rated.avg_rating, Some(4.5));
            assert_eq!(unrated.avg_rating, None);

            Ok(())
        }
    }

    mod delete {
        use chrono::{NaiveDate, NaiveTime};
        use sea_orm::{EntityTrait, PaginatorTrait};
        use turfbook_test_utils::prelude::*;

        use crate::server::{
            error::{turf::TurfError, Error},
            service::turf::TurfService,
        };

        /// Expect the turf, its bookings, payments and ratings to be removed
        #[tokio::test]
        async fn cascades_to_bookings() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let owner = test.user().insert_owner("owner@example.com").await?;
            let user = test.user().insert_user("sam@example.com").await?;
            let turf = test.turf().insert_turf(owner.id, 1000.0).await?;
            let other = test.turf().insert_turf(owner.id, 1000.0).await?;
            let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            let start = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
            let booking = test
                .booking()
                .insert_booking(user.id, turf.id, date, start, 1000.0)
                .await?;
            test.booking()
                .insert_payment(booking.id, "sam", 1000.0, "ORGANISER")
                .await?;
            test.booking()
                .insert_rating(user.id, turf.id, booking.id, 4)
                .await?;
            test.booking()
                .insert_booking(user.id, other.id, date, start, 1000.0)
                .await?;

            TurfService::new(&test.db)
                .delete(turf.id, Some(owner.id))
                .await
                .unwrap();

            assert!(entity::prelude::Turf::find_by_id(turf.id)
                .one(&test.db)
                .await?
                .is_none());
            assert_eq!(entity::prelude::Booking::find().count(&test.db).await?, 1);
            assert_eq!(entity::prelude::GamePayment::find().count(&test.db).await?, 0);
            assert_eq!(entity::prelude::Rating::find().count(&test.db).await?, 0);

            Ok(())
        }

        /// Expect NotOwner when another user tries to delete the turf
        #[tokio::test]
        async fn fails_for_other_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_booking_tables().build().await?;
            let owner = test.user().insert_owner("owner@example.com").await?;
            let intruder = test.user().insert_owner("other@example.com").await?;
            let turf = test.turf().insert_turf(owner.id, 1000.0).await?;

            let result = TurfService::new(&test.db)
                .delete(turf.id, Some(intruder.id))
                .await;

            assert!(matches!(
                result,
                Err(Error::TurfError(TurfError::NotOwner { .. }))
            ));
            assert!(entity::prelude::Turf::find_by_id(turf.id)
                .one(&test.db)
                .await?
                .is_some());

            Ok(())
        }
    }
}
