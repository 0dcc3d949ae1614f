use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::status::TurfStatus;

/// Descriptive fields of a turf, as submitted by its owner
#[derive(Clone, Debug, PartialEq)]
pub struct TurfFields {
    pub name: String,
    pub sport_type: String,
    pub city: String,
    pub location: String,
    pub amenities: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
}

pub struct TurfRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TurfRepository<'a, C> {
    /// Creates a new instance of [`TurfRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        fields: TurfFields,
        status: TurfStatus,
    ) -> Result<entity::turf::Model, DbErr> {
        let turf = entity::turf::ActiveModel {
            name: ActiveValue::Set(fields.name),
            sport_type: ActiveValue::Set(fields.sport_type),
            city: ActiveValue::Set(fields.city),
            location: ActiveValue::Set(fields.location),
            amenities: ActiveValue::Set(fields.amenities),
            price: ActiveValue::Set(fields.price),
            image_url: ActiveValue::Set(fields.image_url),
            status: ActiveValue::Set(status.as_str().to_string()),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        };

        turf.insert(self.db).await
    }

    pub async fn get(&self, turf_id: i32) -> Result<Option<entity::turf::Model>, DbErr> {
        entity::prelude::Turf::find_by_id(turf_id).one(self.db).await
    }

    /// Lists turfs, optionally only those whose city contains `city` ignoring case
    pub async fn list(&self, city: Option<&str>) -> Result<Vec<entity::turf::Model>, DbErr> {
        let mut query = entity::prelude::Turf::find();

        if let Some(city) = city {
            let pattern = format!("%{}%", city.to_lowercase());
            query = query
                .filter(Expr::expr(Func::lower(Expr::col(entity::turf::Column::City))).like(pattern));
        }

        query
            .order_by_asc(entity::turf::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<entity::turf::Model>, DbErr> {
        entity::prelude::Turf::find()
            .filter(entity::turf::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::turf::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the descriptive fields of an existing turf
    pub async fn update(
        &self,
        turf: entity::turf::Model,
        fields: TurfFields,
    ) -> Result<entity::turf::Model, DbErr> {
        let mut turf_am: entity::turf::ActiveModel = turf.into();
        turf_am.name = ActiveValue::Set(fields.name);
        turf_am.sport_type = ActiveValue::Set(fields.sport_type);
        turf_am.city = ActiveValue::Set(fields.city);
        turf_am.location = ActiveValue::Set(fields.location);
        turf_am.amenities = ActiveValue::Set(fields.amenities);
        turf_am.price = ActiveValue::Set(fields.price);
        turf_am.image_url = ActiveValue::Set(fields.image_url);

        turf_am.update(self.db).await
    }

    pub async fn set_status(
        &self,
        turf_id: i32,
        status: TurfStatus,
    ) -> Result<Option<entity::turf::Model>, DbErr> {
        let Some(turf) = self.get(turf_id).await? else {
            return Ok(None);
        };

        let mut turf_am: entity::turf::ActiveModel = turf.into();
        turf_am.status = ActiveValue::Set(status.as_str().to_string());

        Ok(Some(turf_am.update(self.db).await?))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Turf::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: TurfStatus) -> Result<u64, DbErr> {
        entity::prelude::Turf::find()
            .filter(entity::turf::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    pub async fn count_by_owner(&self, owner_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Turf::find()
            .filter(entity::turf::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await
    }

    /// Deletes a turf
    ///
    /// Bookings and ratings referencing the turf must be deleted first.
    pub async fn delete(&self, turf_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Turf::delete_by_id(turf_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::server::data::turf::TurfFields;

    fn fields(city: &str) -> TurfFields {
        TurfFields {
            name: "Green Field".to_string(),
            sport_type: "Football".to_string(),
            city: city.to_string(),
            location: "MG Road".to_string(),
            amenities: Some("Parking,Showers".to_string()),
            price: 1200.0,
            image_url: None,
        }
    }

    mod create {
        use turfbook_test_utils::prelude::*;

        use super::*;
        use crate::server::{data::turf::TurfRepository, model::status::TurfStatus};

        /// Expect success when the owner exists
        #[tokio::test]
        async fn creates_turf() -> Result<(), TestError> {
            let test = TestBuilder::new().with_turf_tables().build().await?;
            let owner = test.user().insert_owner("owner@example.com").await?;

            let turf_repo = TurfRepository::new(&test.db);
            let turf = turf_repo
                .create(owner.id, fields("Pune"), TurfStatus::Approved)
                .await?;

            assert_eq!(turf.owner_id, owner.id);
            assert_eq!(turf.status, "approved");

            Ok(())
        }

        /// Expect Error when the owner does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_owner() -> Result<(), TestError> {
            let test = TestBuilder::new().with_turf_tables().build().await?;

            let turf_repo = TurfRepository::new(&test.db);
            let result = turf_repo
                .create(1, fields("Pune"), TurfStatus::Approved)
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod list {
        use turfbook_test_utils::prelude::*;

        use crate::server::data::turf::TurfRepository;

        /// Expect the city filter to match substrings ignoring case
        #[tokio::test]
        async fn filters_by_city_fragment() -> Result<(), TestError> {
            let test = TestBuilder::new().with_turf_tables().build().await?;
            let owner = test.user().insert_owner("owner@example.com").await?;
            test.turf()
                .insert_turf_with(owner.id, "Arena", "Navi Mumbai", 900.0, "approved")
                .await?;
            test.turf()
                .insert_turf_with(owner.id, "Ground", "Pune", 700.0, "approved")
                .await?;

            let turf_repo = TurfRepository::new(&test.db);

            assert_eq!(turf_repo.list(Some("mumbai")).await?.len(), 1);
            assert_eq!(turf_repo.list(None).await?.len(), 2);
            assert!(turf_repo.list(Some("delhi")).await?.is_empty());

            Ok(())
        }
    }
}
