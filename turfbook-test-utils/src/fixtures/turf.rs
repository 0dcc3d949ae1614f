use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn turf(&self) -> TurfFixtures<'_> {
        TurfFixtures { setup: self }
    }
}

pub struct TurfFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TurfFixtures<'a> {
    /// Insert an approved cricket turf in Pune owned by `owner_id`.
    pub async fn insert_turf(
        &self,
        owner_id: i32,
        price: f64,
    ) -> Result<entity::turf::Model, TestError> {
        self.insert_turf_with(owner_id, "Green Field", "Pune", price, "approved")
            .await
    }

    pub async fn insert_turf_with(
        &self,
        owner_id: i32,
        name: &str,
        city: &str,
        price: f64,
        status: &str,
    ) -> Result<entity::turf::Model, TestError> {
        Ok(entity::prelude::Turf::insert(entity::turf::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            sport_type: ActiveValue::Set("Cricket".to_string()),
            city: ActiveValue::Set(city.to_string()),
            location: ActiveValue::Set(format!("{} Main Road", city)),
            amenities: ActiveValue::Set(Some("Parking,Floodlights".to_string())),
            price: ActiveValue::Set(price),
            image_url: ActiveValue::Set(None),
            status: ActiveValue::Set(status.to_string()),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
