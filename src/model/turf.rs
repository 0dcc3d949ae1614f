use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::Numeric;

/// A turf as listed to players
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TurfDto {
    pub id: i32,
    pub name: String,
    pub sport_type: String,
    pub city: String,
    pub location: String,
    pub amenities: Vec<String>,
    pub price: f64,
    pub image_url: Option<String>,
    /// Mean star rating rounded to one decimal, absent when the turf is unrated
    pub avg_rating: Option<f64>,
}

/// A turf as shown on its owner's dashboard, amenities left comma-joined for editing
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OwnerTurfDto {
    pub id: i32,
    pub name: String,
    pub sport_type: String,
    pub city: String,
    pub location: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub amenities: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewTurfDto {
    pub owner_id: Option<i32>,
    pub name: Option<String>,
    /// Defaults to `Cricket`
    pub sport_type: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub amenities: Option<String>,
    pub price: Option<Numeric>,
    pub image_url: Option<String>,
}

/// Partial update of a turf, fields left out keep their current value
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTurfDto {
    pub owner_id: Option<i32>,
    pub name: Option<String>,
    pub sport_type: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub amenities: Option<String>,
    pub price: Option<Numeric>,
    pub image_url: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TurfOwnerDto {
    pub owner_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TurfCreatedDto {
    pub message: String,
    pub id: i32,
}

/// One hourly slot of a turf on a given date
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotDto {
    /// Starting hour of the slot
    pub id: u32,
    /// Display range, e.g. `14:00 - 15:00`
    pub time: String,
    pub available: bool,
    /// Start time as `HH:MM`, sent back when booking
    pub start_raw: String,
}

#[derive(Clone, Default, Deserialize, IntoParams)]
pub struct SlotQuery {
    /// Date formatted `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Clone, Default, Deserialize, IntoParams)]
pub struct CityQuery {
    /// Case-insensitive fragment of the city name
    pub city: Option<String>,
}

#[derive(Clone, Default, Deserialize, IntoParams)]
pub struct OwnerQuery {
    pub user_id: Option<i32>,
}

/// A booking made on one of the owner's turfs
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OwnerBookingDto {
    pub id: i32,
    pub turf_name: String,
    pub date: String,
    pub time: String,
    pub status: String,
    #[serde(rename = "type")]
    pub mode: String,
    pub amount: f64,
}
