use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub users: u64,
    pub owners: u64,
    pub turfs: u64,
    pub bookings: u64,
    pub pending_turfs: u64,
    /// Sum of the totals of every booking
    pub revenue: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub role: String,
    pub is_banned: bool,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BanToggledDto {
    pub message: String,
    pub is_banned: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminTurfDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub owner_id: i32,
    pub status: String,
    pub price: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct OwnerDto {
    pub id: i32,
    pub username: String,
    pub name: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct NewOwnerDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AnnounceDto {
    /// Text of the announcement
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AnnouncementDto {
    pub id: i32,
    pub content: String,
    /// `YYYY-MM-DD HH:MM`
    pub created_at: String,
}
