use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Login name, an email address for self-registered players
    #[sea_orm(unique)]
    pub username: String,
    /// Stored credential, either a tagged hash or a legacy plain-text secret
    pub password_hash: String,
    /// One of `user`, `owner` or `admin`
    pub role: String,
    pub name: Option<String>,
    /// Public 6-digit identifier shown to other players
    #[sea_orm(unique)]
    pub uid: String,
    pub is_banned: bool,
    /// UPI id owners collect split payments on
    pub upi_id: Option<String>,
    /// Last heartbeat or login, presence is derived from this
    pub last_seen: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::turf::Entity")]
    Turf,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::turf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turf.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
