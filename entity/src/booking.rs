use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The organiser who booked the slot
    pub user_id: i32,
    pub turf_id: i32,
    /// Shareable game code, `<username>-<hour><AM|PM>`. Not unique.
    pub game_id: String,
    pub total_amount: f64,
    pub advance_amount: f64,
    /// Number of players splitting the total
    pub num_players: i32,
    /// One of `pending`, `confirmed` or `cancelled`
    pub status: String,
    /// One of `online`, `offline` or `split`
    pub mode: String,
    pub booking_date: Date,
    pub start_time: Time,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::turf::Entity",
        from = "Column::TurfId",
        to = "super::turf::Column::Id"
    )]
    Turf,
    #[sea_orm(has_many = "super::game_payment::Entity")]
    GamePayment,
    #[sea_orm(has_one = "super::rating::Entity")]
    Rating,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::turf::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turf.def()
    }
}

impl Related<super::game_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePayment.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
