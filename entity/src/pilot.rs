use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pilot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub pilot_id: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub rank: String,
    pub status: String,
    pub is_admin: bool,
    pub total_hours: f64,
    pub transfer_hours: f64,
    pub total_flights: i32,
    pub total_credits: i64,
    pub balance: i64,
    pub current_location: String,
    pub home_base: String,
    pub simbrief_id: Option<String>,
    pub vatsim_cid: Option<String>,
    pub ivao_vid: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub routes_flown: String,
    pub last_flight_date: Option<DateTimeUtc>,
    pub last_activity: Option<DateTimeUtc>,
    pub hwid: Option<String>,
    pub blacklist_reason: Option<String>,
    pub blacklisted_by: Option<String>,
    pub blacklisted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
