use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub registration: String,
    pub aircraft_type: String,
    pub name: String,
    pub airline_code: String,
    pub current_location: String,
    pub status: String,
    pub condition: f64,
    pub total_hours: f64,
    pub flight_count: i32,
    pub is_active: bool,
    pub last_service: Option<DateTimeUtc>,
    pub grounded_reason: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub damage_log: String,
    pub repair_until: Option<DateTimeUtc>,
    pub damaged_at: Option<DateTimeUtc>,
    pub damaged_by_pilot: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
