use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aircraft_registration: String,
    pub kind: String,
    pub health_before: f64,
    pub health_after: f64,
    pub cost: i64,
    pub description: String,
    pub flight_id: Option<i32>,
    pub pilot_id: Option<String>,
    pub performed_by: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
