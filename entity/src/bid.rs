use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub flight_number: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub route: Option<String>,
    pub estimated_flight_time: Option<i32>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub planned_fuel: Option<f64>,
    pub rotation_speed: Option<i32>,
    pub simbrief_ofp_id: Option<String>,
    pub activity_id: Option<i32>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pilot::Entity",
        from = "Column::PilotId",
        to = "super::pilot::Column::Id",
        on_delete = "Cascade"
    )]
    Pilot,
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
