use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "active_flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub ground_speed: f64,
    pub ias: f64,
    pub vertical_speed: f64,
    pub phase: String,
    pub fuel: f64,
    pub g_force: f64,
    pub comfort_score: f64,
    pub status: String,
    pub takeoff_notified: bool,
    pub started_at: DateTimeUtc,
    pub last_update: DateTimeUtc,
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
