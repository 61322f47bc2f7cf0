use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub flight_number: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub alternate_icao: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub route: Option<String>,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub flight_time: i32,
    pub fuel_used: f64,
    pub distance: f64,
    pub landing_rate: f64,
    pub landing_grade: String,
    pub max_g_force: f64,
    pub pax: i32,
    pub cargo: i32,
    pub score: i32,
    #[sea_orm(column_type = "Text")]
    pub deductions: String,
    pub comfort_score: f64,
    pub revenue_passenger: i64,
    pub revenue_cargo: i64,
    pub expense_fuel: i64,
    pub expense_airport: i64,
    pub expense_pilot: i64,
    pub expense_maintenance: i64,
    pub real_profit: i64,
    pub passenger_rating: i32,
    pub passenger_review: Option<String>,
    pub credits_earned: i64,
    #[sea_orm(column_type = "Text")]
    pub credits_breakdown: String,
    pub approved_status: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub admin_comments: Option<String>,
    pub acars_version: Option<String>,
    pub is_manual: bool,
    pub event_id: Option<i32>,
    pub submitted_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,
    pub reviewed_by: Option<String>,
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
