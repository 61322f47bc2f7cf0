use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "global_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub key: String,
    pub fuel_tax_percent: f64,
    pub penalty_multiplier: f64,
    pub repair_rate_per_percent: f64,
    pub ticket_price_per_nm: f64,
    pub cargo_price_per_lb_nm: f64,
    pub fuel_price_per_lb: f64,
    pub base_landing_fee: f64,
    pub pilot_pay_rate: f64,
    pub hard_landing_threshold: f64,
    pub severe_damage_threshold: f64,
    pub grounded_health_threshold: f64,
    pub store_to_airline_percent: f64,
    pub salary_enabled: bool,
    pub salary_cadet: i64,
    pub salary_second_officer: i64,
    pub salary_first_officer: i64,
    pub salary_senior_first_officer: i64,
    pub salary_captain: i64,
    pub salary_senior_captain: i64,
    pub salary_check_airman: i64,
    pub credits_base_flight: i64,
    pub credits_greaser_bonus: i64,
    pub credits_firm_bonus: i64,
    pub credits_hard_landing_penalty: i64,
    pub credits_fuel_efficiency_bonus: i64,
    pub credits_first_flight_multiplier: f64,
    pub credits_hub_to_hub_bonus: i64,
    pub credits_event_multiplier: f64,
    pub credits_long_haul_4h: i64,
    pub credits_long_haul_8h: i64,
    pub credits_new_route_bonus: i64,
    pub credits_taxi_speed_penalty: i64,
    pub credits_light_violation_penalty: i64,
    pub credits_overspeed_penalty: i64,
    pub repair_hours_per_percent: f64,
    pub location_based_fleet: bool,
    pub updated_at: DateTimeUtc,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
