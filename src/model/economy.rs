use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Tunable economy constants. Admin updates send a partial object with the same keys.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GlobalConfigDto {
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
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StoreItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    /// -1 means unlimited.
    pub stock_quantity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertStoreItemDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub category: String,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "unlimited")]
    pub stock_quantity: i32,
}

fn default_true() -> bool {
    true
}

fn unlimited() -> i32 {
    -1
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PurchaseRequestDto {
    pub item_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PurchaseResultDto {
    pub item: StoreItemDto,
    pub balance: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FinanceLogDto {
    pub id: i32,
    pub pilot_id: Option<i32>,
    pub kind: String,
    pub amount: i64,
    pub description: String,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FinanceOverviewDto {
    pub balance: i64,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub last_updated: DateTime<Utc>,
    pub recent: Vec<FinanceLogDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PayrollResultDto {
    pub pilots_paid: u64,
    pub total_paid: i64,
    pub airline_balance: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DailyOpsResultDto {
    pub fuel_lbs: i64,
    pub fuel_cost: i64,
    pub catering_cost: i64,
    pub deducted: i64,
    pub airline_balance: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CleanupResultDto {
    pub expired_bids: u64,
    pub stale_flights: u64,
    pub expired_auth_codes: u64,
    pub expired_tokens: u64,
    pub expired_password_resets: u64,
    pub old_notifications: u64,
}
