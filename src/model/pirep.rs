use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A scoring deduction recorded by the ACARS client during the flight.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeductionDto {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub points: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LandingAnalysisDto {
    #[serde(default)]
    pub butter_score: f64,
    pub g_force_touchdown: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FlightLogDto {
    #[serde(default)]
    pub deductions: Vec<DeductionDto>,
    pub landing_analysis: Option<LandingAnalysisDto>,
    pub max_g_force: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AirframeDamageDto {
    #[serde(default)]
    pub total_damage: f64,
}

/// PIREP filed by the ACARS client at the end of a flight.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PirepSubmissionDto {
    pub pilot_id: String,
    pub flight_number: Option<String>,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub alternate_icao: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    #[serde(default)]
    pub flight_time_minutes: i32,
    #[serde(default)]
    pub landing_rate: f64,
    #[serde(default)]
    pub fuel_used: f64,
    #[serde(default)]
    pub distance_nm: f64,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub score: Option<i32>,
    pub comfort_score: Option<f64>,
    pub log: Option<FlightLogDto>,
    pub airframe_damage: Option<AirframeDamageDto>,
    pub comments: Option<String>,
    #[serde(alias = "acars_version")]
    pub acars_version: Option<String>,
    /// Client clock in milliseconds since the epoch.
    pub timestamp: Option<i64>,
    pub signature: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdownDto {
    pub gross_revenue: i64,
    pub fuel_tax: i64,
    pub penalty_fines: i64,
    pub total_deductions: i64,
    pub net_pilot_pay: i64,
    pub dotm_bonus: i64,
    pub butter_bonus: i64,
    pub total_earned: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PirepResultDto {
    pub success: bool,
    pub message: String,
    pub credits_earned: i64,
    pub bonus_credits: i64,
    pub credits_breakdown: Vec<String>,
    pub new_rank: Option<String>,
    pub aircraft_health: f64,
    pub revenue_breakdown: Option<RevenueBreakdownDto>,
}

/// Full flight record as shown to administrators.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PirepDto {
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub flight_number: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub alternate_icao: Option<String>,
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
    pub deductions: Vec<DeductionDto>,
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
    pub credits_breakdown: Vec<String>,
    /// `pending`, `approved` or `rejected`.
    pub status: String,
    pub comments: Option<String>,
    pub admin_comments: Option<String>,
    pub acars_version: Option<String>,
    pub is_manual: bool,
    pub event_id: Option<i32>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdatePirepDto {
    pub flight_number: Option<String>,
    pub callsign: Option<String>,
    pub departure_icao: Option<String>,
    pub arrival_icao: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: Option<String>,
    pub flight_time: Option<i32>,
    pub landing_rate: Option<f64>,
    pub fuel_used: Option<f64>,
    pub distance: Option<f64>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub score: Option<i32>,
    pub admin_comments: Option<String>,
    /// `pending`, `approved` or `rejected`.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ManualPirepDto {
    pub flight_number: String,
    pub callsign: Option<String>,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub route: Option<String>,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub flight_time: i32,
    #[serde(default)]
    pub landing_rate: f64,
    #[serde(default)]
    pub fuel_used: f64,
    #[serde(default)]
    pub distance: f64,
    pub comments: Option<String>,
}
