use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AircraftDto {
    pub id: i32,
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
    pub last_service: Option<DateTime<Utc>>,
    pub grounded_reason: Option<String>,
    pub repair_until: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateAircraftDto {
    pub registration: String,
    pub aircraft_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub airline_code: String,
    pub current_location: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateAircraftDto {
    pub aircraft_type: Option<String>,
    pub name: Option<String>,
    pub airline_code: Option<String>,
    pub current_location: Option<String>,
    pub status: Option<String>,
    pub condition: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MaintenanceAircraftDto {
    pub aircraft: AircraftDto,
    pub repair_cost: i64,
    pub is_grounded: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MaintenanceLogDto {
    pub id: i32,
    pub aircraft_registration: String,
    pub kind: String,
    pub health_before: f64,
    pub health_after: f64,
    pub cost: i64,
    pub description: String,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MaintenanceOverviewDto {
    pub fleet: Vec<MaintenanceAircraftDto>,
    pub recent_logs: Vec<MaintenanceLogDto>,
    pub airline_balance: i64,
    pub grounded_threshold: f64,
    pub repair_rate_per_percent: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RepairRequestDto {
    pub registration: String,
    /// `FULL` or `MINIMUM`.
    pub repair_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RepairResultDto {
    pub registration: String,
    pub health_before: f64,
    pub health_after: f64,
    pub cost: i64,
    pub airline_balance: i64,
}
