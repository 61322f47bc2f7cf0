//! Payloads exchanged with the desktop ACARS client.
//!
//! Keys are camelCase. Where older client builds still send snake_case keys the field carries
//! a serde alias.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::auth::AcarsPilotDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsAuthDto {
    /// Pilot id or email.
    #[serde(default)]
    pub pilot_id: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsAuthResponseDto {
    pub success: bool,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub pilot: AcarsPilotDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PingDto {
    #[serde(default)]
    pub pilot_id: String,
    pub callsign: Option<String>,
    pub timestamp: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PingResponseDto {
    pub success: bool,
    pub data_link: String,
    pub server_time: i64,
    pub client_time: Option<i64>,
}

/// Identifies the pilot (and optionally the flight) behind an ACARS call.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FlightRefDto {
    pub pilot_id: String,
    pub callsign: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StartFlightDto {
    pub pilot_id: String,
    pub callsign: String,
    #[serde(default)]
    pub departure_icao: String,
    #[serde(default)]
    pub arrival_icao: String,
    #[serde(default)]
    pub aircraft_type: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PositionDto {
    pub pilot_id: String,
    pub callsign: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub ground_speed: f64,
    #[serde(default)]
    pub ias: f64,
    #[serde(default, alias = "vs")]
    pub vertical_speed: f64,
    pub status: Option<String>,
    pub phase: Option<String>,
    #[serde(default)]
    pub fuel: f64,
    #[serde(alias = "g_force")]
    pub g_force: Option<f64>,
    #[serde(alias = "comfort_score")]
    pub comfort_score: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsBidDto {
    pub pilot_id: String,
    pub callsign: String,
    #[serde(alias = "flight_number")]
    pub flight_number: Option<String>,
    #[serde(alias = "departure_icao")]
    pub departure_icao: String,
    #[serde(alias = "arrival_icao")]
    pub arrival_icao: String,
    #[serde(alias = "aircraft_type")]
    pub aircraft_type: String,
    #[serde(alias = "aircraft_registration")]
    pub aircraft_registration: Option<String>,
    pub route: Option<String>,
    #[serde(alias = "estimated_flight_time")]
    pub estimated_flight_time: Option<i32>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    #[serde(alias = "planned_fuel")]
    pub planned_fuel: Option<f64>,
    #[serde(alias = "rotation_speed")]
    pub rotation_speed: Option<i32>,
    #[serde(alias = "simbrief_ofp_id")]
    pub simbrief_ofp_id: Option<String>,
    #[serde(alias = "activity_id")]
    pub activity_id: Option<i32>,
}

/// Bid as presented to the ACARS client.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsBidViewDto {
    pub id: i32,
    pub callsign: String,
    pub flight_number: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub route: Option<String>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub planned_fuel: Option<f64>,
    pub rotation_speed: Option<i32>,
    pub simbrief_ofp_id: Option<String>,
    pub activity_id: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsBidResponseDto {
    pub success: bool,
    pub bid: Option<AcarsBidViewDto>,
    pub ofp: Option<OfpSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CancelledDto {
    pub success: bool,
    pub cancelled: u64,
}

/// Condensed SimBrief operational flight plan.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct OfpSummaryDto {
    pub callsign: String,
    pub flight_number: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub alternate_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: String,
    pub route: String,
    pub pax: i64,
    pub cargo: i64,
    pub cruise_altitude: i64,
    pub distance: i64,
    pub fuel: i64,
    pub flight_time: String,
    pub origin_metar: String,
    pub dest_metar: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SimbriefPlanDto {
    pub simbrief_id: String,
    pub flight_plan: OfpSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AircraftHealthDto {
    pub registration: String,
    pub health: f64,
    pub status: String,
    pub grounded: bool,
    pub grounded_reason: Option<String>,
    pub estimated_repair_cost: i64,
    pub repair_until: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsTrafficDto {
    pub callsign: String,
    pub pilot_name: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
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
    pub started_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AcarsTrafficListDto {
    pub success: bool,
    pub count: usize,
    pub traffic: Vec<AcarsTrafficDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecentFlightDto {
    pub flight_number: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub flight_time: i32,
    pub landing_rate: f64,
    pub landing_grade: String,
    pub score: i32,
    pub distance: f64,
    pub submitted_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ActiveBidSummaryDto {
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub route: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PilotStatsDto {
    pub pilot: AcarsPilotDto,
    pub recent_flights: Vec<RecentFlightDto>,
    pub total_flights: u64,
    pub active_bid: Option<ActiveBidSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReleaseAssetDto {
    pub name: String,
    pub url: String,
    pub size: String,
    pub download_count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDto {
    pub version: String,
    pub name: String,
    pub notes: String,
    pub published_at: Option<String>,
    pub html_url: String,
    pub installer: Option<ReleaseAssetDto>,
    pub zip: Option<ReleaseAssetDto>,
    pub total_downloads: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GithubReleaseDto {
    pub release: Option<ReleaseDto>,
}
