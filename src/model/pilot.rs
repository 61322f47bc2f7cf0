use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PilotDto {
    pub id: i32,
    pub pilot_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub rank: String,
    pub status: String,
    pub is_admin: bool,
    pub total_hours: f64,
    pub transfer_hours: f64,
    pub total_flights: i32,
    pub total_credits: i64,
    pub balance: i64,
    pub current_location: String,
    pub home_base: String,
    pub simbrief_id: Option<String>,
    pub vatsim_cid: Option<String>,
    pub ivao_vid: Option<String>,
    pub last_flight_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Public roster entry.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RosterEntryDto {
    pub pilot_id: String,
    pub name: String,
    pub rank: String,
    pub total_hours: f64,
    pub total_flights: i32,
    pub current_location: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PilotSettingsDto {
    pub simbrief_id: Option<String>,
    pub vatsim_cid: Option<String>,
    pub ivao_vid: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct JumpseatDto {
    pub destination: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct JumpseatResultDto {
    pub location: String,
    pub cost: i64,
    pub balance: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardEntryDto {
    pub position: u32,
    pub pilot_id: String,
    pub name: String,
    pub rank: String,
    pub hours: f64,
    pub flights: i64,
    pub credits: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LeaderboardDto {
    /// `all-time`, `monthly` or `credits`.
    pub kind: String,
    pub entries: Vec<LeaderboardEntryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NotificationDto {
    pub id: i32,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MarkNotificationsReadDto {
    /// Ids to mark; all of the pilot's notifications when empty.
    #[serde(default)]
    pub ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BlacklistEntryDto {
    pub id: i32,
    pub pilot_id: String,
    pub name: String,
    pub email: String,
    pub reason: Option<String>,
    pub blacklisted_by: Option<String>,
    pub blacklisted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BlacklistRequestDto {
    /// Pilot id (callsign) or email address.
    pub identifier: String,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RankDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub requirement_hours: f64,
    pub requirement_flights: i32,
    pub auto_promote: bool,
    pub allowed_aircraft: Vec<String>,
    pub image_url: Option<String>,
    pub order: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertRankDto {
    pub name: String,
    pub description: Option<String>,
    pub requirement_hours: f64,
    pub requirement_flights: i32,
    #[serde(default = "default_true")]
    pub auto_promote: bool,
    #[serde(default)]
    pub allowed_aircraft: Vec<String>,
    pub image_url: Option<String>,
    pub order: i32,
}

fn default_true() -> bool {
    true
}
