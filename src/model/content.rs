use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NotamDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub kind: String,
    pub airport_icao: Option<String>,
    pub priority: i32,
    pub effective_from: DateTime<Utc>,
    pub effective_until: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertNotamDto {
    pub title: String,
    pub content: String,
    /// `General`, `Airport`, `Route` or `Aircraft`.
    #[serde(default = "general")]
    pub kind: String,
    pub airport_icao: Option<String>,
    #[serde(default)]
    pub priority: i32,
    pub effective_from: Option<DateTime<Utc>>,
    pub effective_until: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub banner: Option<String>,
    pub kind: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub airports: Vec<String>,
    pub slots_available: Option<i32>,
    pub reward_points: i64,
    pub is_active: bool,
    pub booking_count: u64,
    /// Caller's booking status, when booked.
    pub my_booking: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertEventDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub banner: Option<String>,
    #[serde(default = "fly_in")]
    pub kind: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub airports: Vec<String>,
    pub slots_available: Option<i32>,
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TourLegDto {
    pub leg_number: i32,
    pub departure_icao: String,
    pub arrival_icao: String,
    #[serde(default)]
    pub distance_nm: f64,
    #[serde(default)]
    pub aircraft_types: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TourProgressDto {
    pub current_leg: i32,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TourDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub banner: Option<String>,
    pub reward_credits: i64,
    pub difficulty: String,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub legs: Vec<TourLegDto>,
    pub progress: Option<TourProgressDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertTourDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub banner: Option<String>,
    #[serde(default)]
    pub reward_credits: i64,
    #[serde(default = "medium")]
    pub difficulty: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Legs in flying order; leg numbers are reassigned from 1.
    #[serde(default)]
    pub legs: Vec<TourLegDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActivityLegDto {
    pub id: Option<i32>,
    pub leg_order: i32,
    pub departure_icao: Option<String>,
    pub arrival_icao: Option<String>,
    pub flight_number: Option<String>,
    #[serde(default)]
    pub aircraft_types: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActivityProgressDto {
    pub completed_leg_ids: Vec<i32>,
    pub legs_complete: i32,
    pub percent_complete: f64,
    pub start_date: DateTime<Utc>,
    pub date_complete: Option<DateTime<Utc>>,
    pub last_leg_flown_date: Option<DateTime<Utc>>,
    pub days_to_complete: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ActivityDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub legs_in_order: bool,
    pub min_rank: Option<String>,
    pub reward_points: i64,
    pub total_pilots_complete: i32,
    pub first_pilot_to_complete: Option<String>,
    pub is_active: bool,
    pub legs: Vec<ActivityLegDto>,
    pub progress: Option<ActivityProgressDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertActivityDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `Event` or `Tour`.
    #[serde(default = "tour")]
    pub kind: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub legs_in_order: bool,
    pub min_rank: Option<String>,
    #[serde(default)]
    pub reward_points: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub legs: Vec<ActivityLegDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DotmDto {
    pub id: i32,
    pub month: String,
    pub year: i32,
    pub airport_icao: String,
    pub bonus_points: i64,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CurrentDotmDto {
    pub dotm: Option<DotmDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertDotmDto {
    /// English month name, e.g. `March`.
    pub month: String,
    pub year: i32,
    pub airport_icao: String,
    #[serde(default)]
    pub bonus_points: i64,
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StaffRoleDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
    pub order: i32,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpsertStaffRoleDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AssignStaffDto {
    pub pilot_id: String,
    pub role_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StaffMemberDto {
    pub id: i32,
    pub pilot_id: String,
    pub name: String,
    pub rank: String,
    pub assigned_at: DateTime<Utc>,
}

/// One role with its members, as shown on the public staff page.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct StaffGroupDto {
    pub role: StaffRoleDto,
    pub members: Vec<StaffMemberDto>,
}

fn default_true() -> bool {
    true
}

fn general() -> String {
    "General".to_string()
}

fn fly_in() -> String {
    "Fly-In".to_string()
}

fn medium() -> String {
    "Medium".to_string()
}

fn tour() -> String {
    "Tour".to_string()
}
