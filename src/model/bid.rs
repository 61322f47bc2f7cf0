use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BidDto {
    pub id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub flight_number: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub route: Option<String>,
    pub estimated_flight_time: Option<i32>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub planned_fuel: Option<f64>,
    pub simbrief_ofp_id: Option<String>,
    pub activity_id: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateBidDto {
    pub callsign: String,
    pub flight_number: Option<String>,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub route: Option<String>,
    pub estimated_flight_time: Option<i32>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub planned_fuel: Option<f64>,
    pub rotation_speed: Option<i32>,
    pub simbrief_ofp_id: Option<String>,
    pub activity_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CurrentBidDto {
    pub bid: Option<BidDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CancelBidDto {
    /// Specific bid to cancel; all of the pilot's active bids when absent.
    pub bid_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CancelBidResultDto {
    pub cancelled: u64,
}
