use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A flight on the live map, independent of which network reported it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TrafficFlightDto {
    pub callsign: String,
    pub pilot_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub ground_speed: f64,
    pub departure: String,
    pub arrival: String,
    pub aircraft: String,
    pub phase: Option<String>,
    /// `va`, `ivao` or `vatsim`.
    pub source: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct TrafficListDto {
    pub flights: Vec<TrafficFlightDto>,
    pub count: usize,
}
