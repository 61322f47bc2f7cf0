use chrono::{DateTime, Utc};

use crate::model::{acars::AcarsTrafficDto, traffic::TrafficFlightDto};

/// Live telemetry of a flight in progress, refreshed by ACARS position reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFlight {
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
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
    pub status: String,
    pub takeoff_notified: bool,
    pub started_at: DateTime<Utc>,
    /// Heartbeat; stale flights are swept by cleanup.
    pub last_update: DateTime<Utc>,
}

impl ActiveFlight {
    pub fn from_entity(entity: entity::active_flight::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            pilot_name: entity.pilot_name,
            callsign: entity.callsign,
            departure_icao: entity.departure_icao,
            arrival_icao: entity.arrival_icao,
            aircraft_type: entity.aircraft_type,
            aircraft_registration: entity.aircraft_registration,
            latitude: entity.latitude,
            longitude: entity.longitude,
            altitude: entity.altitude,
            heading: entity.heading,
            ground_speed: entity.ground_speed,
            ias: entity.ias,
            vertical_speed: entity.vertical_speed,
            phase: entity.phase,
            fuel: entity.fuel,
            g_force: entity.g_force,
            comfort_score: entity.comfort_score,
            status: entity.status,
            takeoff_notified: entity.takeoff_notified,
            started_at: entity.started_at,
            last_update: entity.last_update,
        }
    }

    pub fn into_acars_dto(self) -> AcarsTrafficDto {
        AcarsTrafficDto {
            callsign: self.callsign,
            pilot_name: self.pilot_name,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            aircraft_type: self.aircraft_type,
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            heading: self.heading,
            ground_speed: self.ground_speed,
            ias: self.ias,
            vertical_speed: self.vertical_speed,
            phase: self.phase,
            fuel: self.fuel,
            g_force: self.g_force,
            comfort_score: self.comfort_score,
            started_at: self.started_at,
            last_update: self.last_update,
        }
    }

    pub fn into_traffic_dto(self) -> TrafficFlightDto {
        TrafficFlightDto {
            callsign: self.callsign,
            pilot_name: self.pilot_name,
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            heading: self.heading,
            ground_speed: self.ground_speed,
            departure: self.departure_icao,
            arrival: self.arrival_icao,
            aircraft: self.aircraft_type,
            phase: Some(self.phase),
            source: "va".to_string(),
        }
    }
}

/// Route details of a newly tracked flight.
#[derive(Debug, Clone)]
pub struct CreateActiveFlightParam {
    pub pilot_id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
}

/// One telemetry sample from a position report.
#[derive(Debug, Clone, Default)]
pub struct TelemetryParam {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub ground_speed: f64,
    pub ias: f64,
    pub vertical_speed: f64,
    pub phase: String,
    pub status: String,
    pub fuel: f64,
    pub g_force: f64,
    pub comfort_score: f64,
}
