//! Active flight factory for creating live telemetry rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating active flights owned by an existing pilot.
pub struct ActiveFlightFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: i32,
    pilot_name: String,
    callsign: String,
    departure_icao: String,
    arrival_icao: String,
    aircraft_type: String,
    aircraft_registration: Option<String>,
    latitude: f64,
    longitude: f64,
    phase: String,
    last_update: DateTime<Utc>,
}

impl<'a> ActiveFlightFactory<'a> {
    /// Creates a new factory for the pilot, with a heartbeat of now.
    pub fn new(db: &'a DatabaseConnection, pilot: &entity::pilot::Model) -> Self {
        Self {
            db,
            pilot_id: pilot.id,
            pilot_name: format!("{} {}", pilot.first_name, pilot.last_name),
            callsign: pilot.pilot_id.clone(),
            departure_icao: "OJAI".to_string(),
            arrival_icao: "OERK".to_string(),
            aircraft_type: "A320".to_string(),
            aircraft_registration: None,
            latitude: 31.72,
            longitude: 35.99,
            phase: "Preflight".to_string(),
            last_update: Utc::now(),
        }
    }

    pub fn callsign(mut self, callsign: impl Into<String>) -> Self {
        self.callsign = callsign.into();
        self
    }

    pub fn route_pair(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure_icao = departure.into();
        self.arrival_icao = arrival.into();
        self
    }

    pub fn aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.aircraft_registration = Some(registration.into());
        self
    }

    pub fn position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    /// Sets the heartbeat timestamp, used to simulate stale flights.
    pub fn last_update(mut self, at: DateTime<Utc>) -> Self {
        self.last_update = at;
        self
    }

    pub async fn build(self) -> Result<entity::active_flight::Model, DbErr> {
        entity::active_flight::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            pilot_name: ActiveValue::Set(self.pilot_name),
            callsign: ActiveValue::Set(self.callsign),
            departure_icao: ActiveValue::Set(self.departure_icao),
            arrival_icao: ActiveValue::Set(self.arrival_icao),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            aircraft_registration: ActiveValue::Set(self.aircraft_registration),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            altitude: ActiveValue::Set(0.0),
            heading: ActiveValue::Set(0.0),
            ground_speed: ActiveValue::Set(0.0),
            ias: ActiveValue::Set(0.0),
            vertical_speed: ActiveValue::Set(0.0),
            phase: ActiveValue::Set(self.phase),
            fuel: ActiveValue::Set(0.0),
            g_force: ActiveValue::Set(1.0),
            comfort_score: ActiveValue::Set(100.0),
            status: ActiveValue::Set("Active".to_string()),
            takeoff_notified: ActiveValue::Set(false),
            started_at: ActiveValue::Set(self.last_update),
            last_update: ActiveValue::Set(self.last_update),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active flight for the pilot using the pilot id as callsign.
pub async fn create_active_flight(
    db: &DatabaseConnection,
    pilot: &entity::pilot::Model,
) -> Result<entity::active_flight::Model, DbErr> {
    ActiveFlightFactory::new(db, pilot).build().await
}
