//! Bid factory for creating flight reservations.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating bids owned by an existing pilot.
pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: i32,
    pilot_name: String,
    callsign: String,
    flight_number: String,
    departure_icao: String,
    arrival_icao: String,
    aircraft_type: String,
    aircraft_registration: Option<String>,
    simbrief_ofp_id: Option<String>,
    activity_id: Option<i32>,
    status: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl<'a> BidFactory<'a> {
    /// Creates a new BidFactory for the given pilot.
    ///
    /// Defaults:
    /// - callsign and flight number: `"LVT{id}"`
    /// - route: OJAI to OERK in an A320 without a registration
    /// - status: `"Active"`, expiring 24 hours from now
    pub fn new(db: &'a DatabaseConnection, pilot: &entity::pilot::Model) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            pilot_id: pilot.id,
            pilot_name: format!("{} {}", pilot.first_name, pilot.last_name),
            callsign: format!("LVT{}", id),
            flight_number: format!("LVT{}", id),
            departure_icao: "OJAI".to_string(),
            arrival_icao: "OERK".to_string(),
            aircraft_type: "A320".to_string(),
            aircraft_registration: None,
            simbrief_ofp_id: None,
            activity_id: None,
            status: "Active".to_string(),
            created_at: now,
            expires_at: now + Duration::hours(24),
        }
    }

    pub fn callsign(mut self, callsign: impl Into<String>) -> Self {
        self.callsign = callsign.into();
        self
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
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

    pub fn ofp_id(mut self, ofp_id: impl Into<String>) -> Self {
        self.simbrief_ofp_id = Some(ofp_id.into());
        self
    }

    pub fn activity(mut self, activity_id: i32) -> Self {
        self.activity_id = Some(activity_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = at;
        self
    }

    pub async fn build(self) -> Result<entity::bid::Model, DbErr> {
        entity::bid::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            pilot_name: ActiveValue::Set(self.pilot_name),
            callsign: ActiveValue::Set(self.callsign),
            flight_number: ActiveValue::Set(self.flight_number),
            departure_icao: ActiveValue::Set(self.departure_icao),
            arrival_icao: ActiveValue::Set(self.arrival_icao),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            aircraft_registration: ActiveValue::Set(self.aircraft_registration),
            route: ActiveValue::Set(None),
            estimated_flight_time: ActiveValue::Set(None),
            pax: ActiveValue::Set(None),
            cargo: ActiveValue::Set(None),
            planned_fuel: ActiveValue::Set(None),
            rotation_speed: ActiveValue::Set(None),
            simbrief_ofp_id: ActiveValue::Set(self.simbrief_ofp_id),
            activity_id: ActiveValue::Set(self.activity_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            expires_at: ActiveValue::Set(self.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an Active bid with default values for the given pilot.
pub async fn create_bid(
    db: &DatabaseConnection,
    pilot: &entity::pilot::Model,
) -> Result<entity::bid::Model, DbErr> {
    BidFactory::new(db, pilot).build().await
}
