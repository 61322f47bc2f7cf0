//! Flight factory for creating filed PIREPs.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating filed flights owned by an existing pilot.
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: i32,
    pilot_name: String,
    flight_number: String,
    callsign: String,
    aircraft_type: String,
    flight_time: i32,
    revenue_passenger: i64,
    approved_status: i32,
    is_manual: bool,
    submitted_at: DateTime<Utc>,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory.
    ///
    /// Defaults to an approved 90 minute A320 flight from OJAI to OERK submitted now.
    pub fn new(db: &'a DatabaseConnection, pilot: &entity::pilot::Model) -> Self {
        let id = next_id();
        Self {
            db,
            pilot_id: pilot.id,
            pilot_name: format!("{} {}", pilot.first_name, pilot.last_name),
            flight_number: format!("LVT{}", id),
            callsign: format!("LVT{}", id),
            aircraft_type: "A320".to_string(),
            flight_time: 90,
            revenue_passenger: 0,
            approved_status: 1,
            is_manual: false,
            submitted_at: Utc::now(),
        }
    }

    pub fn flight_number(mut self, flight_number: impl Into<String>) -> Self {
        self.flight_number = flight_number.into();
        self
    }

    pub fn callsign(mut self, callsign: impl Into<String>) -> Self {
        self.callsign = callsign.into();
        self
    }

    pub fn aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    pub fn flight_time(mut self, minutes: i32) -> Self {
        self.flight_time = minutes;
        self
    }

    pub fn revenue(mut self, revenue: i64) -> Self {
        self.revenue_passenger = revenue;
        self
    }

    /// Sets the approval tri-state: 0 pending, 1 approved, 2 rejected.
    pub fn approved_status(mut self, status: i32) -> Self {
        self.approved_status = status;
        self
    }

    pub fn manual(mut self, is_manual: bool) -> Self {
        self.is_manual = is_manual;
        self
    }

    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = at;
        self
    }

    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            pilot_name: ActiveValue::Set(self.pilot_name),
            flight_number: ActiveValue::Set(self.flight_number),
            callsign: ActiveValue::Set(self.callsign),
            departure_icao: ActiveValue::Set("OJAI".to_string()),
            arrival_icao: ActiveValue::Set("OERK".to_string()),
            alternate_icao: ActiveValue::Set(None),
            route: ActiveValue::Set(None),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            aircraft_registration: ActiveValue::Set(None),
            flight_time: ActiveValue::Set(self.flight_time),
            fuel_used: ActiveValue::Set(0.0),
            distance: ActiveValue::Set(0.0),
            landing_rate: ActiveValue::Set(-150.0),
            landing_grade: ActiveValue::Set("Smooth".to_string()),
            max_g_force: ActiveValue::Set(1.2),
            pax: ActiveValue::Set(0),
            cargo: ActiveValue::Set(0),
            score: ActiveValue::Set(100),
            deductions: ActiveValue::Set("[]".to_string()),
            comfort_score: ActiveValue::Set(100.0),
            revenue_passenger: ActiveValue::Set(self.revenue_passenger),
            revenue_cargo: ActiveValue::Set(0),
            expense_fuel: ActiveValue::Set(0),
            expense_airport: ActiveValue::Set(0),
            expense_pilot: ActiveValue::Set(0),
            expense_maintenance: ActiveValue::Set(0),
            real_profit: ActiveValue::Set(0),
            passenger_rating: ActiveValue::Set(5),
            passenger_review: ActiveValue::Set(None),
            credits_earned: ActiveValue::Set(0),
            credits_breakdown: ActiveValue::Set("[]".to_string()),
            approved_status: ActiveValue::Set(self.approved_status),
            comments: ActiveValue::Set(None),
            admin_comments: ActiveValue::Set(None),
            acars_version: ActiveValue::Set(None),
            is_manual: ActiveValue::Set(self.is_manual),
            event_id: ActiveValue::Set(None),
            submitted_at: ActiveValue::Set(self.submitted_at),
            reviewed_at: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an approved flight with default values for the pilot.
pub async fn create_flight(
    db: &DatabaseConnection,
    pilot: &entity::pilot::Model,
) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db, pilot).build().await
}
