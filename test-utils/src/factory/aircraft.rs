//! Aircraft factory for creating fleet entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating fleet aircraft.
///
/// # Example
///
/// ```rust,ignore
/// let aircraft = AircraftFactory::new(&db)
///     .location("OERK")
///     .status("Grounded")
///     .condition(12.0)
///     .build()
///     .await?;
/// ```
pub struct AircraftFactory<'a> {
    db: &'a DatabaseConnection,
    registration: String,
    aircraft_type: String,
    current_location: String,
    status: String,
    condition: f64,
    is_active: bool,
    repair_until: Option<DateTime<Utc>>,
}

impl<'a> AircraftFactory<'a> {
    /// Creates a new AircraftFactory.
    ///
    /// Defaults:
    /// - registration: `"JY-T{id}"`
    /// - type: `"A320"`, location: `"OJAI"`
    /// - status: `"Available"`, condition: `100.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            registration: format!("JY-T{}", id),
            aircraft_type: "A320".to_string(),
            current_location: "OJAI".to_string(),
            status: "Available".to_string(),
            condition: 100.0,
            is_active: true,
            repair_until: None,
        }
    }

    pub fn registration(mut self, registration: impl Into<String>) -> Self {
        self.registration = registration.into();
        self
    }

    pub fn aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = aircraft_type.into();
        self
    }

    pub fn location(mut self, icao: impl Into<String>) -> Self {
        self.current_location = icao.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn condition(mut self, condition: f64) -> Self {
        self.condition = condition;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn repair_until(mut self, until: DateTime<Utc>) -> Self {
        self.repair_until = Some(until);
        self
    }

    pub async fn build(self) -> Result<entity::aircraft::Model, DbErr> {
        entity::aircraft::ActiveModel {
            registration: ActiveValue::Set(self.registration.clone()),
            aircraft_type: ActiveValue::Set(self.aircraft_type),
            name: ActiveValue::Set(self.registration),
            airline_code: ActiveValue::Set("LVT".to_string()),
            current_location: ActiveValue::Set(self.current_location),
            status: ActiveValue::Set(self.status),
            condition: ActiveValue::Set(self.condition),
            total_hours: ActiveValue::Set(0.0),
            flight_count: ActiveValue::Set(0),
            is_active: ActiveValue::Set(self.is_active),
            last_service: ActiveValue::Set(None),
            grounded_reason: ActiveValue::Set(None),
            damage_log: ActiveValue::Set("[]".to_string()),
            repair_until: ActiveValue::Set(self.repair_until),
            damaged_at: ActiveValue::Set(None),
            damaged_by_pilot: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an Available A320 at OJAI.
pub async fn create_aircraft(db: &DatabaseConnection) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).build().await
}

/// Creates an Available A320 parked at the given airport.
pub async fn create_aircraft_at(
    db: &DatabaseConnection,
    icao: &str,
) -> Result<entity::aircraft::Model, DbErr> {
    AircraftFactory::new(db).location(icao).build().await
}
