//! Pilot factory for creating test pilot entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pilots with customizable fields.
///
/// The default password hash is not a valid bcrypt hash; tests exercising login set
/// one explicitly with `password_hash()`.
pub struct PilotFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: String,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    rank: String,
    status: String,
    is_admin: bool,
    total_hours: f64,
    total_flights: i32,
    balance: i64,
    current_location: String,
    simbrief_id: Option<String>,
    hwid: Option<String>,
    routes_flown: Vec<String>,
    last_flight_date: Option<DateTime<Utc>>,
}

impl<'a> PilotFactory<'a> {
    /// Creates a new PilotFactory with default values.
    ///
    /// Defaults:
    /// - pilot_id: `"LVT{id}"`
    /// - email: `"pilot{id}@flightdeck.test"`
    /// - rank: `"Cadet"`, status: `"Active"`
    /// - location: `"OJAI"`, balance: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            pilot_id: format!("LVT{}", id),
            first_name: "Test".to_string(),
            last_name: format!("Pilot{}", id),
            email: format!("pilot{}@flightdeck.test", id),
            password_hash: "!".to_string(),
            rank: "Cadet".to_string(),
            status: "Active".to_string(),
            is_admin: false,
            total_hours: 0.0,
            total_flights: 0,
            balance: 0,
            current_location: "OJAI".to_string(),
            simbrief_id: None,
            hwid: None,
            routes_flown: Vec::new(),
            last_flight_date: None,
        }
    }

    pub fn pilot_id(mut self, pilot_id: impl Into<String>) -> Self {
        self.pilot_id = pilot_id.into();
        self
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self
    }

    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.total_hours = hours;
        self
    }

    pub fn flights(mut self, flights: i32) -> Self {
        self.total_flights = flights;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn location(mut self, icao: impl Into<String>) -> Self {
        self.current_location = icao.into();
        self
    }

    pub fn simbrief_id(mut self, simbrief_id: impl Into<String>) -> Self {
        self.simbrief_id = Some(simbrief_id.into());
        self
    }

    pub fn hwid(mut self, hwid: impl Into<String>) -> Self {
        self.hwid = Some(hwid.into());
        self
    }

    /// Marks a route as already flown, in `DEP-ARR` form.
    pub fn flown_route(mut self, route: impl Into<String>) -> Self {
        self.routes_flown.push(route.into());
        self
    }

    pub fn last_flight_date(mut self, at: DateTime<Utc>) -> Self {
        self.last_flight_date = Some(at);
        self
    }

    /// Builds and inserts the pilot entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pilot::Model)` - Created pilot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pilot::Model, DbErr> {
        let routes_flown = serde_json::to_string(&self.routes_flown)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::pilot::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            rank: ActiveValue::Set(self.rank),
            status: ActiveValue::Set(self.status),
            is_admin: ActiveValue::Set(self.is_admin),
            total_hours: ActiveValue::Set(self.total_hours),
            transfer_hours: ActiveValue::Set(0.0),
            total_flights: ActiveValue::Set(self.total_flights),
            total_credits: ActiveValue::Set(0),
            balance: ActiveValue::Set(self.balance),
            current_location: ActiveValue::Set(self.current_location.clone()),
            home_base: ActiveValue::Set(self.current_location),
            simbrief_id: ActiveValue::Set(self.simbrief_id),
            vatsim_cid: ActiveValue::Set(None),
            ivao_vid: ActiveValue::Set(None),
            routes_flown: ActiveValue::Set(routes_flown),
            last_flight_date: ActiveValue::Set(self.last_flight_date),
            last_activity: ActiveValue::Set(None),
            hwid: ActiveValue::Set(self.hwid),
            blacklist_reason: ActiveValue::Set(None),
            blacklisted_by: ActiveValue::Set(None),
            blacklisted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pilot with default values.
pub async fn create_pilot(db: &DatabaseConnection) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db).build().await
}

/// Creates a pilot with admin privileges.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db).admin(true).build().await
}
