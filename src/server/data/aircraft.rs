//! Fleet aircraft data repository.
//!
//! Provides `AircraftRepository` for fleet CRUD, availability queries used by booking, the
//! status transitions driven by flights (InFlight on start, Available on release) and the
//! wear and repair updates applied by PIREPs and maintenance.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::fleet::{
    Aircraft, AircraftStatus, AircraftWearParam, CreateAircraftParam, UpdateAircraftParam,
};

/// Repository providing database operations for fleet aircraft.
pub struct AircraftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftRepository<'a> {
    /// Creates a new AircraftRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AircraftRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an aircraft to the fleet in Available state at full health.
    ///
    /// # Arguments
    /// - `param` - Registration, type, name, operator code and initial location
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The created aircraft
    /// - `Err(DbErr)` - Database error, including a duplicate registration
    pub async fn create(&self, param: CreateAircraftParam) -> Result<Aircraft, DbErr> {
        let entity = entity::aircraft::ActiveModel {
            registration: ActiveValue::Set(param.registration),
            aircraft_type: ActiveValue::Set(param.aircraft_type),
            name: ActiveValue::Set(param.name),
            airline_code: ActiveValue::Set(param.airline_code),
            current_location: ActiveValue::Set(param.current_location),
            status: ActiveValue::Set(AircraftStatus::Available.as_str().to_string()),
            condition: ActiveValue::Set(100.0),
            total_hours: ActiveValue::Set(0.0),
            flight_count: ActiveValue::Set(0),
            is_active: ActiveValue::Set(true),
            last_service: ActiveValue::Set(None),
            grounded_reason: ActiveValue::Set(None),
            damage_log: ActiveValue::Set("[]".to_string()),
            repair_until: ActiveValue::Set(None),
            damaged_at: ActiveValue::Set(None),
            damaged_by_pilot: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Aircraft::from_entity(entity))
    }

    pub async fn find_by_registration(&self, registration: &str) -> Result<Option<Aircraft>, DbErr> {
        let entity = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .one(self.db)
            .await?;

        Ok(entity.map(Aircraft::from_entity))
    }

    /// Finds the first active aircraft of a type parked at a location.
    pub async fn find_by_type_at(
        &self,
        aircraft_type: &str,
        location: &str,
    ) -> Result<Option<Aircraft>, DbErr> {
        let entity = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::AircraftType.eq(aircraft_type))
            .filter(entity::aircraft::Column::CurrentLocation.eq(location))
            .filter(entity::aircraft::Column::IsActive.eq(true))
            .order_by_asc(entity::aircraft::Column::Registration)
            .one(self.db)
            .await?;

        Ok(entity.map(Aircraft::from_entity))
    }

    /// Gets active aircraft with optional location and status filters, ordered by registration.
    pub async fn get_active(
        &self,
        location: Option<&str>,
        status: Option<AircraftStatus>,
    ) -> Result<Vec<Aircraft>, DbErr> {
        let mut query = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::IsActive.eq(true));

        if let Some(location) = location {
            query = query.filter(entity::aircraft::Column::CurrentLocation.eq(location));
        }
        if let Some(status) = status {
            query = query.filter(entity::aircraft::Column::Status.eq(status.as_str()));
        }

        let entities = query
            .order_by_asc(entity::aircraft::Column::Registration)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Aircraft::from_entity).collect())
    }

    /// Gets active aircraft ordered by condition, worst first.
    pub async fn get_active_by_condition(&self) -> Result<Vec<Aircraft>, DbErr> {
        let entities = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::IsActive.eq(true))
            .order_by_asc(entity::aircraft::Column::Condition)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Aircraft::from_entity).collect())
    }

    /// Applies admin edits to an aircraft.
    ///
    /// # Returns
    /// - `Ok(Some(Aircraft))` - Updated aircraft
    /// - `Ok(None)` - No aircraft with that registration
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        registration: &str,
        param: UpdateAircraftParam,
    ) -> Result<Option<Aircraft>, DbErr> {
        let Some(model) = self.find_model(registration).await? else {
            return Ok(None);
        };

        let mut active: entity::aircraft::ActiveModel = model.into();
        if let Some(aircraft_type) = param.aircraft_type {
            active.aircraft_type = ActiveValue::Set(aircraft_type);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(airline_code) = param.airline_code {
            active.airline_code = ActiveValue::Set(airline_code);
        }
        if let Some(location) = param.current_location {
            active.current_location = ActiveValue::Set(location);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(condition) = param.condition {
            active.condition = ActiveValue::Set(condition.clamp(0.0, 100.0));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        Ok(Some(Aircraft::from_entity(active.update(self.db).await?)))
    }

    /// Retires an aircraft: status Retired and no longer active.
    pub async fn retire(&self, registration: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Aircraft::update_many()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .col_expr(
                entity::aircraft::Column::Status,
                sea_orm::sea_query::Expr::value(AircraftStatus::Retired.as_str()),
            )
            .col_expr(
                entity::aircraft::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn set_status(&self, id: i32, status: AircraftStatus) -> Result<(), DbErr> {
        entity::prelude::Aircraft::update_many()
            .filter(entity::aircraft::Column::Id.eq(id))
            .col_expr(
                entity::aircraft::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Grounds an aircraft with a reason.
    pub async fn ground(&self, id: i32, reason: String) -> Result<(), DbErr> {
        entity::prelude::Aircraft::update_many()
            .filter(entity::aircraft::Column::Id.eq(id))
            .col_expr(
                entity::aircraft::Column::Status,
                sea_orm::sea_query::Expr::value(AircraftStatus::Grounded.as_str()),
            )
            .col_expr(
                entity::aircraft::Column::GroundedReason,
                sea_orm::sea_query::Expr::value(reason),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Clears an elapsed repair timer and returns the aircraft to service.
    pub async fn clear_repair_timer(&self, id: i32) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::Aircraft::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let mut active: entity::aircraft::ActiveModel = model.into();
        active.repair_until = ActiveValue::Set(None);
        active.status = ActiveValue::Set(AircraftStatus::Available.as_str().to_string());
        active.update(self.db).await?;

        Ok(())
    }

    /// Sets an aircraft back to Available if, and only if, it is currently InFlight.
    ///
    /// # Returns
    /// - `Ok(true)` - The aircraft was InFlight and has been released
    /// - `Ok(false)` - No InFlight aircraft with that registration
    /// - `Err(DbErr)` - Database error during update
    pub async fn release_if_in_flight(&self, registration: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Aircraft::update_many()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .filter(entity::aircraft::Column::Status.eq(AircraftStatus::InFlight.as_str()))
            .col_expr(
                entity::aircraft::Column::Status,
                sea_orm::sea_query::Expr::value(AircraftStatus::Available.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Releases one InFlight aircraft of a type at a location, used when no registration is
    /// known for a flight.
    pub async fn release_type_at_if_in_flight(
        &self,
        aircraft_type: &str,
        location: &str,
    ) -> Result<bool, DbErr> {
        let entity = entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::AircraftType.eq(aircraft_type))
            .filter(entity::aircraft::Column::CurrentLocation.eq(location))
            .filter(entity::aircraft::Column::Status.eq(AircraftStatus::InFlight.as_str()))
            .one(self.db)
            .await?;

        match entity {
            Some(aircraft) => {
                self.set_status(aircraft.id, AircraftStatus::Available)
                    .await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Applies the outcome of a flight: wear, relocation, hours, cycles and resulting status.
    ///
    /// # Arguments
    /// - `id` - Database id of the aircraft
    /// - `param` - New condition, location, hours flown, status and damage bookkeeping
    ///
    /// # Returns
    /// - `Ok(Some(Aircraft))` - Updated aircraft
    /// - `Ok(None)` - No aircraft with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_wear(
        &self,
        id: i32,
        param: AircraftWearParam,
    ) -> Result<Option<Aircraft>, DbErr> {
        let Some(model) = entity::prelude::Aircraft::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let damage_log =
            serde_json::to_string(&param.damage_log).map_err(|e| DbErr::Custom(e.to_string()))?;
        let total_hours = model.total_hours + param.hours;
        let flight_count = model.flight_count + 1;
        let damaged = param.damaged_by_pilot.is_some();

        let mut active: entity::aircraft::ActiveModel = model.into();
        active.condition = ActiveValue::Set(param.condition);
        active.current_location = ActiveValue::Set(param.location);
        active.total_hours = ActiveValue::Set(total_hours);
        active.flight_count = ActiveValue::Set(flight_count);
        active.status = ActiveValue::Set(param.status.as_str().to_string());
        active.grounded_reason = ActiveValue::Set(param.grounded_reason);
        active.damage_log = ActiveValue::Set(damage_log);
        active.repair_until = ActiveValue::Set(param.repair_until);
        if damaged {
            active.damaged_at = ActiveValue::Set(Some(Utc::now()));
            active.damaged_by_pilot = ActiveValue::Set(param.damaged_by_pilot);
        }

        Ok(Some(Aircraft::from_entity(active.update(self.db).await?)))
    }

    /// Restores an aircraft to the given condition and returns it to service.
    pub async fn repair(&self, id: i32, condition: f64) -> Result<Option<Aircraft>, DbErr> {
        let Some(model) = entity::prelude::Aircraft::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::aircraft::ActiveModel = model.into();
        active.condition = ActiveValue::Set(condition);
        active.status = ActiveValue::Set(AircraftStatus::Available.as_str().to_string());
        active.grounded_reason = ActiveValue::Set(None);
        active.repair_until = ActiveValue::Set(None);
        active.last_service = ActiveValue::Set(Some(Utc::now()));

        Ok(Some(Aircraft::from_entity(active.update(self.db).await?)))
    }

    async fn find_model(&self, registration: &str) -> Result<Option<entity::aircraft::Model>, DbErr> {
        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Registration.eq(registration))
            .one(self.db)
            .await
    }
}
