use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::active_flight::{ActiveFlight, CreateActiveFlightParam, TelemetryParam};

/// Phase of a newly tracked flight.
pub const INITIAL_PHASE: &str = "Preflight";

/// Repository for live flight telemetry rows.
pub struct ActiveFlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActiveFlightRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts tracking a flight at the Preflight phase with the heartbeat set to now.
    ///
    /// # Arguments
    /// - `param` - Pilot, callsign, route and aircraft of the flight
    ///
    /// # Returns
    /// - `Ok(ActiveFlight)` - The created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateActiveFlightParam) -> Result<ActiveFlight, DbErr> {
        let now = Utc::now();

        let entity = entity::active_flight::ActiveModel {
            pilot_id: ActiveValue::Set(param.pilot_id),
            pilot_name: ActiveValue::Set(param.pilot_name),
            callsign: ActiveValue::Set(param.callsign),
            departure_icao: ActiveValue::Set(param.departure_icao),
            arrival_icao: ActiveValue::Set(param.arrival_icao),
            aircraft_type: ActiveValue::Set(param.aircraft_type),
            aircraft_registration: ActiveValue::Set(param.aircraft_registration),
            latitude: ActiveValue::Set(0.0),
            longitude: ActiveValue::Set(0.0),
            altitude: ActiveValue::Set(0.0),
            heading: ActiveValue::Set(0.0),
            ground_speed: ActiveValue::Set(0.0),
            ias: ActiveValue::Set(0.0),
            vertical_speed: ActiveValue::Set(0.0),
            phase: ActiveValue::Set(INITIAL_PHASE.to_string()),
            fuel: ActiveValue::Set(0.0),
            g_force: ActiveValue::Set(1.0),
            comfort_score: ActiveValue::Set(100.0),
            status: ActiveValue::Set(INITIAL_PHASE.to_string()),
            takeoff_notified: ActiveValue::Set(false),
            started_at: ActiveValue::Set(now),
            last_update: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ActiveFlight::from_entity(entity))
    }

    pub async fn find_by_callsign(
        &self,
        pilot_id: i32,
        callsign: &str,
    ) -> Result<Option<ActiveFlight>, DbErr> {
        let entity = entity::prelude::ActiveFlight::find()
            .filter(entity::active_flight::Column::PilotId.eq(pilot_id))
            .filter(entity::active_flight::Column::Callsign.eq(callsign))
            .order_by_desc(entity::active_flight::Column::LastUpdate)
            .one(self.db)
            .await?;

        Ok(entity.map(ActiveFlight::from_entity))
    }

    /// Writes a telemetry sample and refreshes the heartbeat.
    pub async fn update_telemetry(
        &self,
        id: i32,
        telemetry: TelemetryParam,
    ) -> Result<Option<ActiveFlight>, DbErr> {
        let Some(model) = entity::prelude::ActiveFlight::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::active_flight::ActiveModel = model.into();
        active.latitude = ActiveValue::Set(telemetry.latitude);
        active.longitude = ActiveValue::Set(telemetry.longitude);
        active.altitude = ActiveValue::Set(telemetry.altitude);
        active.heading = ActiveValue::Set(telemetry.heading);
        active.ground_speed = ActiveValue::Set(telemetry.ground_speed);
        active.ias = ActiveValue::Set(telemetry.ias);
        active.vertical_speed = ActiveValue::Set(telemetry.vertical_speed);
        active.phase = ActiveValue::Set(telemetry.phase);
        active.status = ActiveValue::Set(telemetry.status);
        active.fuel = ActiveValue::Set(telemetry.fuel);
        active.g_force = ActiveValue::Set(telemetry.g_force);
        active.comfort_score = ActiveValue::Set(telemetry.comfort_score);
        active.last_update = ActiveValue::Set(Utc::now());

        Ok(Some(ActiveFlight::from_entity(active.update(self.db).await?)))
    }

    /// Refreshes the heartbeat of a pilot's flight under a callsign.
    pub async fn heartbeat(&self, pilot_id: i32, callsign: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ActiveFlight::update_many()
            .filter(entity::active_flight::Column::PilotId.eq(pilot_id))
            .filter(entity::active_flight::Column::Callsign.eq(callsign))
            .col_expr(
                entity::active_flight::Column::LastUpdate,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn mark_takeoff_notified(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ActiveFlight::update_many()
            .filter(entity::active_flight::Column::Id.eq(id))
            .col_expr(
                entity::active_flight::Column::TakeoffNotified,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ActiveFlight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes all tracked flights of a pilot.
    pub async fn delete_for_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ActiveFlight::delete_many()
            .filter(entity::active_flight::Column::PilotId.eq(pilot_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a pilot's tracked flights under one callsign.
    pub async fn delete_by_callsign(&self, pilot_id: i32, callsign: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ActiveFlight::delete_many()
            .filter(entity::active_flight::Column::PilotId.eq(pilot_id))
            .filter(entity::active_flight::Column::Callsign.eq(callsign))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Flights with a heartbeat at or after `cutoff`, most recently updated first.
    pub async fn updated_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<ActiveFlight>, DbErr> {
        let entities = entity::prelude::ActiveFlight::find()
            .filter(entity::active_flight::Column::LastUpdate.gte(cutoff))
            .order_by_desc(entity::active_flight::Column::LastUpdate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ActiveFlight::from_entity).collect())
    }

    /// Flights whose last heartbeat is older than `cutoff`.
    pub async fn stale(&self, cutoff: DateTime<Utc>) -> Result<Vec<ActiveFlight>, DbErr> {
        let entities = entity::prelude::ActiveFlight::find()
            .filter(entity::active_flight::Column::LastUpdate.lt(cutoff))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ActiveFlight::from_entity).collect())
    }
}
