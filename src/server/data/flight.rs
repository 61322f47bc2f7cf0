//! Flight (PIREP) data repository.
//!
//! Provides `FlightRepository` for storing filed flights, the admin moderation queue with
//! status filter, search and pagination, and the per-pilot queries used by ACARS statistics
//! and leaderboards.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::flight::{
    ApprovalStatus, CreateFlightParam, Flight, FlightFilter, UpdateFlightParam,
};

/// Repository providing database operations for filed flights.
pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new FlightRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FlightRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a flight record submitted now.
    ///
    /// Credits are filled in afterwards with [`Self::set_credits`] once bonuses are known.
    ///
    /// # Arguments
    /// - `param` - Every column of the flight
    ///
    /// # Returns
    /// - `Ok(Flight)` - The stored flight
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFlightParam) -> Result<Flight, DbErr> {
        let deductions =
            serde_json::to_string(&param.deductions).map_err(|e| DbErr::Custom(e.to_string()))?;

        let entity = entity::flight::ActiveModel {
            pilot_id: ActiveValue::Set(param.pilot_id),
            pilot_name: ActiveValue::Set(param.pilot_name),
            flight_number: ActiveValue::Set(param.flight_number),
            callsign: ActiveValue::Set(param.callsign),
            departure_icao: ActiveValue::Set(param.departure_icao),
            arrival_icao: ActiveValue::Set(param.arrival_icao),
            alternate_icao: ActiveValue::Set(param.alternate_icao),
            route: ActiveValue::Set(param.route),
            aircraft_type: ActiveValue::Set(param.aircraft_type),
            aircraft_registration: ActiveValue::Set(param.aircraft_registration),
            flight_time: ActiveValue::Set(param.flight_time),
            fuel_used: ActiveValue::Set(param.fuel_used),
            distance: ActiveValue::Set(param.distance),
            landing_rate: ActiveValue::Set(param.landing_rate),
            landing_grade: ActiveValue::Set(param.landing_grade),
            max_g_force: ActiveValue::Set(param.max_g_force),
            pax: ActiveValue::Set(param.pax),
            cargo: ActiveValue::Set(param.cargo),
            score: ActiveValue::Set(param.score),
            deductions: ActiveValue::Set(deductions),
            comfort_score: ActiveValue::Set(param.comfort_score),
            revenue_passenger: ActiveValue::Set(param.revenue_passenger),
            revenue_cargo: ActiveValue::Set(param.revenue_cargo),
            expense_fuel: ActiveValue::Set(param.expense_fuel),
            expense_airport: ActiveValue::Set(param.expense_airport),
            expense_pilot: ActiveValue::Set(param.expense_pilot),
            expense_maintenance: ActiveValue::Set(param.expense_maintenance),
            real_profit: ActiveValue::Set(param.real_profit),
            passenger_rating: ActiveValue::Set(param.passenger_rating),
            passenger_review: ActiveValue::Set(param.passenger_review),
            credits_earned: ActiveValue::Set(0),
            credits_breakdown: ActiveValue::Set("[]".to_string()),
            approved_status: ActiveValue::Set(param.status.as_i32()),
            comments: ActiveValue::Set(param.comments),
            admin_comments: ActiveValue::Set(None),
            acars_version: ActiveValue::Set(param.acars_version),
            is_manual: ActiveValue::Set(param.is_manual),
            event_id: ActiveValue::Set(None),
            submitted_at: ActiveValue::Set(Utc::now()),
            reviewed_at: ActiveValue::Set(None),
            reviewed_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let entity = entity::prelude::Flight::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Flight::from_entity))
    }

    /// Gets a page of flights for the moderation queue, newest first.
    ///
    /// Search matches the flight number or the callsign as a substring.
    ///
    /// # Arguments
    /// - `filter` - Optional status and search text with a one-based page and page size
    ///
    /// # Returns
    /// - `Ok((flights, total))` - Flights of the requested page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(&self, filter: FlightFilter) -> Result<(Vec<Flight>, u64), DbErr> {
        let mut query = entity::prelude::Flight::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::flight::Column::ApprovedStatus.eq(status.as_i32()));
        }

        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(entity::flight::Column::FlightNumber.contains(search))
                    .add(entity::flight::Column::Callsign.contains(search)),
            );
        }

        let paginator = query
            .order_by_desc(entity::flight::Column::SubmittedAt)
            .order_by_desc(entity::flight::Column::Id)
            .paginate(self.db, filter.limit.max(1));

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(filter.page.saturating_sub(1)).await?;

        Ok((entities.into_iter().map(Flight::from_entity).collect(), total))
    }

    /// Applies admin edits to a flight.
    ///
    /// A status change stamps `reviewed_at` with the current time.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - Updated flight
    /// - `Ok(None)` - No flight with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateFlightParam) -> Result<Option<Flight>, DbErr> {
        let Some(model) = entity::prelude::Flight::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::flight::ActiveModel = model.into();
        if let Some(v) = param.flight_number {
            active.flight_number = ActiveValue::Set(v);
        }
        if let Some(v) = param.callsign {
            active.callsign = ActiveValue::Set(v);
        }
        if let Some(v) = param.departure_icao {
            active.departure_icao = ActiveValue::Set(v);
        }
        if let Some(v) = param.arrival_icao {
            active.arrival_icao = ActiveValue::Set(v);
        }
        if let Some(v) = param.route {
            active.route = ActiveValue::Set(Some(v));
        }
        if let Some(v) = param.aircraft_type {
            active.aircraft_type = ActiveValue::Set(v);
        }
        if let Some(v) = param.flight_time {
            active.flight_time = ActiveValue::Set(v);
        }
        if let Some(v) = param.landing_rate {
            active.landing_rate = ActiveValue::Set(v);
        }
        if let Some(v) = param.fuel_used {
            active.fuel_used = ActiveValue::Set(v);
        }
        if let Some(v) = param.distance {
            active.distance = ActiveValue::Set(v);
        }
        if let Some(v) = param.pax {
            active.pax = ActiveValue::Set(v);
        }
        if let Some(v) = param.cargo {
            active.cargo = ActiveValue::Set(v);
        }
        if let Some(v) = param.score {
            active.score = ActiveValue::Set(v);
        }
        if let Some(v) = param.admin_comments {
            active.admin_comments = ActiveValue::Set(Some(v));
        }
        if let Some(status) = param.status {
            active.approved_status = ActiveValue::Set(status.as_i32());
            active.reviewed_at = ActiveValue::Set(Some(Utc::now()));
            active.reviewed_by = ActiveValue::Set(param.reviewed_by);
        }

        Ok(Some(Flight::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Stores the credits awarded for a flight and their itemised breakdown.
    pub async fn set_credits(
        &self,
        id: i32,
        credits: i64,
        breakdown: &[String],
    ) -> Result<(), DbErr> {
        let breakdown =
            serde_json::to_string(breakdown).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::prelude::Flight::update_many()
            .filter(entity::flight::Column::Id.eq(id))
            .col_expr(
                entity::flight::Column::CreditsEarned,
                sea_orm::sea_query::Expr::value(credits),
            )
            .col_expr(
                entity::flight::Column::CreditsBreakdown,
                sea_orm::sea_query::Expr::value(breakdown),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Links a flight to the event it counted for.
    pub async fn set_event(&self, id: i32, event_id: i32) -> Result<(), DbErr> {
        entity::prelude::Flight::update_many()
            .filter(entity::flight::Column::Id.eq(id))
            .col_expr(
                entity::flight::Column::EventId,
                sea_orm::sea_query::Expr::value(event_id),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Most recent flights of a pilot, newest first.
    pub async fn recent_for_pilot(&self, pilot_id: i32, limit: u64) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .filter(entity::flight::Column::PilotId.eq(pilot_id))
            .order_by_desc(entity::flight::Column::SubmittedAt)
            .order_by_desc(entity::flight::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }

    /// Number of a pilot's flights that were not rejected.
    pub async fn count_non_rejected(&self, pilot_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Flight::find()
            .filter(entity::flight::Column::PilotId.eq(pilot_id))
            .filter(entity::flight::Column::ApprovedStatus.ne(ApprovalStatus::Rejected.as_i32()))
            .count(self.db)
            .await
    }

    /// Approved flights submitted at or after `since`.
    pub async fn approved_since(&self, since: DateTime<Utc>) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .filter(entity::flight::Column::ApprovedStatus.eq(ApprovalStatus::Approved.as_i32()))
            .filter(entity::flight::Column::SubmittedAt.gte(since))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }
}
