//! Bid data repository.
//!
//! Bids are short-lived reservations. Open bids (Active or InProgress) hold a route and an
//! aircraft; Active bids expire 24 hours after creation and are swept by cleanup.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::bid::{Bid, BidStatus, CreateBidParam, BID_TTL_HOURS};

/// Repository providing database operations for bids.
pub struct BidRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BidRepository<'a> {
    /// Creates a new BidRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BidRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an Active bid expiring 24 hours from now.
    ///
    /// # Arguments
    /// - `param` - Pilot, route, aircraft and optional flight plan details
    ///
    /// # Returns
    /// - `Ok(Bid)` - The created bid
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBidParam) -> Result<Bid, DbErr> {
        let now = Utc::now();

        let entity = entity::bid::ActiveModel {
            pilot_id: ActiveValue::Set(param.pilot_id),
            pilot_name: ActiveValue::Set(param.pilot_name),
            callsign: ActiveValue::Set(param.callsign),
            flight_number: ActiveValue::Set(param.flight_number),
            departure_icao: ActiveValue::Set(param.departure_icao),
            arrival_icao: ActiveValue::Set(param.arrival_icao),
            aircraft_type: ActiveValue::Set(param.aircraft_type),
            aircraft_registration: ActiveValue::Set(param.aircraft_registration),
            route: ActiveValue::Set(param.route),
            estimated_flight_time: ActiveValue::Set(param.estimated_flight_time),
            pax: ActiveValue::Set(param.pax),
            cargo: ActiveValue::Set(param.cargo),
            planned_fuel: ActiveValue::Set(param.planned_fuel),
            rotation_speed: ActiveValue::Set(param.rotation_speed),
            simbrief_ofp_id: ActiveValue::Set(param.simbrief_ofp_id),
            activity_id: ActiveValue::Set(param.activity_id),
            status: ActiveValue::Set(BidStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + Duration::hours(BID_TTL_HOURS)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bid::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bid>, DbErr> {
        let entity = entity::prelude::Bid::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Bid::from_entity))
    }

    /// Latest open (Active or InProgress) bid of a pilot.
    pub async fn find_open_for_pilot(&self, pilot_id: i32) -> Result<Option<Bid>, DbErr> {
        let entity = entity::prelude::Bid::find()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Status.is_in(BidStatus::open()))
            .order_by_desc(entity::bid::Column::CreatedAt)
            .order_by_desc(entity::bid::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Bid::from_entity))
    }

    /// Latest open bid of a pilot for a callsign.
    pub async fn find_open_by_callsign(
        &self,
        pilot_id: i32,
        callsign: &str,
    ) -> Result<Option<Bid>, DbErr> {
        let entity = entity::prelude::Bid::find()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Callsign.eq(callsign))
            .filter(entity::bid::Column::Status.is_in(BidStatus::open()))
            .order_by_desc(entity::bid::Column::CreatedAt)
            .order_by_desc(entity::bid::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Bid::from_entity))
    }

    /// Latest Active bid of a pilot, optionally restricted to a callsign.
    pub async fn find_active_for_pilot(
        &self,
        pilot_id: i32,
        callsign: Option<&str>,
    ) -> Result<Option<Bid>, DbErr> {
        let mut query = entity::prelude::Bid::find()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()));

        if let Some(callsign) = callsign {
            query = query.filter(entity::bid::Column::Callsign.eq(callsign));
        }

        let entity = query
            .order_by_desc(entity::bid::Column::CreatedAt)
            .order_by_desc(entity::bid::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Bid::from_entity))
    }

    /// All open bids of a pilot.
    pub async fn get_open_for_pilot(&self, pilot_id: i32) -> Result<Vec<Bid>, DbErr> {
        let entities = entity::prelude::Bid::find()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Status.is_in(BidStatus::open()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bid::from_entity).collect())
    }

    /// Whether an Active bid already uses the given SimBrief OFP id.
    pub async fn active_ofp_exists(&self, ofp_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Bid::find()
            .filter(entity::bid::Column::SimbriefOfpId.eq(ofp_id))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether an Active bid already uses the given callsign.
    pub async fn active_callsign_exists(&self, callsign: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Bid::find()
            .filter(entity::bid::Column::Callsign.eq(callsign))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn set_status(&self, id: i32, status: BidStatus) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::Bid::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let mut active: entity::bid::ActiveModel = model.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.update(self.db).await?;

        Ok(())
    }

    /// Cancels every Active bid of a pilot.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bids cancelled
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel_active_for_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Bid::update_many()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .col_expr(
                entity::bid::Column::Status,
                sea_orm::sea_query::Expr::value(BidStatus::Cancelled.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bid::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every Active bid of a pilot.
    pub async fn delete_active_for_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Bid::delete_many()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every open (Active or InProgress) bid of a pilot.
    pub async fn delete_open_for_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Bid::delete_many()
            .filter(entity::bid::Column::PilotId.eq(pilot_id))
            .filter(entity::bid::Column::Status.is_in(BidStatus::open()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes Active bids whose expiry is at or before `now`.
    ///
    /// # Arguments
    /// - `now` - Reference time for expiry
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of bids deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired_active(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Bid::delete_many()
            .filter(entity::bid::Column::Status.eq(BidStatus::Active.as_str()))
            .filter(entity::bid::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
