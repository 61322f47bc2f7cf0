//! Pilot data repository for database operations.
//!
//! This module provides the `PilotRepository` for managing pilot accounts: registration,
//! identity lookups for the portal and the ACARS client, career statistic updates after
//! flights, balance movements and blacklist state. Entities are converted to the `Pilot`
//! domain model at this boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::pilot::{CreatePilotParam, FlightStatsParam, Pilot, PilotStatus};

/// Repository providing database operations for pilot accounts.
pub struct PilotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PilotRepository<'a> {
    /// Creates a new PilotRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PilotRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pilot at registration.
    ///
    /// New pilots start as Active Cadets located at their home base with zeroed statistics.
    ///
    /// # Arguments
    /// - `param` - Identity, credentials and home base of the new pilot
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The created pilot
    /// - `Err(DbErr)` - Database error, including unique violations on pilot id or email
    pub async fn create(&self, param: CreatePilotParam) -> Result<Pilot, DbErr> {
        let entity = entity::pilot::ActiveModel {
            pilot_id: ActiveValue::Set(param.pilot_id),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            rank: ActiveValue::Set("Cadet".to_string()),
            status: ActiveValue::Set(PilotStatus::Active.as_str().to_string()),
            is_admin: ActiveValue::Set(false),
            total_hours: ActiveValue::Set(0.0),
            transfer_hours: ActiveValue::Set(0.0),
            total_flights: ActiveValue::Set(0),
            total_credits: ActiveValue::Set(0),
            balance: ActiveValue::Set(0),
            current_location: ActiveValue::Set(param.home_base.clone()),
            home_base: ActiveValue::Set(param.home_base),
            simbrief_id: ActiveValue::Set(None),
            vatsim_cid: ActiveValue::Set(None),
            ivao_vid: ActiveValue::Set(None),
            routes_flown: ActiveValue::Set("[]".to_string()),
            last_flight_date: ActiveValue::Set(None),
            last_activity: ActiveValue::Set(None),
            hwid: ActiveValue::Set(None),
            blacklist_reason: ActiveValue::Set(None),
            blacklisted_by: ActiveValue::Set(None),
            blacklisted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pilot::from_entity(entity))
    }

    /// Finds a pilot by database id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pilot>, DbErr> {
        Ok(self.find_model(id).await?.map(Pilot::from_entity))
    }

    /// Finds a pilot by exact public pilot id such as `LVT123`.
    pub async fn find_by_pilot_id(&self, pilot_id: &str) -> Result<Option<Pilot>, DbErr> {
        let entity = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Pilot::from_entity))
    }

    /// Finds a pilot by email; the lookup lowercases the input.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Pilot>, DbErr> {
        let entity = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(Pilot::from_entity))
    }

    /// Resolves the identifier an ACARS client sends as "pilot id".
    ///
    /// Tries, in order: exact pilot id, lowercase email, uppercase pilot id, numeric database
    /// id. The first hit wins.
    ///
    /// # Arguments
    /// - `identifier` - Pilot id, email or numeric id as sent by the client
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - A pilot matched one of the lookups
    /// - `Ok(None)` - No pilot matched
    /// - `Err(DbErr)` - Database error during a lookup
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Pilot>, DbErr> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(None);
        }

        if let Some(pilot) = self.find_by_pilot_id(identifier).await? {
            return Ok(Some(pilot));
        }

        if let Some(pilot) = self.find_by_email(identifier).await? {
            return Ok(Some(pilot));
        }

        let upper = identifier.to_uppercase();
        if upper != identifier {
            if let Some(pilot) = self.find_by_pilot_id(&upper).await? {
                return Ok(Some(pilot));
            }
        }

        match identifier.parse::<i32>() {
            Ok(id) => self.find_by_id(id).await,
            Err(_) => Ok(None),
        }
    }

    /// Checks whether a pilot id is already taken.
    pub async fn pilot_id_exists(&self, pilot_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::PilotId.eq(pilot_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Email.eq(email.trim().to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin pilots exist.
    ///
    /// Used at startup to decide whether an admin bootstrap code should be generated.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admins exist (first-time setup)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Sets admin status for a pilot.
    pub async fn set_admin(&self, id: i32, is_admin: bool) -> Result<(), DbErr> {
        entity::prelude::Pilot::update_many()
            .filter(entity::pilot::Column::Id.eq(id))
            .col_expr(
                entity::pilot::Column::IsAdmin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::prelude::Pilot::update_many()
            .filter(entity::pilot::Column::Id.eq(id))
            .col_expr(
                entity::pilot::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Records a successful login.
    ///
    /// Stamps `last_activity` and moves dormant (Inactive or OnLeave) pilots back to Active.
    ///
    /// # Arguments
    /// - `pilot` - The pilot that just authenticated
    ///
    /// # Returns
    /// - `Ok(Pilot)` - The pilot with its refreshed status and activity time
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_login(&self, pilot: &Pilot) -> Result<Pilot, DbErr> {
        let Some(model) = self.find_model(pilot.id).await? else {
            return Err(DbErr::RecordNotFound(format!("pilot {}", pilot.id)));
        };

        let mut active: entity::pilot::ActiveModel = model.into();
        active.last_activity = ActiveValue::Set(Some(Utc::now()));
        if pilot.status.is_dormant() {
            active.status = ActiveValue::Set(PilotStatus::Active.as_str().to_string());
        }

        Ok(Pilot::from_entity(active.update(self.db).await?))
    }

    /// Updates `last_activity` without touching status.
    pub async fn touch_activity(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Pilot::update_many()
            .filter(entity::pilot::Column::Id.eq(id))
            .col_expr(
                entity::pilot::Column::LastActivity,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Binds a hardware id to the account on first device login.
    pub async fn bind_hwid(&self, id: i32, hwid: String) -> Result<(), DbErr> {
        entity::prelude::Pilot::update_many()
            .filter(entity::pilot::Column::Id.eq(id))
            .col_expr(
                entity::pilot::Column::Hwid,
                sea_orm::sea_query::Expr::value(hwid),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates the external network identifiers of a pilot.
    ///
    /// Empty strings clear the corresponding field.
    pub async fn update_settings(
        &self,
        id: i32,
        simbrief_id: Option<String>,
        vatsim_cid: Option<String>,
        ivao_vid: Option<String>,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let mut active: entity::pilot::ActiveModel = model.into();
        active.simbrief_id = ActiveValue::Set(clean(simbrief_id));
        active.vatsim_cid = ActiveValue::Set(clean(vatsim_cid));
        active.ivao_vid = ActiveValue::Set(clean(ivao_vid));

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Adds a signed amount to a pilot's balance.
    ///
    /// # Arguments
    /// - `id` - Database id of the pilot
    /// - `delta` - Credits to add; negative to deduct
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - Pilot with the new balance
    /// - `Ok(None)` - No pilot with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust_balance(&self, id: i32, delta: i64) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let balance = model.balance + delta;
        let mut active: entity::pilot::ActiveModel = model.into();
        active.balance = ActiveValue::Set(balance);

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Pays a completion reward into both the balance and lifetime credits.
    pub async fn credit_reward(&self, id: i32, amount: i64) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let balance = model.balance + amount;
        let total_credits = model.total_credits + amount;
        let mut active: entity::pilot::ActiveModel = model.into();
        active.balance = ActiveValue::Set(balance);
        active.total_credits = ActiveValue::Set(total_credits);

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Moves a pilot to a new location, charging the given fee.
    pub async fn relocate(
        &self,
        id: i32,
        location: String,
        cost: i64,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let balance = model.balance - cost;
        let mut active: entity::pilot::ActiveModel = model.into();
        active.balance = ActiveValue::Set(balance);
        active.current_location = ActiveValue::Set(location);

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Applies the career outcome of an accepted PIREP.
    ///
    /// Increments flights, adds hours and revenue, pays the pilot, moves them to the arrival
    /// airport and marks them Active.
    ///
    /// # Arguments
    /// - `id` - Database id of the pilot
    /// - `param` - Hours flown, revenue generated, pay and arrival location
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - Updated pilot
    /// - `Ok(None)` - No pilot with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_flight_stats(
        &self,
        id: i32,
        param: FlightStatsParam,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let flights = model.total_flights + 1;
        let hours = model.total_hours + param.hours;
        let credits = model.total_credits + param.revenue;
        let balance = model.balance + param.pay;

        let mut active: entity::pilot::ActiveModel = model.into();
        active.total_flights = ActiveValue::Set(flights);
        active.total_hours = ActiveValue::Set(hours);
        active.total_credits = ActiveValue::Set(credits);
        active.balance = ActiveValue::Set(balance);
        active.current_location = ActiveValue::Set(param.location);
        active.status = ActiveValue::Set(PilotStatus::Active.as_str().to_string());

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Credits flight bonuses, records the flown route and stamps the flight date.
    ///
    /// The route key is only appended when it is not already in the list.
    pub async fn award_credits(
        &self,
        id: i32,
        amount: i64,
        route_key: &str,
        flown_at: DateTime<Utc>,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut routes: Vec<String> = crate::server::util::parse::json_list(&model.routes_flown);
        if !routes.iter().any(|r| r == route_key) {
            routes.push(route_key.to_string());
        }
        let routes = serde_json::to_string(&routes).map_err(|e| DbErr::Custom(e.to_string()))?;
        let balance = model.balance + amount;

        let mut active: entity::pilot::ActiveModel = model.into();
        active.balance = ActiveValue::Set(balance);
        active.routes_flown = ActiveValue::Set(routes);
        active.last_flight_date = ActiveValue::Set(Some(flown_at));

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Credits an approved manual PIREP: one flight, its hours and a flat credit amount.
    pub async fn credit_manual_flight(
        &self,
        id: i32,
        hours: f64,
        credits: i64,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let flights = model.total_flights + 1;
        let total_hours = model.total_hours + hours;
        let balance = model.balance + credits;
        let total_credits = model.total_credits + credits;

        let mut active: entity::pilot::ActiveModel = model.into();
        active.total_flights = ActiveValue::Set(flights);
        active.total_hours = ActiveValue::Set(total_hours);
        active.balance = ActiveValue::Set(balance);
        active.total_credits = ActiveValue::Set(total_credits);

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Reverses the statistics a deleted flight contributed, clamping each at zero.
    pub async fn reverse_flight_stats(
        &self,
        id: i32,
        hours: f64,
        revenue: i64,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let flights = (model.total_flights - 1).max(0);
        let total_hours = (model.total_hours - hours).max(0.0);
        let total_credits = (model.total_credits - revenue).max(0);

        let mut active: entity::pilot::ActiveModel = model.into();
        active.total_flights = ActiveValue::Set(flights);
        active.total_hours = ActiveValue::Set(total_hours);
        active.total_credits = ActiveValue::Set(total_credits);

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    pub async fn set_rank(&self, id: i32, rank: &str) -> Result<(), DbErr> {
        entity::prelude::Pilot::update_many()
            .filter(entity::pilot::Column::Id.eq(id))
            .col_expr(
                entity::pilot::Column::Rank,
                sea_orm::sea_query::Expr::value(rank),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all Active pilots ordered by total hours, most experienced first.
    pub async fn get_active(&self) -> Result<Vec<Pilot>, DbErr> {
        let entities = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Status.eq(PilotStatus::Active.as_str()))
            .order_by_desc(entity::pilot::Column::TotalHours)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pilot::from_entity).collect())
    }

    /// Top Active pilots by total hours.
    pub async fn top_by_hours(&self, limit: u64) -> Result<Vec<Pilot>, DbErr> {
        let entities = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Status.eq(PilotStatus::Active.as_str()))
            .order_by_desc(entity::pilot::Column::TotalHours)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pilot::from_entity).collect())
    }

    /// Top pilots by balance, excluding pilots with no credits.
    pub async fn top_by_balance(&self, limit: u64) -> Result<Vec<Pilot>, DbErr> {
        let entities = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Balance.gt(0))
            .order_by_desc(entity::pilot::Column::Balance)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pilot::from_entity).collect())
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Pilot>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pilot::from_entity).collect())
    }

    /// Blacklists a pilot with a reason and the acting admin's name.
    pub async fn blacklist(
        &self,
        id: i32,
        reason: String,
        blacklisted_by: String,
    ) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: entity::pilot::ActiveModel = model.into();
        active.status = ActiveValue::Set(PilotStatus::Blacklist.as_str().to_string());
        active.blacklist_reason = ActiveValue::Set(Some(reason));
        active.blacklisted_by = ActiveValue::Set(Some(blacklisted_by));
        active.blacklisted_at = ActiveValue::Set(Some(Utc::now()));

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Lifts a blacklist, leaving the pilot Inactive until their next login.
    pub async fn unblacklist(&self, id: i32) -> Result<Option<Pilot>, DbErr> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active: entity::pilot::ActiveModel = model.into();
        active.status = ActiveValue::Set(PilotStatus::Inactive.as_str().to_string());
        active.blacklist_reason = ActiveValue::Set(None);
        active.blacklisted_by = ActiveValue::Set(None);
        active.blacklisted_at = ActiveValue::Set(None);

        Ok(Some(Pilot::from_entity(active.update(self.db).await?)))
    }

    /// Gets blacklisted pilots, most recently blacklisted first.
    pub async fn get_blacklisted(&self) -> Result<Vec<Pilot>, DbErr> {
        let entities = entity::prelude::Pilot::find()
            .filter(entity::pilot::Column::Status.eq(PilotStatus::Blacklist.as_str()))
            .order_by_desc(entity::pilot::Column::BlacklistedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pilot::from_entity).collect())
    }

    async fn find_model(&self, id: i32) -> Result<Option<entity::pilot::Model>, DbErr> {
        entity::prelude::Pilot::find_by_id(id).one(self.db).await
    }
}
