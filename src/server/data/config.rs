//! Global configuration data repository.
//!
//! The economy constants live in a single row keyed `MAIN`. The row is created with default
//! values the first time it is read, so callers never observe a missing configuration.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::economy::{EconomyConfig, CONFIG_KEY};

pub struct ConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configuration row, inserting the defaults when it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(EconomyConfig)` - Stored or freshly created configuration
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn get_or_create(&self) -> Result<EconomyConfig, DbErr> {
        if let Some(entity) = self.find_model().await? {
            return Ok(EconomyConfig::from_entity(entity));
        }

        let defaults = EconomyConfig::default();
        let mut active = to_active_model(&defaults);
        active.key = ActiveValue::Set(CONFIG_KEY.to_string());

        let entity = active.insert(self.db).await?;

        Ok(EconomyConfig::from_entity(entity))
    }

    /// Writes every field of the configuration and stamps who changed it.
    ///
    /// # Arguments
    /// - `config` - Complete configuration to store
    /// - `updated_by` - Name of the admin making the change
    ///
    /// # Returns
    /// - `Ok(EconomyConfig)` - Stored configuration
    /// - `Err(DbErr)` - Database error during update
    pub async fn save(
        &self,
        config: &EconomyConfig,
        updated_by: Option<String>,
    ) -> Result<EconomyConfig, DbErr> {
        self.get_or_create().await?;
        let Some(model) = self.find_model().await? else {
            return Err(DbErr::RecordNotFound(CONFIG_KEY.to_string()));
        };

        let mut active = to_active_model(config);
        active.id = ActiveValue::Unchanged(model.id);
        active.key = ActiveValue::Unchanged(model.key);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.updated_by = ActiveValue::Set(updated_by);

        let entity = active.update(self.db).await?;

        Ok(EconomyConfig::from_entity(entity))
    }

    async fn find_model(&self) -> Result<Option<entity::global_config::Model>, DbErr> {
        entity::prelude::GlobalConfig::find()
            .filter(entity::global_config::Column::Key.eq(CONFIG_KEY))
            .one(self.db)
            .await
    }
}

fn to_active_model(config: &EconomyConfig) -> entity::global_config::ActiveModel {
    entity::global_config::ActiveModel {
        fuel_tax_percent: ActiveValue::Set(config.fuel_tax_percent),
        penalty_multiplier: ActiveValue::Set(config.penalty_multiplier),
        repair_rate_per_percent: ActiveValue::Set(config.repair_rate_per_percent),
        ticket_price_per_nm: ActiveValue::Set(config.ticket_price_per_nm),
        cargo_price_per_lb_nm: ActiveValue::Set(config.cargo_price_per_lb_nm),
        fuel_price_per_lb: ActiveValue::Set(config.fuel_price_per_lb),
        base_landing_fee: ActiveValue::Set(config.base_landing_fee),
        pilot_pay_rate: ActiveValue::Set(config.pilot_pay_rate),
        hard_landing_threshold: ActiveValue::Set(config.hard_landing_threshold),
        severe_damage_threshold: ActiveValue::Set(config.severe_damage_threshold),
        grounded_health_threshold: ActiveValue::Set(config.grounded_health_threshold),
        store_to_airline_percent: ActiveValue::Set(config.store_to_airline_percent),
        salary_enabled: ActiveValue::Set(config.salary_enabled),
        salary_cadet: ActiveValue::Set(config.salary_cadet),
        salary_second_officer: ActiveValue::Set(config.salary_second_officer),
        salary_first_officer: ActiveValue::Set(config.salary_first_officer),
        salary_senior_first_officer: ActiveValue::Set(config.salary_senior_first_officer),
        salary_captain: ActiveValue::Set(config.salary_captain),
        salary_senior_captain: ActiveValue::Set(config.salary_senior_captain),
        salary_check_airman: ActiveValue::Set(config.salary_check_airman),
        credits_base_flight: ActiveValue::Set(config.credits_base_flight),
        credits_greaser_bonus: ActiveValue::Set(config.credits_greaser_bonus),
        credits_firm_bonus: ActiveValue::Set(config.credits_firm_bonus),
        credits_hard_landing_penalty: ActiveValue::Set(config.credits_hard_landing_penalty),
        credits_fuel_efficiency_bonus: ActiveValue::Set(config.credits_fuel_efficiency_bonus),
        credits_first_flight_multiplier: ActiveValue::Set(config.credits_first_flight_multiplier),
        credits_hub_to_hub_bonus: ActiveValue::Set(config.credits_hub_to_hub_bonus),
        credits_event_multiplier: ActiveValue::Set(config.credits_event_multiplier),
        credits_long_haul_4h: ActiveValue::Set(config.credits_long_haul_4h),
        credits_long_haul_8h: ActiveValue::Set(config.credits_long_haul_8h),
        credits_new_route_bonus: ActiveValue::Set(config.credits_new_route_bonus),
        credits_taxi_speed_penalty: ActiveValue::Set(config.credits_taxi_speed_penalty),
        credits_light_violation_penalty: ActiveValue::Set(config.credits_light_violation_penalty),
        credits_overspeed_penalty: ActiveValue::Set(config.credits_overspeed_penalty),
        repair_hours_per_percent: ActiveValue::Set(config.repair_hours_per_percent),
        location_based_fleet: ActiveValue::Set(config.location_based_fleet),
        updated_at: ActiveValue::Set(config.updated_at),
        updated_by: ActiveValue::Set(config.updated_by.clone()),
        ..Default::default()
    }
}
