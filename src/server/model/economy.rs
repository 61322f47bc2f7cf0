//! Economy configuration and airline ledger domain models.
//!
//! [`EconomyConfig`] mirrors the singleton global configuration row. It is created with
//! [`EconomyConfig::default`] values on first read, and admins may later tune any numeric or
//! boolean field.

use chrono::{DateTime, Utc};

use crate::model::economy::{FinanceLogDto, FinanceOverviewDto, GlobalConfigDto};

/// Key of the singleton configuration row.
pub const CONFIG_KEY: &str = "MAIN";

/// Starting balance of the airline account.
pub const INITIAL_AIRLINE_BALANCE: i64 = 1_000_000;

/// Ledger categories written to the finance log.
pub mod ledger {
    pub const FLIGHT_REVENUE: &str = "Flight Revenue";
    pub const FUEL_COST: &str = "Fuel Cost";
    pub const LANDING_FEE: &str = "Landing Fee";
    pub const PILOT_PAY: &str = "Pilot Pay";
    pub const MAINTENANCE: &str = "Maintenance";
    pub const REVENUE_SPLIT: &str = "FLIGHT_REVENUE_SPLIT";
    pub const MAINTENANCE_REPAIR: &str = "Maintenance Repair";
    pub const STORE_REVENUE: &str = "Store Revenue";
    pub const WEEKLY_SALARY: &str = "Weekly Salary";
    pub const DAILY_OPERATIONS: &str = "Daily Operations";
}

#[derive(Debug, Clone, PartialEq)]
pub struct EconomyConfig {
    pub fuel_tax_percent: f64,
    pub penalty_multiplier: f64,
    pub repair_rate_per_percent: f64,
    pub ticket_price_per_nm: f64,
    pub cargo_price_per_lb_nm: f64,
    pub fuel_price_per_lb: f64,
    pub base_landing_fee: f64,
    pub pilot_pay_rate: f64,
    pub hard_landing_threshold: f64,
    pub severe_damage_threshold: f64,
    pub grounded_health_threshold: f64,
    pub store_to_airline_percent: f64,
    pub salary_enabled: bool,
    pub salary_cadet: i64,
    pub salary_second_officer: i64,
    pub salary_first_officer: i64,
    pub salary_senior_first_officer: i64,
    pub salary_captain: i64,
    pub salary_senior_captain: i64,
    pub salary_check_airman: i64,
    pub credits_base_flight: i64,
    pub credits_greaser_bonus: i64,
    pub credits_firm_bonus: i64,
    pub credits_hard_landing_penalty: i64,
    pub credits_fuel_efficiency_bonus: i64,
    pub credits_first_flight_multiplier: f64,
    pub credits_hub_to_hub_bonus: i64,
    pub credits_event_multiplier: f64,
    pub credits_long_haul_4h: i64,
    pub credits_long_haul_8h: i64,
    pub credits_new_route_bonus: i64,
    pub credits_taxi_speed_penalty: i64,
    pub credits_light_violation_penalty: i64,
    pub credits_overspeed_penalty: i64,
    pub repair_hours_per_percent: f64,
    pub location_based_fleet: bool,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            fuel_tax_percent: 10.0,
            penalty_multiplier: 5.0,
            repair_rate_per_percent: 100.0,
            ticket_price_per_nm: 0.8,
            cargo_price_per_lb_nm: 0.002,
            fuel_price_per_lb: 0.65,
            base_landing_fee: 250.0,
            pilot_pay_rate: 2500.0,
            hard_landing_threshold: -400.0,
            severe_damage_threshold: -700.0,
            grounded_health_threshold: 20.0,
            store_to_airline_percent: 100.0,
            salary_enabled: true,
            salary_cadet: 500,
            salary_second_officer: 1000,
            salary_first_officer: 1500,
            salary_senior_first_officer: 2000,
            salary_captain: 3000,
            salary_senior_captain: 4000,
            salary_check_airman: 5000,
            credits_base_flight: 100,
            credits_greaser_bonus: 50,
            credits_firm_bonus: 25,
            credits_hard_landing_penalty: -50,
            credits_fuel_efficiency_bonus: 30,
            credits_first_flight_multiplier: 1.2,
            credits_hub_to_hub_bonus: 50,
            credits_event_multiplier: 2.0,
            credits_long_haul_4h: 100,
            credits_long_haul_8h: 250,
            credits_new_route_bonus: 50,
            credits_taxi_speed_penalty: -10,
            credits_light_violation_penalty: -15,
            credits_overspeed_penalty: -50,
            repair_hours_per_percent: 2.0,
            location_based_fleet: true,
            updated_at: Utc::now(),
            updated_by: None,
        }
    }
}

impl EconomyConfig {
    pub fn from_entity(entity: entity::global_config::Model) -> Self {
        Self {
            fuel_tax_percent: entity.fuel_tax_percent,
            penalty_multiplier: entity.penalty_multiplier,
            repair_rate_per_percent: entity.repair_rate_per_percent,
            ticket_price_per_nm: entity.ticket_price_per_nm,
            cargo_price_per_lb_nm: entity.cargo_price_per_lb_nm,
            fuel_price_per_lb: entity.fuel_price_per_lb,
            base_landing_fee: entity.base_landing_fee,
            pilot_pay_rate: entity.pilot_pay_rate,
            hard_landing_threshold: entity.hard_landing_threshold,
            severe_damage_threshold: entity.severe_damage_threshold,
            grounded_health_threshold: entity.grounded_health_threshold,
            store_to_airline_percent: entity.store_to_airline_percent,
            salary_enabled: entity.salary_enabled,
            salary_cadet: entity.salary_cadet,
            salary_second_officer: entity.salary_second_officer,
            salary_first_officer: entity.salary_first_officer,
            salary_senior_first_officer: entity.salary_senior_first_officer,
            salary_captain: entity.salary_captain,
            salary_senior_captain: entity.salary_senior_captain,
            salary_check_airman: entity.salary_check_airman,
            credits_base_flight: entity.credits_base_flight,
            credits_greaser_bonus: entity.credits_greaser_bonus,
            credits_firm_bonus: entity.credits_firm_bonus,
            credits_hard_landing_penalty: entity.credits_hard_landing_penalty,
            credits_fuel_efficiency_bonus: entity.credits_fuel_efficiency_bonus,
            credits_first_flight_multiplier: entity.credits_first_flight_multiplier,
            credits_hub_to_hub_bonus: entity.credits_hub_to_hub_bonus,
            credits_event_multiplier: entity.credits_event_multiplier,
            credits_long_haul_4h: entity.credits_long_haul_4h,
            credits_long_haul_8h: entity.credits_long_haul_8h,
            credits_new_route_bonus: entity.credits_new_route_bonus,
            credits_taxi_speed_penalty: entity.credits_taxi_speed_penalty,
            credits_light_violation_penalty: entity.credits_light_violation_penalty,
            credits_overspeed_penalty: entity.credits_overspeed_penalty,
            repair_hours_per_percent: entity.repair_hours_per_percent,
            location_based_fleet: entity.location_based_fleet,
            updated_at: entity.updated_at,
            updated_by: entity.updated_by,
        }
    }

    pub fn from_dto(dto: GlobalConfigDto) -> Self {
        Self {
            fuel_tax_percent: dto.fuel_tax_percent,
            penalty_multiplier: dto.penalty_multiplier,
            repair_rate_per_percent: dto.repair_rate_per_percent,
            ticket_price_per_nm: dto.ticket_price_per_nm,
            cargo_price_per_lb_nm: dto.cargo_price_per_lb_nm,
            fuel_price_per_lb: dto.fuel_price_per_lb,
            base_landing_fee: dto.base_landing_fee,
            pilot_pay_rate: dto.pilot_pay_rate,
            hard_landing_threshold: dto.hard_landing_threshold,
            severe_damage_threshold: dto.severe_damage_threshold,
            grounded_health_threshold: dto.grounded_health_threshold,
            store_to_airline_percent: dto.store_to_airline_percent,
            salary_enabled: dto.salary_enabled,
            salary_cadet: dto.salary_cadet,
            salary_second_officer: dto.salary_second_officer,
            salary_first_officer: dto.salary_first_officer,
            salary_senior_first_officer: dto.salary_senior_first_officer,
            salary_captain: dto.salary_captain,
            salary_senior_captain: dto.salary_senior_captain,
            salary_check_airman: dto.salary_check_airman,
            credits_base_flight: dto.credits_base_flight,
            credits_greaser_bonus: dto.credits_greaser_bonus,
            credits_firm_bonus: dto.credits_firm_bonus,
            credits_hard_landing_penalty: dto.credits_hard_landing_penalty,
            credits_fuel_efficiency_bonus: dto.credits_fuel_efficiency_bonus,
            credits_first_flight_multiplier: dto.credits_first_flight_multiplier,
            credits_hub_to_hub_bonus: dto.credits_hub_to_hub_bonus,
            credits_event_multiplier: dto.credits_event_multiplier,
            credits_long_haul_4h: dto.credits_long_haul_4h,
            credits_long_haul_8h: dto.credits_long_haul_8h,
            credits_new_route_bonus: dto.credits_new_route_bonus,
            credits_taxi_speed_penalty: dto.credits_taxi_speed_penalty,
            credits_light_violation_penalty: dto.credits_light_violation_penalty,
            credits_overspeed_penalty: dto.credits_overspeed_penalty,
            repair_hours_per_percent: dto.repair_hours_per_percent,
            location_based_fleet: dto.location_based_fleet,
            updated_at: dto.updated_at,
            updated_by: dto.updated_by,
        }
    }

    /// Weekly salary for a rank name.
    ///
    /// The rank is lowercased and its words joined with underscores before lookup, so
    /// `Senior First Officer` resolves to `senior_first_officer`. Unknown ranks earn the
    /// cadet salary.
    pub fn salary_for_rank(&self, rank: &str) -> i64 {
        let key = rank
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("_");

        match key.as_str() {
            "second_officer" => self.salary_second_officer,
            "first_officer" => self.salary_first_officer,
            "senior_first_officer" => self.salary_senior_first_officer,
            "captain" => self.salary_captain,
            "senior_captain" => self.salary_senior_captain,
            "check_airman" => self.salary_check_airman,
            _ => self.salary_cadet,
        }
    }

    pub fn into_dto(self) -> GlobalConfigDto {
        GlobalConfigDto {
            fuel_tax_percent: self.fuel_tax_percent,
            penalty_multiplier: self.penalty_multiplier,
            repair_rate_per_percent: self.repair_rate_per_percent,
            ticket_price_per_nm: self.ticket_price_per_nm,
            cargo_price_per_lb_nm: self.cargo_price_per_lb_nm,
            fuel_price_per_lb: self.fuel_price_per_lb,
            base_landing_fee: self.base_landing_fee,
            pilot_pay_rate: self.pilot_pay_rate,
            hard_landing_threshold: self.hard_landing_threshold,
            severe_damage_threshold: self.severe_damage_threshold,
            grounded_health_threshold: self.grounded_health_threshold,
            store_to_airline_percent: self.store_to_airline_percent,
            salary_enabled: self.salary_enabled,
            salary_cadet: self.salary_cadet,
            salary_second_officer: self.salary_second_officer,
            salary_first_officer: self.salary_first_officer,
            salary_senior_first_officer: self.salary_senior_first_officer,
            salary_captain: self.salary_captain,
            salary_senior_captain: self.salary_senior_captain,
            salary_check_airman: self.salary_check_airman,
            credits_base_flight: self.credits_base_flight,
            credits_greaser_bonus: self.credits_greaser_bonus,
            credits_firm_bonus: self.credits_firm_bonus,
            credits_hard_landing_penalty: self.credits_hard_landing_penalty,
            credits_fuel_efficiency_bonus: self.credits_fuel_efficiency_bonus,
            credits_first_flight_multiplier: self.credits_first_flight_multiplier,
            credits_hub_to_hub_bonus: self.credits_hub_to_hub_bonus,
            credits_event_multiplier: self.credits_event_multiplier,
            credits_long_haul_4h: self.credits_long_haul_4h,
            credits_long_haul_8h: self.credits_long_haul_8h,
            credits_new_route_bonus: self.credits_new_route_bonus,
            credits_taxi_speed_penalty: self.credits_taxi_speed_penalty,
            credits_light_violation_penalty: self.credits_light_violation_penalty,
            credits_overspeed_penalty: self.credits_overspeed_penalty,
            repair_hours_per_percent: self.repair_hours_per_percent,
            location_based_fleet: self.location_based_fleet,
            updated_at: self.updated_at,
            updated_by: self.updated_by,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirlineFinance {
    pub balance: i64,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub last_updated: DateTime<Utc>,
}

impl AirlineFinance {
    pub fn from_entity(entity: entity::airline_finance::Model) -> Self {
        Self {
            balance: entity.balance,
            total_revenue: entity.total_revenue,
            total_expenses: entity.total_expenses,
            last_updated: entity.last_updated,
        }
    }

    pub fn into_dto(self, recent: Vec<FinanceLog>) -> FinanceOverviewDto {
        FinanceOverviewDto {
            balance: self.balance,
            total_revenue: self.total_revenue,
            total_expenses: self.total_expenses,
            last_updated: self.last_updated,
            recent: recent.into_iter().map(FinanceLog::into_dto).collect(),
        }
    }
}

/// Signed change to the airline account.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AirlineAdjustment {
    pub balance: i64,
    pub revenue: i64,
    pub expenses: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceLog {
    pub id: i32,
    pub pilot_id: Option<i32>,
    pub kind: String,
    pub amount: i64,
    pub description: String,
    pub reference_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FinanceLog {
    pub fn from_entity(entity: entity::finance_log::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            kind: entity.kind,
            amount: entity.amount,
            description: entity.description,
            reference_id: entity.reference_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FinanceLogDto {
        FinanceLogDto {
            id: self.id,
            pilot_id: self.pilot_id,
            kind: self.kind,
            amount: self.amount,
            description: self.description,
            reference_id: self.reference_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFinanceLogParam {
    pub pilot_id: Option<i32>,
    pub kind: &'static str,
    pub amount: i64,
    pub description: String,
    pub reference_id: Option<String>,
}
