//! Fleet listing, admin management, airframe health and maintenance repairs.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        acars::AircraftHealthDto,
        fleet::{
            CreateAircraftDto, MaintenanceAircraftDto, MaintenanceOverviewDto, RepairResultDto,
            UpdateAircraftDto,
        },
    },
    server::{
        data::{
            aircraft::AircraftRepository, config::ConfigRepository, finance::FinanceRepository,
            maintenance_log::MaintenanceLogRepository,
        },
        error::AppError,
        model::{
            economy::{ledger, AirlineAdjustment, CreateFinanceLogParam, EconomyConfig},
            fleet::{
                Aircraft, AircraftStatus, CreateAircraftParam, CreateMaintenanceLogParam,
                MaintenanceKind, MaintenanceLog, UpdateAircraftParam,
            },
        },
        util::parse::{parse_icao, require_text},
    },
};

const RECENT_MAINTENANCE_LOGS: u64 = 20;
/// Health above the grounded threshold that a minimum repair restores.
const MINIMUM_REPAIR_MARGIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairType {
    Full,
    Minimum,
}

impl RepairType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "FULL" => Some(Self::Full),
            "MINIMUM" => Some(Self::Minimum),
            _ => None,
        }
    }

    fn maintenance_kind(self) -> MaintenanceKind {
        match self {
            Self::Full => MaintenanceKind::RepairFull,
            Self::Minimum => MaintenanceKind::RepairMinimum,
        }
    }
}

/// Airframe health as reported to the ACARS client.
#[derive(Debug, Clone)]
pub struct AircraftHealth {
    pub aircraft: Aircraft,
    pub grounded: bool,
    pub repair_cost: i64,
}

/// Fleet condition overview for the maintenance desk.
#[derive(Debug, Clone)]
pub struct MaintenanceOverview {
    /// Active aircraft, worst condition first.
    pub fleet: Vec<AircraftHealth>,
    pub recent_logs: Vec<MaintenanceLog>,
    pub airline_balance: i64,
    pub config: EconomyConfig,
}

#[derive(Debug, Clone)]
pub struct RepairOutcome {
    pub aircraft: Aircraft,
    pub health_before: f64,
    pub cost: i64,
    pub airline_balance: i64,
}

impl AircraftHealth {
    pub fn into_dto(self) -> AircraftHealthDto {
        AircraftHealthDto {
            registration: self.aircraft.registration,
            health: self.aircraft.condition,
            status: self.aircraft.status.as_str().to_string(),
            grounded: self.grounded,
            grounded_reason: self.aircraft.grounded_reason,
            estimated_repair_cost: self.repair_cost,
            repair_until: self.aircraft.repair_until,
        }
    }
}

impl MaintenanceOverview {
    pub fn into_dto(self) -> MaintenanceOverviewDto {
        MaintenanceOverviewDto {
            fleet: self
                .fleet
                .into_iter()
                .map(|health| MaintenanceAircraftDto {
                    aircraft: health.aircraft.into_dto(),
                    repair_cost: health.repair_cost,
                    is_grounded: health.grounded,
                })
                .collect(),
            recent_logs: self.recent_logs.into_iter().map(|l| l.into_dto()).collect(),
            airline_balance: self.airline_balance,
            grounded_threshold: self.config.grounded_health_threshold,
            repair_rate_per_percent: self.config.repair_rate_per_percent,
        }
    }
}

impl RepairOutcome {
    pub fn into_dto(self) -> RepairResultDto {
        RepairResultDto {
            registration: self.aircraft.registration,
            health_before: self.health_before,
            health_after: self.aircraft.condition,
            cost: self.cost,
            airline_balance: self.airline_balance,
        }
    }
}

pub struct FleetService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FleetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active aircraft with optional location and status filters.
    ///
    /// # Returns
    /// - `Ok(Vec<Aircraft>)` - Matching aircraft ordered by registration
    /// - `Err(AppError::BadRequest)` - Unknown status or malformed ICAO
    pub async fn list(
        &self,
        location: Option<String>,
        status: Option<String>,
    ) -> Result<Vec<Aircraft>, AppError> {
        let location = location
            .filter(|l| !l.trim().is_empty())
            .map(|l| parse_icao(&l))
            .transpose()?;
        let status = match status.filter(|s| !s.trim().is_empty()) {
            Some(s) => Some(
                AircraftStatus::parse(s.trim())
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", s)))?,
            ),
            None => None,
        };

        Ok(AircraftRepository::new(self.db)
            .get_active(location.as_deref(), status)
            .await?)
    }

    /// Available aircraft parked at an airport.
    pub async fn available_at(&self, location: &str) -> Result<Vec<Aircraft>, AppError> {
        let location = parse_icao(location)?;

        Ok(AircraftRepository::new(self.db)
            .get_active(Some(&location), Some(AircraftStatus::Available))
            .await?)
    }

    /// Adds an aircraft to the fleet.
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - New aircraft, Available at full health
    /// - `Err(AppError::Conflict)` - Registration already exists
    /// - `Err(AppError::BadRequest)` - Missing fields or malformed location
    pub async fn create(&self, dto: CreateAircraftDto) -> Result<Aircraft, AppError> {
        let aircraft_repo = AircraftRepository::new(self.db);

        let registration = require_text("Registration", &dto.registration)?.to_uppercase();
        let aircraft_type = require_text("Aircraft type", &dto.aircraft_type)?.to_uppercase();
        let current_location = parse_icao(&dto.current_location)?;

        if aircraft_repo
            .find_by_registration(&registration)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Aircraft {} already exists",
                registration
            )));
        }

        let aircraft = aircraft_repo
            .create(CreateAircraftParam {
                name: dto.name.trim().to_string(),
                airline_code: dto.airline_code.trim().to_uppercase(),
                registration,
                aircraft_type,
                current_location,
            })
            .await?;

        tracing::info!("Aircraft {} added to the fleet", aircraft.registration);

        Ok(aircraft)
    }

    pub async fn update(
        &self,
        registration: &str,
        dto: UpdateAircraftDto,
    ) -> Result<Aircraft, AppError> {
        let registration = registration.trim().to_uppercase();

        let status = match dto.status {
            Some(s) => Some(
                AircraftStatus::parse(s.trim())
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", s)))?,
            ),
            None => None,
        };
        let current_location = dto
            .current_location
            .map(|l| parse_icao(&l))
            .transpose()?;

        AircraftRepository::new(self.db)
            .update(
                &registration,
                UpdateAircraftParam {
                    aircraft_type: dto.aircraft_type.map(|t| t.trim().to_uppercase()),
                    name: dto.name,
                    airline_code: dto.airline_code.map(|c| c.trim().to_uppercase()),
                    current_location,
                    status,
                    condition: dto.condition,
                    is_active: dto.is_active,
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registration)))
    }

    /// Retires an aircraft from the fleet.
    pub async fn retire(&self, registration: &str) -> Result<(), AppError> {
        let registration = registration.trim().to_uppercase();

        if !AircraftRepository::new(self.db).retire(&registration).await? {
            return Err(AppError::NotFound(format!(
                "Aircraft {} not found",
                registration
            )));
        }

        tracing::info!("Aircraft {} retired", registration);

        Ok(())
    }

    /// Reports airframe health, grounding the aircraft when it has fallen below the
    /// grounded threshold and is not already out of service.
    ///
    /// # Returns
    /// - `Ok(AircraftHealth)` - Health, grounded flag and full repair cost
    /// - `Err(AppError::NotFound)` - Unknown registration
    pub async fn health(&self, registration: &str) -> Result<AircraftHealth, AppError> {
        let aircraft_repo = AircraftRepository::new(self.db);
        let config = ConfigRepository::new(self.db).get_or_create().await?;

        let registration = registration.trim().to_uppercase();
        let Some(mut aircraft) = aircraft_repo.find_by_registration(&registration).await? else {
            return Err(AppError::NotFound(format!(
                "Aircraft {} not found",
                registration
            )));
        };

        let grounded = aircraft.condition < config.grounded_health_threshold;
        if grounded
            && !matches!(
                aircraft.status,
                AircraftStatus::Grounded | AircraftStatus::Maintenance
            )
        {
            let reason = format!(
                "Health {:.0}% below minimum {:.0}%",
                aircraft.condition, config.grounded_health_threshold
            );
            aircraft_repo.ground(aircraft.id, reason.clone()).await?;
            aircraft.status = AircraftStatus::Grounded;
            aircraft.grounded_reason = Some(reason);

            tracing::warn!("Aircraft {} grounded on health check", registration);
        }

        let repair_cost = aircraft.full_repair_cost(config.repair_rate_per_percent);

        Ok(AircraftHealth {
            aircraft,
            grounded,
            repair_cost,
        })
    }

    pub async fn maintenance_overview(&self) -> Result<MaintenanceOverview, AppError> {
        let config = ConfigRepository::new(self.db).get_or_create().await?;
        let fleet = AircraftRepository::new(self.db)
            .get_active_by_condition()
            .await?;
        let recent_logs = MaintenanceLogRepository::new(self.db)
            .recent(RECENT_MAINTENANCE_LOGS)
            .await?;
        let airline = FinanceRepository::new(self.db).get_airline().await?;

        let fleet = fleet
            .into_iter()
            .map(|aircraft| AircraftHealth {
                grounded: aircraft.condition < config.grounded_health_threshold,
                repair_cost: aircraft.full_repair_cost(config.repair_rate_per_percent),
                aircraft,
            })
            .collect();

        Ok(MaintenanceOverview {
            fleet,
            recent_logs,
            airline_balance: airline.balance,
            config,
        })
    }

    /// Repairs an aircraft at the airline's expense.
    ///
    /// A full repair restores 100%; a minimum repair restores just enough to clear the
    /// grounded threshold plus a small margin.
    ///
    /// # Arguments
    /// - `registration` - Aircraft to repair
    /// - `repair_type` - `FULL` or `MINIMUM`
    /// - `performed_by` - Name of the admin ordering the repair
    ///
    /// # Returns
    /// - `Ok(RepairOutcome)` - Repaired aircraft, cost and the airline balance afterwards
    /// - `Err(AppError::NotFound)` - Unknown registration
    /// - `Err(AppError::BadRequest)` - Unknown repair type, nothing to repair, or the
    ///   airline cannot afford it
    pub async fn repair(
        &self,
        registration: &str,
        repair_type: &str,
        performed_by: String,
    ) -> Result<RepairOutcome, AppError> {
        let aircraft_repo = AircraftRepository::new(self.db);
        let finance_repo = FinanceRepository::new(self.db);
        let config = ConfigRepository::new(self.db).get_or_create().await?;

        let Some(repair_type) = RepairType::parse(repair_type) else {
            return Err(AppError::BadRequest(format!(
                "Unknown repair type '{}'",
                repair_type
            )));
        };

        let registration = registration.trim().to_uppercase();
        let Some(aircraft) = aircraft_repo.find_by_registration(&registration).await? else {
            return Err(AppError::NotFound(format!(
                "Aircraft {} not found",
                registration
            )));
        };

        let target = repair_target(repair_type, config.grounded_health_threshold);
        if aircraft.condition >= target {
            return Err(AppError::BadRequest(format!(
                "{} is already at {:.0}% health",
                registration, aircraft.condition
            )));
        }

        let needed = target - aircraft.condition;
        let cost = (needed * config.repair_rate_per_percent).round() as i64;

        let airline = finance_repo.get_airline().await?;
        if airline.balance < cost {
            return Err(AppError::BadRequest(format!(
                "Insufficient airline funds: repair costs {} Cr, vault holds {} Cr",
                cost, airline.balance
            )));
        }

        let health_before = aircraft.condition;
        let aircraft = aircraft_repo
            .repair(aircraft.id, target)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registration)))?;

        let description = format!(
            "{} repair of {} from {:.1}% to {:.0}%",
            if repair_type == RepairType::Full { "Full" } else { "Minimum" },
            registration,
            health_before,
            target
        );

        MaintenanceLogRepository::new(self.db)
            .create(CreateMaintenanceLogParam {
                aircraft_registration: registration.clone(),
                kind: repair_type.maintenance_kind(),
                health_before,
                health_after: target,
                cost,
                description: description.clone(),
                flight_id: None,
                pilot_id: None,
                performed_by: Some(performed_by),
            })
            .await?;
        finance_repo
            .log(CreateFinanceLogParam {
                pilot_id: None,
                kind: ledger::MAINTENANCE_REPAIR,
                amount: -cost,
                description,
                reference_id: Some(registration.clone()),
            })
            .await?;
        let airline = finance_repo
            .adjust_airline(AirlineAdjustment {
                balance: -cost,
                revenue: 0,
                expenses: cost,
            })
            .await?;

        tracing::info!("Repaired {} for {} Cr", registration, cost);

        Ok(RepairOutcome {
            aircraft,
            health_before,
            cost,
            airline_balance: airline.balance,
        })
    }
}

/// Health a repair restores the aircraft to.
fn repair_target(repair_type: RepairType, grounded_threshold: f64) -> f64 {
    match repair_type {
        RepairType::Full => 100.0,
        RepairType::Minimum => (grounded_threshold + MINIMUM_REPAIR_MARGIN).min(100.0),
    }
}
