//! Fleet aircraft and maintenance domain models.
//!
//! Aircraft carry a condition percentage that flights wear down and repairs restore. Damage
//! history is kept as a bounded JSON log on the aircraft row, while repairs and significant
//! damage are also written to the maintenance log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::fleet::{AircraftDto, MaintenanceLogDto},
    server::util::parse::json_list,
};

/// Number of entries kept in an aircraft's damage log.
pub const DAMAGE_LOG_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftStatus {
    Available,
    InFlight,
    Maintenance,
    Grounded,
    Retired,
}

impl AircraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::InFlight => "InFlight",
            Self::Maintenance => "Maintenance",
            Self::Grounded => "Grounded",
            Self::Retired => "Retired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(Self::Available),
            "InFlight" => Some(Self::InFlight),
            "Maintenance" => Some(Self::Maintenance),
            "Grounded" => Some(Self::Grounded),
            "Retired" => Some(Self::Retired),
            _ => None,
        }
    }
}

/// One entry of an aircraft's damage history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageEntry {
    /// `SEVERE`, `HARD_LANDING` or `WEAR`.
    pub kind: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub flight_id: Option<i32>,
}

impl DamageEntry {
    /// Classifies a damage amount into its log category.
    pub fn kind_for(amount: f64) -> &'static str {
        if amount >= 50.0 {
            "SEVERE"
        } else if amount >= 5.0 {
            "HARD_LANDING"
        } else {
            "WEAR"
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub id: i32,
    pub registration: String,
    pub aircraft_type: String,
    pub name: String,
    pub airline_code: String,
    pub current_location: String,
    pub status: AircraftStatus,
    /// Airframe health from 0 to 100.
    pub condition: f64,
    pub total_hours: f64,
    pub flight_count: i32,
    pub is_active: bool,
    pub last_service: Option<DateTime<Utc>>,
    pub grounded_reason: Option<String>,
    pub damage_log: Vec<DamageEntry>,
    pub repair_until: Option<DateTime<Utc>>,
    pub damaged_at: Option<DateTime<Utc>>,
    pub damaged_by_pilot: Option<String>,
}

impl Aircraft {
    /// Converts an entity model; unknown status strings are read as `Available`.
    pub fn from_entity(entity: entity::aircraft::Model) -> Self {
        Self {
            id: entity.id,
            status: AircraftStatus::parse(&entity.status).unwrap_or(AircraftStatus::Available),
            damage_log: json_list(&entity.damage_log),
            registration: entity.registration,
            aircraft_type: entity.aircraft_type,
            name: entity.name,
            airline_code: entity.airline_code,
            current_location: entity.current_location,
            condition: entity.condition,
            total_hours: entity.total_hours,
            flight_count: entity.flight_count,
            is_active: entity.is_active,
            last_service: entity.last_service,
            grounded_reason: entity.grounded_reason,
            repair_until: entity.repair_until,
            damaged_at: entity.damaged_at,
            damaged_by_pilot: entity.damaged_by_pilot,
        }
    }

    /// Credits needed to bring the airframe back to 100%.
    pub fn full_repair_cost(&self, rate_per_percent: f64) -> i64 {
        ((100.0 - self.condition) * rate_per_percent).round() as i64
    }

    pub fn into_dto(self) -> AircraftDto {
        AircraftDto {
            id: self.id,
            registration: self.registration,
            aircraft_type: self.aircraft_type,
            name: self.name,
            airline_code: self.airline_code,
            current_location: self.current_location,
            status: self.status.as_str().to_string(),
            condition: self.condition,
            total_hours: self.total_hours,
            flight_count: self.flight_count,
            is_active: self.is_active,
            last_service: self.last_service,
            grounded_reason: self.grounded_reason,
            repair_until: self.repair_until,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAircraftParam {
    pub registration: String,
    pub aircraft_type: String,
    pub name: String,
    pub airline_code: String,
    pub current_location: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAircraftParam {
    pub aircraft_type: Option<String>,
    pub name: Option<String>,
    pub airline_code: Option<String>,
    pub current_location: Option<String>,
    pub status: Option<AircraftStatus>,
    pub condition: Option<f64>,
    pub is_active: Option<bool>,
}

/// Outcome of a flight applied to the aircraft that flew it.
#[derive(Debug, Clone)]
pub struct AircraftWearParam {
    pub condition: f64,
    pub location: String,
    pub hours: f64,
    pub status: AircraftStatus,
    pub grounded_reason: Option<String>,
    pub damage_log: Vec<DamageEntry>,
    pub repair_until: Option<DateTime<Utc>>,
    pub damaged_by_pilot: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceKind {
    RepairFull,
    RepairMinimum,
    DamageFlight,
    DamageHardLanding,
    ScheduledService,
}

impl MaintenanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepairFull => "REPAIR_FULL",
            Self::RepairMinimum => "REPAIR_MINIMUM",
            Self::DamageFlight => "DAMAGE_FLIGHT",
            Self::DamageHardLanding => "DAMAGE_HARD_LANDING",
            Self::ScheduledService => "SCHEDULED_SERVICE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceLog {
    pub id: i32,
    pub aircraft_registration: String,
    pub kind: String,
    pub health_before: f64,
    pub health_after: f64,
    pub cost: i64,
    pub description: String,
    pub flight_id: Option<i32>,
    pub pilot_id: Option<String>,
    pub performed_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MaintenanceLog {
    pub fn from_entity(entity: entity::maintenance_log::Model) -> Self {
        Self {
            id: entity.id,
            aircraft_registration: entity.aircraft_registration,
            kind: entity.kind,
            health_before: entity.health_before,
            health_after: entity.health_after,
            cost: entity.cost,
            description: entity.description,
            flight_id: entity.flight_id,
            pilot_id: entity.pilot_id,
            performed_by: entity.performed_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MaintenanceLogDto {
        MaintenanceLogDto {
            id: self.id,
            aircraft_registration: self.aircraft_registration,
            kind: self.kind,
            health_before: self.health_before,
            health_after: self.health_after,
            cost: self.cost,
            description: self.description,
            performed_by: self.performed_by,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMaintenanceLogParam {
    pub aircraft_registration: String,
    pub kind: MaintenanceKind,
    pub health_before: f64,
    pub health_after: f64,
    pub cost: i64,
    pub description: String,
    pub flight_id: Option<i32>,
    pub pilot_id: Option<String>,
    pub performed_by: Option<String>,
}
