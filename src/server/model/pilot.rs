//! Pilot domain models and parameters.
//!
//! A pilot is both the login identity for the portal and the ACARS client and the carrier
//! of career statistics (hours, flights, credits, location). Status strings stored in the
//! database are converted to [`PilotStatus`] at the repository boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::AcarsPilotDto,
        pilot::{BlacklistEntryDto, PilotDto, RosterEntryDto},
    },
    server::util::parse::json_list,
};

/// Account status of a pilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotStatus {
    Active,
    Inactive,
    Blacklist,
    Pending,
    OnLeave,
}

impl PilotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Blacklist => "Blacklist",
            Self::Pending => "Pending",
            Self::OnLeave => "OnLeave",
        }
    }

    /// Parses a stored status; unknown values are treated as `Inactive`.
    pub fn from_db(value: &str) -> Self {
        match value {
            "Active" => Self::Active,
            "Blacklist" => Self::Blacklist,
            "Pending" => Self::Pending,
            "OnLeave" => Self::OnLeave,
            _ => Self::Inactive,
        }
    }

    /// Whether a successful login should move the pilot back to `Active`.
    pub fn is_dormant(&self) -> bool {
        matches!(self, Self::Inactive | Self::OnLeave)
    }
}

/// Pilot account with career statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Pilot {
    pub id: i32,
    /// Public callsign-style identifier, e.g. `LVT123`.
    pub pilot_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub rank: String,
    pub status: PilotStatus,
    pub is_admin: bool,
    pub total_hours: f64,
    pub transfer_hours: f64,
    pub total_flights: i32,
    pub total_credits: i64,
    pub balance: i64,
    pub current_location: String,
    pub home_base: String,
    pub simbrief_id: Option<String>,
    pub vatsim_cid: Option<String>,
    pub ivao_vid: Option<String>,
    /// Routes flown as `DEP-ARR` keys.
    pub routes_flown: Vec<String>,
    pub last_flight_date: Option<DateTime<Utc>>,
    pub last_activity: Option<DateTime<Utc>>,
    pub hwid: Option<String>,
    pub blacklist_reason: Option<String>,
    pub blacklisted_by: Option<String>,
    pub blacklisted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Pilot {
    pub fn from_entity(entity: entity::pilot::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password_hash,
            rank: entity.rank,
            status: PilotStatus::from_db(&entity.status),
            is_admin: entity.is_admin,
            total_hours: entity.total_hours,
            transfer_hours: entity.transfer_hours,
            total_flights: entity.total_flights,
            total_credits: entity.total_credits,
            balance: entity.balance,
            current_location: entity.current_location,
            home_base: entity.home_base,
            simbrief_id: entity.simbrief_id,
            vatsim_cid: entity.vatsim_cid,
            ivao_vid: entity.ivao_vid,
            routes_flown: json_list(&entity.routes_flown),
            last_flight_date: entity.last_flight_date,
            last_activity: entity.last_activity,
            hwid: entity.hwid,
            blacklist_reason: entity.blacklist_reason,
            blacklisted_by: entity.blacklisted_by,
            blacklisted_at: entity.blacklisted_at,
            created_at: entity.created_at,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_blacklisted(&self) -> bool {
        self.status == PilotStatus::Blacklist
    }

    /// Hours counted towards rank requirements, including hours transferred from other airlines.
    pub fn career_hours(&self) -> f64 {
        self.total_hours + self.transfer_hours
    }

    pub fn into_dto(self) -> PilotDto {
        PilotDto {
            id: self.id,
            pilot_id: self.pilot_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            rank: self.rank,
            status: self.status.as_str().to_string(),
            is_admin: self.is_admin,
            total_hours: self.total_hours,
            transfer_hours: self.transfer_hours,
            total_flights: self.total_flights,
            total_credits: self.total_credits,
            balance: self.balance,
            current_location: self.current_location,
            home_base: self.home_base,
            simbrief_id: self.simbrief_id,
            vatsim_cid: self.vatsim_cid,
            ivao_vid: self.ivao_vid,
            last_flight_date: self.last_flight_date,
            created_at: self.created_at,
        }
    }

    pub fn to_acars_dto(&self) -> AcarsPilotDto {
        AcarsPilotDto {
            id: self.id,
            pilot_id: self.pilot_id.clone(),
            name: self.full_name(),
            rank: self.rank.clone(),
            avatar_url: None,
            total_hours: self.total_hours,
            total_flights: self.total_flights,
            balance: self.balance,
            current_location: self.current_location.clone(),
            simbrief_id: self.simbrief_id.clone(),
        }
    }

    pub fn into_roster_dto(self) -> RosterEntryDto {
        RosterEntryDto {
            name: self.full_name(),
            pilot_id: self.pilot_id,
            rank: self.rank,
            total_hours: self.total_hours,
            total_flights: self.total_flights,
            current_location: self.current_location,
        }
    }

    pub fn into_blacklist_dto(self) -> BlacklistEntryDto {
        BlacklistEntryDto {
            id: self.id,
            name: self.full_name(),
            pilot_id: self.pilot_id,
            email: self.email,
            reason: self.blacklist_reason,
            blacklisted_by: self.blacklisted_by,
            blacklisted_at: self.blacklisted_at,
        }
    }
}

/// Parameters for creating a pilot account at registration.
#[derive(Debug, Clone)]
pub struct CreatePilotParam {
    pub pilot_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub home_base: String,
}

/// Career statistics applied to a pilot after an accepted PIREP.
#[derive(Debug, Clone, Default)]
pub struct FlightStatsParam {
    pub hours: f64,
    pub revenue: i64,
    pub pay: i64,
    pub location: String,
}
