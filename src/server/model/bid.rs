use chrono::{DateTime, Utc};

use crate::model::{acars::AcarsBidViewDto, bid::BidDto};

/// Hours a bid stays valid after creation.
pub const BID_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidStatus {
    Active,
    InProgress,
    Completed,
    Cancelled,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "Active" => Self::Active,
            "InProgress" => Self::InProgress,
            "Completed" => Self::Completed,
            _ => Self::Cancelled,
        }
    }

    /// Statuses of a bid that still holds its route and aircraft.
    pub fn open() -> [&'static str; 2] {
        [Self::Active.as_str(), Self::InProgress.as_str()]
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Active | Self::InProgress)
    }
}

/// A pilot's reservation of a route and optionally a specific aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub flight_number: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub route: Option<String>,
    pub estimated_flight_time: Option<i32>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub planned_fuel: Option<f64>,
    pub rotation_speed: Option<i32>,
    pub simbrief_ofp_id: Option<String>,
    pub activity_id: Option<i32>,
    pub status: BidStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Bid {
    pub fn from_entity(entity: entity::bid::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            pilot_name: entity.pilot_name,
            callsign: entity.callsign,
            flight_number: entity.flight_number,
            departure_icao: entity.departure_icao,
            arrival_icao: entity.arrival_icao,
            aircraft_type: entity.aircraft_type,
            aircraft_registration: entity.aircraft_registration,
            route: entity.route,
            estimated_flight_time: entity.estimated_flight_time,
            pax: entity.pax,
            cargo: entity.cargo,
            planned_fuel: entity.planned_fuel,
            rotation_speed: entity.rotation_speed,
            simbrief_ofp_id: entity.simbrief_ofp_id,
            activity_id: entity.activity_id,
            status: BidStatus::from_db(&entity.status),
            created_at: entity.created_at,
            expires_at: entity.expires_at,
        }
    }

    pub fn into_dto(self) -> BidDto {
        BidDto {
            id: self.id,
            pilot_name: self.pilot_name,
            callsign: self.callsign,
            flight_number: self.flight_number,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            aircraft_type: self.aircraft_type,
            aircraft_registration: self.aircraft_registration,
            route: self.route,
            estimated_flight_time: self.estimated_flight_time,
            pax: self.pax,
            cargo: self.cargo,
            planned_fuel: self.planned_fuel,
            simbrief_ofp_id: self.simbrief_ofp_id,
            activity_id: self.activity_id,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }

    pub fn into_acars_dto(self) -> AcarsBidViewDto {
        AcarsBidViewDto {
            id: self.id,
            callsign: self.callsign,
            flight_number: self.flight_number,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            aircraft_type: self.aircraft_type,
            aircraft_registration: self.aircraft_registration,
            route: self.route,
            pax: self.pax,
            cargo: self.cargo,
            planned_fuel: self.planned_fuel,
            rotation_speed: self.rotation_speed,
            simbrief_ofp_id: self.simbrief_ofp_id,
            activity_id: self.activity_id,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateBidParam {
    pub pilot_id: i32,
    pub pilot_name: String,
    pub callsign: String,
    pub flight_number: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub route: Option<String>,
    pub estimated_flight_time: Option<i32>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub planned_fuel: Option<f64>,
    pub rotation_speed: Option<i32>,
    pub simbrief_ofp_id: Option<String>,
    pub activity_id: Option<i32>,
}
