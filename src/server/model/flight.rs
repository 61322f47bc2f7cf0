//! Flight (PIREP) domain models.
//!
//! A flight is the permanent record of a completed or filed flight. Approval is stored as an
//! integer tri-state and surfaced as [`ApprovalStatus`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{acars::RecentFlightDto, pirep::DeductionDto, pirep::PirepDto},
    server::util::parse::json_list,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }

    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Approved,
            2 => Self::Rejected,
            _ => Self::Pending,
        }
    }

    /// Parses the admin filter and update vocabulary; `denied` is accepted for `rejected`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" | "denied" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Landing quality derived from the touchdown vertical speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingGrade {
    Butter,
    Smooth,
    Acceptable,
    Firm,
    Hard,
}

impl LandingGrade {
    /// Grades a landing rate in feet per minute by its magnitude.
    pub fn from_rate(landing_rate: f64) -> Self {
        let rate = landing_rate.abs();
        if rate <= 60.0 {
            Self::Butter
        } else if rate <= 150.0 {
            Self::Smooth
        } else if rate <= 300.0 {
            Self::Acceptable
        } else if rate <= 500.0 {
            Self::Firm
        } else {
            Self::Hard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Butter => "Butter",
            Self::Smooth => "Smooth",
            Self::Acceptable => "Acceptable",
            Self::Firm => "Firm",
            Self::Hard => "Hard",
        }
    }
}

/// Scoring deduction as stored on the flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Deduction {
    pub reason: String,
    pub points: f64,
}

impl Deduction {
    pub fn from_dto(dto: DeductionDto) -> Self {
        Self {
            reason: dto.reason,
            points: dto.points,
        }
    }

    pub fn into_dto(self) -> DeductionDto {
        DeductionDto {
            reason: self.reason,
            points: self.points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub pilot_id: i32,
    pub pilot_name: String,
    pub flight_number: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub alternate_icao: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    /// Minutes.
    pub flight_time: i32,
    pub fuel_used: f64,
    pub distance: f64,
    pub landing_rate: f64,
    pub landing_grade: String,
    pub max_g_force: f64,
    pub pax: i32,
    pub cargo: i32,
    pub score: i32,
    pub deductions: Vec<Deduction>,
    pub comfort_score: f64,
    pub revenue_passenger: i64,
    pub revenue_cargo: i64,
    pub expense_fuel: i64,
    pub expense_airport: i64,
    pub expense_pilot: i64,
    pub expense_maintenance: i64,
    pub real_profit: i64,
    pub passenger_rating: i32,
    pub passenger_review: Option<String>,
    pub credits_earned: i64,
    pub credits_breakdown: Vec<String>,
    pub status: ApprovalStatus,
    pub comments: Option<String>,
    pub admin_comments: Option<String>,
    pub acars_version: Option<String>,
    pub is_manual: bool,
    pub event_id: Option<i32>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

impl Flight {
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            pilot_name: entity.pilot_name,
            flight_number: entity.flight_number,
            callsign: entity.callsign,
            departure_icao: entity.departure_icao,
            arrival_icao: entity.arrival_icao,
            alternate_icao: entity.alternate_icao,
            route: entity.route,
            aircraft_type: entity.aircraft_type,
            aircraft_registration: entity.aircraft_registration,
            flight_time: entity.flight_time,
            fuel_used: entity.fuel_used,
            distance: entity.distance,
            landing_rate: entity.landing_rate,
            landing_grade: entity.landing_grade,
            max_g_force: entity.max_g_force,
            pax: entity.pax,
            cargo: entity.cargo,
            score: entity.score,
            deductions: json_list(&entity.deductions),
            comfort_score: entity.comfort_score,
            revenue_passenger: entity.revenue_passenger,
            revenue_cargo: entity.revenue_cargo,
            expense_fuel: entity.expense_fuel,
            expense_airport: entity.expense_airport,
            expense_pilot: entity.expense_pilot,
            expense_maintenance: entity.expense_maintenance,
            real_profit: entity.real_profit,
            passenger_rating: entity.passenger_rating,
            passenger_review: entity.passenger_review,
            credits_earned: entity.credits_earned,
            credits_breakdown: json_list(&entity.credits_breakdown),
            status: ApprovalStatus::from_i32(entity.approved_status),
            comments: entity.comments,
            admin_comments: entity.admin_comments,
            acars_version: entity.acars_version,
            is_manual: entity.is_manual,
            event_id: entity.event_id,
            submitted_at: entity.submitted_at,
            reviewed_at: entity.reviewed_at,
            reviewed_by: entity.reviewed_by,
        }
    }

    /// Gross revenue of the flight.
    pub fn revenue(&self) -> i64 {
        self.revenue_passenger + self.revenue_cargo
    }

    pub fn into_dto(self) -> PirepDto {
        PirepDto {
            id: self.id,
            pilot_id: self.pilot_id,
            pilot_name: self.pilot_name,
            flight_number: self.flight_number,
            callsign: self.callsign,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            alternate_icao: self.alternate_icao,
            route: self.route,
            aircraft_type: self.aircraft_type,
            aircraft_registration: self.aircraft_registration,
            flight_time: self.flight_time,
            fuel_used: self.fuel_used,
            distance: self.distance,
            landing_rate: self.landing_rate,
            landing_grade: self.landing_grade,
            max_g_force: self.max_g_force,
            pax: self.pax,
            cargo: self.cargo,
            score: self.score,
            deductions: self.deductions.into_iter().map(Deduction::into_dto).collect(),
            comfort_score: self.comfort_score,
            revenue_passenger: self.revenue_passenger,
            revenue_cargo: self.revenue_cargo,
            expense_fuel: self.expense_fuel,
            expense_airport: self.expense_airport,
            expense_pilot: self.expense_pilot,
            expense_maintenance: self.expense_maintenance,
            real_profit: self.real_profit,
            passenger_rating: self.passenger_rating,
            passenger_review: self.passenger_review,
            credits_earned: self.credits_earned,
            credits_breakdown: self.credits_breakdown,
            status: self.status.as_str().to_string(),
            comments: self.comments,
            admin_comments: self.admin_comments,
            acars_version: self.acars_version,
            is_manual: self.is_manual,
            event_id: self.event_id,
            submitted_at: self.submitted_at,
            reviewed_at: self.reviewed_at,
            reviewed_by: self.reviewed_by,
        }
    }

    pub fn into_recent_dto(self) -> RecentFlightDto {
        let status = match self.status {
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
            ApprovalStatus::Pending => "Pending",
        };

        RecentFlightDto {
            flight_number: self.flight_number,
            callsign: self.callsign,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            aircraft_type: self.aircraft_type,
            flight_time: self.flight_time,
            landing_rate: self.landing_rate,
            landing_grade: self.landing_grade,
            score: self.score,
            distance: self.distance,
            submitted_at: self.submitted_at,
            status: status.to_string(),
        }
    }
}

/// All columns of a new flight record.
#[derive(Debug, Clone)]
pub struct CreateFlightParam {
    pub pilot_id: i32,
    pub pilot_name: String,
    pub flight_number: String,
    pub callsign: String,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub alternate_icao: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: String,
    pub aircraft_registration: Option<String>,
    pub flight_time: i32,
    pub fuel_used: f64,
    pub distance: f64,
    pub landing_rate: f64,
    pub landing_grade: String,
    pub max_g_force: f64,
    pub pax: i32,
    pub cargo: i32,
    pub score: i32,
    pub deductions: Vec<Deduction>,
    pub comfort_score: f64,
    pub revenue_passenger: i64,
    pub revenue_cargo: i64,
    pub expense_fuel: i64,
    pub expense_airport: i64,
    pub expense_pilot: i64,
    pub expense_maintenance: i64,
    pub real_profit: i64,
    pub passenger_rating: i32,
    pub passenger_review: Option<String>,
    pub status: ApprovalStatus,
    pub comments: Option<String>,
    pub acars_version: Option<String>,
    pub is_manual: bool,
}

impl CreateFlightParam {
    /// A record with route details only and no economy figures.
    pub fn bare(pilot_id: i32, pilot_name: String, status: ApprovalStatus) -> Self {
        Self {
            pilot_id,
            pilot_name,
            flight_number: "N/A".to_string(),
            callsign: String::new(),
            departure_icao: String::new(),
            arrival_icao: String::new(),
            alternate_icao: None,
            route: None,
            aircraft_type: String::new(),
            aircraft_registration: None,
            flight_time: 0,
            fuel_used: 0.0,
            distance: 0.0,
            landing_rate: 0.0,
            landing_grade: String::new(),
            max_g_force: 1.0,
            pax: 0,
            cargo: 0,
            score: 100,
            deductions: Vec::new(),
            comfort_score: 100.0,
            revenue_passenger: 0,
            revenue_cargo: 0,
            expense_fuel: 0,
            expense_airport: 0,
            expense_pilot: 0,
            expense_maintenance: 0,
            real_profit: 0,
            passenger_rating: 0,
            passenger_review: None,
            status,
            comments: None,
            acars_version: None,
            is_manual: false,
        }
    }
}

/// Admin edits to a flight; `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlightParam {
    pub flight_number: Option<String>,
    pub callsign: Option<String>,
    pub departure_icao: Option<String>,
    pub arrival_icao: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: Option<String>,
    pub flight_time: Option<i32>,
    pub landing_rate: Option<f64>,
    pub fuel_used: Option<f64>,
    pub distance: Option<f64>,
    pub pax: Option<i32>,
    pub cargo: Option<i32>,
    pub score: Option<i32>,
    pub admin_comments: Option<String>,
    pub status: Option<ApprovalStatus>,
    pub reviewed_by: Option<String>,
}

/// Admin PIREP list query.
#[derive(Debug, Clone)]
pub struct FlightFilter {
    pub status: Option<ApprovalStatus>,
    pub search: Option<String>,
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
}
