use chrono::{DateTime, Utc};

use crate::{
    model::content::{TourDto, TourLegDto, TourProgressDto, UpsertTourDto},
    server::util::parse::json_list,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStatus {
    InProgress,
    Completed,
}

impl TourStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TourLeg {
    pub leg_number: i32,
    pub departure_icao: String,
    pub arrival_icao: String,
    pub distance_nm: f64,
    pub aircraft_types: Vec<String>,
}

impl TourLeg {
    pub fn from_entity(entity: entity::tour_leg::Model) -> Self {
        Self {
            leg_number: entity.leg_number,
            departure_icao: entity.departure_icao,
            arrival_icao: entity.arrival_icao,
            distance_nm: entity.distance_nm,
            aircraft_types: json_list(&entity.aircraft_types),
        }
    }

    /// Whether a flight flies this leg with an allowed aircraft type.
    pub fn matches(&self, departure: &str, arrival: &str, aircraft_type: &str) -> bool {
        self.departure_icao == departure
            && self.arrival_icao == arrival
            && (self.aircraft_types.is_empty()
                || self.aircraft_types.iter().any(|t| t == aircraft_type))
    }

    pub fn into_dto(self) -> TourLegDto {
        TourLegDto {
            leg_number: self.leg_number,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            distance_nm: self.distance_nm,
            aircraft_types: self.aircraft_types,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub banner: Option<String>,
    pub reward_credits: i64,
    pub difficulty: String,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Legs ordered by leg number.
    pub legs: Vec<TourLeg>,
}

impl Tour {
    pub fn from_entity(entity: entity::tour::Model, legs: Vec<entity::tour_leg::Model>) -> Self {
        let mut legs: Vec<TourLeg> = legs.into_iter().map(TourLeg::from_entity).collect();
        legs.sort_by_key(|leg| leg.leg_number);

        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            banner: entity.banner,
            reward_credits: entity.reward_credits,
            difficulty: entity.difficulty,
            is_active: entity.is_active,
            start_date: entity.start_date,
            end_date: entity.end_date,
            legs,
        }
    }

    pub fn into_dto(self, progress: Option<TourProgress>) -> TourDto {
        TourDto {
            id: self.id,
            name: self.name,
            description: self.description,
            banner: self.banner,
            reward_credits: self.reward_credits,
            difficulty: self.difficulty,
            is_active: self.is_active,
            start_date: self.start_date,
            end_date: self.end_date,
            legs: self.legs.into_iter().map(TourLeg::into_dto).collect(),
            progress: progress.map(TourProgress::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TourProgress {
    pub id: i32,
    pub tour_id: i32,
    pub pilot_id: i32,
    /// Zero-based index of the next leg to fly.
    pub current_leg: i32,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl TourProgress {
    pub fn from_entity(entity: entity::tour_progress::Model) -> Self {
        Self {
            id: entity.id,
            tour_id: entity.tour_id,
            pilot_id: entity.pilot_id,
            current_leg: entity.current_leg,
            status: entity.status,
            started_at: entity.started_at,
            completed_at: entity.completed_at,
        }
    }

    pub fn into_dto(self) -> TourProgressDto {
        TourProgressDto {
            current_leg: self.current_leg,
            status: self.status,
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertTourParam {
    pub name: String,
    pub description: String,
    pub banner: Option<String>,
    pub reward_credits: i64,
    pub difficulty: String,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub legs: Vec<TourLeg>,
}

impl UpsertTourParam {
    /// Converts the request, renumbering legs from 1 in the given order.
    pub fn from_dto(dto: UpsertTourDto) -> Self {
        let legs = dto
            .legs
            .into_iter()
            .enumerate()
            .map(|(index, leg)| TourLeg {
                leg_number: index as i32 + 1,
                departure_icao: leg.departure_icao.trim().to_uppercase(),
                arrival_icao: leg.arrival_icao.trim().to_uppercase(),
                distance_nm: leg.distance_nm,
                aircraft_types: leg.aircraft_types,
            })
            .collect();

        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            banner: dto.banner,
            reward_credits: dto.reward_credits,
            difficulty: dto.difficulty,
            is_active: dto.is_active,
            start_date: dto.start_date,
            end_date: dto.end_date,
            legs,
        }
    }
}
