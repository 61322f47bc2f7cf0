use chrono::{DateTime, Utc};

use crate::{
    model::content::{ActivityDto, ActivityLegDto, ActivityProgressDto, UpsertActivityDto},
    server::util::parse::json_list,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLeg {
    pub id: i32,
    pub leg_order: i32,
    pub departure_icao: Option<String>,
    pub arrival_icao: Option<String>,
    pub flight_number: Option<String>,
    pub aircraft_types: Vec<String>,
}

impl ActivityLeg {
    pub fn from_entity(entity: entity::activity_leg::Model) -> Self {
        Self {
            id: entity.id,
            leg_order: entity.leg_order,
            departure_icao: entity.departure_icao,
            arrival_icao: entity.arrival_icao,
            flight_number: entity.flight_number,
            aircraft_types: json_list(&entity.aircraft_types),
        }
    }

    /// Whether a flight satisfies this leg; unset airports and an empty type list match anything.
    pub fn matches(&self, departure: &str, arrival: &str, aircraft_type: &str) -> bool {
        let route = self.departure_icao.as_deref().is_none_or(|d| d == departure)
            && self.arrival_icao.as_deref().is_none_or(|a| a == arrival);
        let aircraft =
            self.aircraft_types.is_empty() || self.aircraft_types.iter().any(|t| t == aircraft_type);

        route && aircraft
    }

    pub fn into_dto(self) -> ActivityLegDto {
        ActivityLegDto {
            id: Some(self.id),
            leg_order: self.leg_order,
            departure_icao: self.departure_icao,
            arrival_icao: self.arrival_icao,
            flight_number: self.flight_number,
            aircraft_types: self.aircraft_types,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub legs_in_order: bool,
    pub min_rank: Option<String>,
    pub reward_points: i64,
    pub total_pilots_complete: i32,
    pub first_pilot_to_complete: Option<String>,
    pub is_active: bool,
    /// Legs ordered by leg order.
    pub legs: Vec<ActivityLeg>,
}

impl Activity {
    pub fn from_entity(
        entity: entity::activity::Model,
        legs: Vec<entity::activity_leg::Model>,
    ) -> Self {
        let mut legs: Vec<ActivityLeg> = legs.into_iter().map(ActivityLeg::from_entity).collect();
        legs.sort_by_key(|leg| leg.leg_order);

        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            kind: entity.kind,
            start_date: entity.start_date,
            end_date: entity.end_date,
            legs_in_order: entity.legs_in_order,
            min_rank: entity.min_rank,
            reward_points: entity.reward_points,
            total_pilots_complete: entity.total_pilots_complete,
            first_pilot_to_complete: entity.first_pilot_to_complete,
            is_active: entity.is_active,
            legs,
        }
    }

    /// Picks the first leg matching the flight that the pilot has not completed yet.
    pub fn next_matching_leg(
        &self,
        completed: &[i32],
        departure: &str,
        arrival: &str,
        aircraft_type: &str,
    ) -> Option<&ActivityLeg> {
        self.legs.iter().find(|leg| {
            !completed.contains(&leg.id) && leg.matches(departure, arrival, aircraft_type)
        })
    }

    pub fn into_dto(self, progress: Option<ActivityProgress>) -> ActivityDto {
        ActivityDto {
            id: self.id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            start_date: self.start_date,
            end_date: self.end_date,
            legs_in_order: self.legs_in_order,
            min_rank: self.min_rank,
            reward_points: self.reward_points,
            total_pilots_complete: self.total_pilots_complete,
            first_pilot_to_complete: self.first_pilot_to_complete,
            is_active: self.is_active,
            legs: self.legs.into_iter().map(ActivityLeg::into_dto).collect(),
            progress: progress.map(ActivityProgress::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityProgress {
    pub id: i32,
    pub activity_id: i32,
    pub pilot_id: i32,
    pub completed_leg_ids: Vec<i32>,
    pub legs_complete: i32,
    pub percent_complete: f64,
    pub start_date: DateTime<Utc>,
    pub date_complete: Option<DateTime<Utc>>,
    pub last_leg_flown_date: Option<DateTime<Utc>>,
    pub days_to_complete: Option<i32>,
}

impl ActivityProgress {
    pub fn from_entity(entity: entity::activity_progress::Model) -> Self {
        Self {
            id: entity.id,
            activity_id: entity.activity_id,
            pilot_id: entity.pilot_id,
            completed_leg_ids: json_list(&entity.completed_leg_ids),
            legs_complete: entity.legs_complete,
            percent_complete: entity.percent_complete,
            start_date: entity.start_date,
            date_complete: entity.date_complete,
            last_leg_flown_date: entity.last_leg_flown_date,
            days_to_complete: entity.days_to_complete,
        }
    }

    pub fn into_dto(self) -> ActivityProgressDto {
        ActivityProgressDto {
            completed_leg_ids: self.completed_leg_ids,
            legs_complete: self.legs_complete,
            percent_complete: self.percent_complete,
            start_date: self.start_date,
            date_complete: self.date_complete,
            last_leg_flown_date: self.last_leg_flown_date,
            days_to_complete: self.days_to_complete,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertActivityParam {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub legs_in_order: bool,
    pub min_rank: Option<String>,
    pub reward_points: i64,
    pub is_active: bool,
    pub legs: Vec<ActivityLegDto>,
}

impl UpsertActivityParam {
    pub fn from_dto(dto: UpsertActivityDto) -> Self {
        let upper = |v: Option<String>| {
            v.map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
        };
        let legs = dto
            .legs
            .into_iter()
            .enumerate()
            .map(|(index, leg)| ActivityLegDto {
                id: None,
                leg_order: index as i32 + 1,
                departure_icao: upper(leg.departure_icao),
                arrival_icao: upper(leg.arrival_icao),
                flight_number: upper(leg.flight_number),
                aircraft_types: leg.aircraft_types,
            })
            .collect();

        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            kind: dto.kind,
            start_date: dto.start_date,
            end_date: dto.end_date,
            legs_in_order: dto.legs_in_order,
            min_rank: dto.min_rank,
            reward_points: dto.reward_points,
            is_active: dto.is_active,
            legs,
        }
    }
}
