use chrono::{DateTime, Duration, Utc};

use crate::{
    model::content::{EventDto, UpsertEventDto},
    server::util::parse::json_list,
};

/// Window assumed for events that have no explicit end time.
pub const DEFAULT_EVENT_HOURS: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventBookingStatus {
    Booked,
    Attended,
    Cancelled,
}

impl EventBookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Attended => "Attended",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub banner: Option<String>,
    pub kind: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub airports: Vec<String>,
    pub slots_available: Option<i32>,
    pub reward_points: i64,
    pub is_active: bool,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            banner: entity.banner,
            kind: entity.kind,
            start_time: entity.start_time,
            end_time: entity.end_time,
            airports: json_list(&entity.airports),
            slots_available: entity.slots_available,
            reward_points: entity.reward_points,
            is_active: entity.is_active,
        }
    }

    /// End of the event, defaulting to twelve hours after the start.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end_time
            .unwrap_or(self.start_time + Duration::hours(DEFAULT_EVENT_HOURS))
    }

    /// Whether a flight between the given airports, submitted at `at`, counts for this event.
    pub fn matches_flight(&self, departure: &str, arrival: &str, at: DateTime<Utc>) -> bool {
        let in_window = at >= self.start_time && at <= self.effective_end();
        let airports_match = self.airports.is_empty()
            || self
                .airports
                .iter()
                .any(|a| a.eq_ignore_ascii_case(departure) || a.eq_ignore_ascii_case(arrival));

        self.is_active && in_window && airports_match
    }

    pub fn into_dto(self, booking_count: u64, my_booking: Option<String>) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            banner: self.banner,
            kind: self.kind,
            start_time: self.start_time,
            end_time: self.end_time,
            airports: self.airports,
            slots_available: self.slots_available,
            reward_points: self.reward_points,
            is_active: self.is_active,
            booking_count,
            my_booking,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventBooking {
    pub id: i32,
    pub event_id: i32,
    pub pilot_id: i32,
    pub status: String,
    pub flight_id: Option<i32>,
    pub booked_at: DateTime<Utc>,
    pub attended_at: Option<DateTime<Utc>>,
}

impl EventBooking {
    pub fn from_entity(entity: entity::event_booking::Model) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            pilot_id: entity.pilot_id,
            status: entity.status,
            flight_id: entity.flight_id,
            booked_at: entity.booked_at,
            attended_at: entity.attended_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertEventParam {
    pub title: String,
    pub description: String,
    pub banner: Option<String>,
    pub kind: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub airports: Vec<String>,
    pub slots_available: Option<i32>,
    pub reward_points: i64,
    pub is_active: bool,
}

impl UpsertEventParam {
    pub fn from_dto(dto: UpsertEventDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            banner: dto.banner,
            kind: dto.kind,
            start_time: dto.start_time,
            end_time: dto.end_time,
            airports: dto
                .airports
                .into_iter()
                .map(|a| a.trim().to_uppercase())
                .collect(),
            slots_available: dto.slots_available,
            reward_points: dto.reward_points,
            is_active: dto.is_active,
        }
    }
}
