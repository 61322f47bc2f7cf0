use chrono::{DateTime, Datelike, Utc};

use crate::model::content::{DotmDto, UpsertDotmDto};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of the month of `at`.
pub fn month_name(at: DateTime<Utc>) -> &'static str {
    MONTH_NAMES[at.month0() as usize]
}

/// Destination of the month: an airport earning bonus credits for the calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct Dotm {
    pub id: i32,
    pub month: String,
    pub year: i32,
    pub airport_icao: String,
    pub bonus_points: i64,
    pub description: Option<String>,
    pub is_active: bool,
}

impl Dotm {
    pub fn from_entity(entity: entity::destination_of_the_month::Model) -> Self {
        Self {
            id: entity.id,
            month: entity.month,
            year: entity.year,
            airport_icao: entity.airport_icao,
            bonus_points: entity.bonus_points,
            description: entity.description,
            is_active: entity.is_active,
        }
    }

    /// Whether `at` falls in this destination's month.
    pub fn is_current(&self, at: DateTime<Utc>) -> bool {
        self.month == month_name(at) && self.year == at.year()
    }

    pub fn into_dto(self) -> DotmDto {
        DotmDto {
            id: self.id,
            month: self.month,
            year: self.year,
            airport_icao: self.airport_icao,
            bonus_points: self.bonus_points,
            description: self.description,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertDotmParam {
    pub month: String,
    pub year: i32,
    pub airport_icao: String,
    pub bonus_points: i64,
    pub description: Option<String>,
    pub is_active: bool,
}

impl UpsertDotmParam {
    pub fn from_dto(dto: UpsertDotmDto) -> Self {
        Self {
            month: dto.month.trim().to_string(),
            year: dto.year,
            airport_icao: dto.airport_icao.trim().to_uppercase(),
            bonus_points: dto.bonus_points,
            description: dto.description,
            is_active: dto.is_active,
        }
    }
}
