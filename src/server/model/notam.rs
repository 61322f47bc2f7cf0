use chrono::{DateTime, Utc};

use crate::model::content::{NotamDto, UpsertNotamDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Notam {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub kind: String,
    pub airport_icao: Option<String>,
    pub priority: i32,
    pub effective_from: DateTime<Utc>,
    pub effective_until: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Notam {
    pub fn from_entity(entity: entity::notam::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            kind: entity.kind,
            airport_icao: entity.airport_icao,
            priority: entity.priority,
            effective_from: entity.effective_from,
            effective_until: entity.effective_until,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotamDto {
        NotamDto {
            id: self.id,
            title: self.title,
            content: self.content,
            kind: self.kind,
            airport_icao: self.airport_icao,
            priority: self.priority,
            effective_from: self.effective_from,
            effective_until: self.effective_until,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertNotamParam {
    pub title: String,
    pub content: String,
    pub kind: String,
    pub airport_icao: Option<String>,
    pub priority: i32,
    pub effective_from: DateTime<Utc>,
    pub effective_until: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl UpsertNotamParam {
    pub fn from_dto(dto: UpsertNotamDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            content: dto.content,
            kind: dto.kind,
            airport_icao: dto.airport_icao.map(|icao| icao.trim().to_uppercase()),
            priority: dto.priority,
            effective_from: dto.effective_from.unwrap_or_else(Utc::now),
            effective_until: dto.effective_until,
            is_active: dto.is_active,
        }
    }
}
