use crate::{
    model::pilot::{RankDto, UpsertRankDto},
    server::util::parse::json_list,
};

/// Career rank with its promotion requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct Rank {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub requirement_hours: f64,
    pub requirement_flights: i32,
    pub auto_promote: bool,
    pub allowed_aircraft: Vec<String>,
    pub image_url: Option<String>,
    /// Position in the career ladder; higher is more senior.
    pub order: i32,
}

impl Rank {
    pub fn from_entity(entity: entity::rank::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            requirement_hours: entity.requirement_hours,
            requirement_flights: entity.requirement_flights,
            auto_promote: entity.auto_promote,
            allowed_aircraft: json_list(&entity.allowed_aircraft),
            image_url: entity.image_url,
            order: entity.sort_order,
        }
    }

    /// Whether a pilot with the given hours and flights meets this rank's requirements.
    pub fn is_met_by(&self, hours: f64, flights: i32) -> bool {
        hours >= self.requirement_hours && flights >= self.requirement_flights
    }

    pub fn into_dto(self) -> RankDto {
        RankDto {
            id: self.id,
            name: self.name,
            description: self.description,
            requirement_hours: self.requirement_hours,
            requirement_flights: self.requirement_flights,
            auto_promote: self.auto_promote,
            allowed_aircraft: self.allowed_aircraft,
            image_url: self.image_url,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertRankParam {
    pub name: String,
    pub description: Option<String>,
    pub requirement_hours: f64,
    pub requirement_flights: i32,
    pub auto_promote: bool,
    pub allowed_aircraft: Vec<String>,
    pub image_url: Option<String>,
    pub order: i32,
}

impl UpsertRankParam {
    pub fn from_dto(dto: UpsertRankDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            requirement_hours: dto.requirement_hours,
            requirement_flights: dto.requirement_flights,
            auto_promote: dto.auto_promote,
            allowed_aircraft: dto
                .allowed_aircraft
                .into_iter()
                .map(|t| t.trim().to_uppercase())
                .collect(),
            image_url: dto.image_url,
            order: dto.order,
        }
    }
}
