//! Rank factory for creating promotion ladder entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RankFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    requirement_hours: f64,
    requirement_flights: i32,
    auto_promote: bool,
    sort_order: i32,
}

impl<'a> RankFactory<'a> {
    /// Creates a new RankFactory named `"Rank {id}"` with no requirements.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Rank {}", id),
            requirement_hours: 0.0,
            requirement_flights: 0,
            auto_promote: true,
            sort_order: id as i32,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn requirements(mut self, hours: f64, flights: i32) -> Self {
        self.requirement_hours = hours;
        self.requirement_flights = flights;
        self
    }

    pub fn auto_promote(mut self, auto_promote: bool) -> Self {
        self.auto_promote = auto_promote;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.sort_order = order;
        self
    }

    pub async fn build(self) -> Result<entity::rank::Model, DbErr> {
        entity::rank::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            requirement_hours: ActiveValue::Set(self.requirement_hours),
            requirement_flights: ActiveValue::Set(self.requirement_flights),
            auto_promote: ActiveValue::Set(self.auto_promote),
            allowed_aircraft: ActiveValue::Set("[]".to_string()),
            image_url: ActiveValue::Set(None),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rank with the given name, hour requirement and order.
pub async fn create_rank(
    db: &DatabaseConnection,
    name: &str,
    hours: f64,
    order: i32,
) -> Result<entity::rank::Model, DbErr> {
    RankFactory::new(db)
        .name(name)
        .requirements(hours, 0)
        .order(order)
        .build()
        .await
}
