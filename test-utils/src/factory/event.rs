//! Event factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    airports: Vec<String>,
    slots_available: Option<i32>,
    is_active: bool,
}

impl<'a> EventFactory<'a> {
    /// Creates a new factory for an active event that started an hour ago and runs
    /// for another five hours, open to every airport.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            title: format!("Event {}", next_id()),
            start_time: now - Duration::hours(1),
            end_time: Some(now + Duration::hours(5)),
            airports: Vec::new(),
            slots_available: None,
            is_active: true,
        }
    }

    pub fn window(mut self, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn airport(mut self, icao: impl Into<String>) -> Self {
        self.airports.push(icao.into());
        self
    }

    pub fn slots(mut self, slots: i32) -> Self {
        self.slots_available = Some(slots);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let airports =
            serde_json::to_string(&self.airports).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            banner: ActiveValue::Set(None),
            kind: ActiveValue::Set("Fly-In".to_string()),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            airports: ActiveValue::Set(airports),
            slots_available: ActiveValue::Set(self.slots_available),
            reward_points: ActiveValue::Set(0),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active event running now.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
