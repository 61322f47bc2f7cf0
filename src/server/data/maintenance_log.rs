use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    QuerySelect,
};

use crate::server::model::fleet::{CreateMaintenanceLogParam, MaintenanceLog};

pub struct MaintenanceLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateMaintenanceLogParam) -> Result<MaintenanceLog, DbErr> {
        let entity = entity::maintenance_log::ActiveModel {
            aircraft_registration: ActiveValue::Set(param.aircraft_registration),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            health_before: ActiveValue::Set(param.health_before),
            health_after: ActiveValue::Set(param.health_after),
            cost: ActiveValue::Set(param.cost),
            description: ActiveValue::Set(param.description),
            flight_id: ActiveValue::Set(param.flight_id),
            pilot_id: ActiveValue::Set(param.pilot_id),
            performed_by: ActiveValue::Set(param.performed_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MaintenanceLog::from_entity(entity))
    }

    /// Most recent maintenance entries across the fleet, newest first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<MaintenanceLog>, DbErr> {
        let entities = entity::prelude::MaintenanceLog::find()
            .order_by_desc(entity::maintenance_log::Column::CreatedAt)
            .order_by_desc(entity::maintenance_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MaintenanceLog::from_entity).collect())
    }
}
