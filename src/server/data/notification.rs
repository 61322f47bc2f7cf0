use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{CreateNotificationParam, Notification};

/// Repository for in-portal pilot notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            pilot_id: ActiveValue::Set(param.pilot_id),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            link: ActiveValue::Set(param.link),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// A pilot's notifications, newest first.
    pub async fn for_pilot(&self, pilot_id: i32, limit: u64) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::PilotId.eq(pilot_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks notifications read. An empty id list marks all of the pilot's notifications.
    ///
    /// Ids belonging to other pilots are ignored.
    pub async fn mark_read(&self, pilot_id: i32, ids: &[i32]) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::PilotId.eq(pilot_id))
            .filter(entity::notification::Column::Read.eq(false));

        if !ids.is_empty() {
            query = query.filter(entity::notification::Column::Id.is_in(ids.to_vec()));
        }

        let result = query
            .col_expr(
                entity::notification::Column::Read,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
