use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notam::{Notam, UpsertNotamParam};

pub struct NotamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active NOTAMs, highest priority first then newest.
    ///
    /// # Arguments
    /// - `kind` - Optional NOTAM type filter
    /// - `limit` - Maximum number of entries
    pub async fn get_active(&self, kind: Option<&str>, limit: u64) -> Result<Vec<Notam>, DbErr> {
        let mut query =
            entity::prelude::Notam::find().filter(entity::notam::Column::IsActive.eq(true));

        if let Some(kind) = kind {
            query = query.filter(entity::notam::Column::Kind.eq(kind));
        }

        let entities = query
            .order_by_desc(entity::notam::Column::Priority)
            .order_by_desc(entity::notam::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notam::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Notam>, DbErr> {
        let entities = entity::prelude::Notam::find()
            .order_by_desc(entity::notam::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notam::from_entity).collect())
    }

    pub async fn create(&self, param: UpsertNotamParam) -> Result<Notam, DbErr> {
        let entity = entity::notam::ActiveModel {
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            kind: ActiveValue::Set(param.kind),
            airport_icao: ActiveValue::Set(param.airport_icao),
            priority: ActiveValue::Set(param.priority),
            effective_from: ActiveValue::Set(param.effective_from),
            effective_until: ActiveValue::Set(param.effective_until),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notam::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: UpsertNotamParam) -> Result<Option<Notam>, DbErr> {
        let Some(model) = entity::prelude::Notam::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::notam::ActiveModel = model.into();
        active.title = ActiveValue::Set(param.title);
        active.content = ActiveValue::Set(param.content);
        active.kind = ActiveValue::Set(param.kind);
        active.airport_icao = ActiveValue::Set(param.airport_icao);
        active.priority = ActiveValue::Set(param.priority);
        active.effective_from = ActiveValue::Set(param.effective_from);
        active.effective_until = ActiveValue::Set(param.effective_until);
        active.is_active = ActiveValue::Set(param.is_active);

        Ok(Some(Notam::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notam::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
