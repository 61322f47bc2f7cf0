use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::rank::{Rank, UpsertRankParam};

pub struct RankRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all ranks ordered from most junior to most senior.
    pub async fn get_all(&self) -> Result<Vec<Rank>, DbErr> {
        let entities = entity::prelude::Rank::find()
            .order_by_asc(entity::rank::Column::SortOrder)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rank::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rank>, DbErr> {
        let entity = entity::prelude::Rank::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Rank::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Rank>, DbErr> {
        let entity = entity::prelude::Rank::find()
            .filter(entity::rank::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Rank::from_entity))
    }

    pub async fn create(&self, param: UpsertRankParam) -> Result<Rank, DbErr> {
        let allowed = serde_json::to_string(&param.allowed_aircraft)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let entity = entity::rank::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            requirement_hours: ActiveValue::Set(param.requirement_hours),
            requirement_flights: ActiveValue::Set(param.requirement_flights),
            auto_promote: ActiveValue::Set(param.auto_promote),
            allowed_aircraft: ActiveValue::Set(allowed),
            image_url: ActiveValue::Set(param.image_url),
            sort_order: ActiveValue::Set(param.order),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rank::from_entity(entity))
    }

    /// Replaces every column of a rank.
    ///
    /// # Returns
    /// - `Ok(Some(Rank))` - Updated rank
    /// - `Ok(None)` - No rank with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpsertRankParam) -> Result<Option<Rank>, DbErr> {
        let Some(model) = entity::prelude::Rank::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let allowed = serde_json::to_string(&param.allowed_aircraft)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let mut active: entity::rank::ActiveModel = model.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.requirement_hours = ActiveValue::Set(param.requirement_hours);
        active.requirement_flights = ActiveValue::Set(param.requirement_flights);
        active.auto_promote = ActiveValue::Set(param.auto_promote);
        active.allowed_aircraft = ActiveValue::Set(allowed);
        active.image_url = ActiveValue::Set(param.image_url);
        active.sort_order = ActiveValue::Set(param.order);

        Ok(Some(Rank::from_entity(active.update(self.db).await?)))
    }

    /// Deletes a rank, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rank::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
