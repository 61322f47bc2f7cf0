use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::dotm::{Dotm, UpsertDotmParam};

/// Repository for destinations of the month.
pub struct DotmRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DotmRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The most recently created active destination, if any.
    pub async fn find_active(&self) -> Result<Option<Dotm>, DbErr> {
        let entity = entity::prelude::DestinationOfTheMonth::find()
            .filter(entity::destination_of_the_month::Column::IsActive.eq(true))
            .order_by_desc(entity::destination_of_the_month::Column::CreatedAt)
            .order_by_desc(entity::destination_of_the_month::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Dotm::from_entity))
    }

    /// All destinations, newest period first.
    pub async fn get_all(&self) -> Result<Vec<Dotm>, DbErr> {
        let entities = entity::prelude::DestinationOfTheMonth::find()
            .order_by_desc(entity::destination_of_the_month::Column::Year)
            .order_by_desc(entity::destination_of_the_month::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dotm::from_entity).collect())
    }

    pub async fn create(&self, param: UpsertDotmParam) -> Result<Dotm, DbErr> {
        let entity = entity::destination_of_the_month::ActiveModel {
            month: ActiveValue::Set(param.month),
            year: ActiveValue::Set(param.year),
            airport_icao: ActiveValue::Set(param.airport_icao),
            bonus_points: ActiveValue::Set(param.bonus_points),
            description: ActiveValue::Set(param.description),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dotm::from_entity(entity))
    }

    pub async fn update(&self, id: i32, param: UpsertDotmParam) -> Result<Option<Dotm>, DbErr> {
        let Some(model) = entity::prelude::DestinationOfTheMonth::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::destination_of_the_month::ActiveModel = model.into();
        active.month = ActiveValue::Set(param.month);
        active.year = ActiveValue::Set(param.year);
        active.airport_icao = ActiveValue::Set(param.airport_icao);
        active.bonus_points = ActiveValue::Set(param.bonus_points);
        active.description = ActiveValue::Set(param.description);
        active.is_active = ActiveValue::Set(param.is_active);

        Ok(Some(Dotm::from_entity(active.update(self.db).await?)))
    }

    pub async fn deactivate(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DestinationOfTheMonth::update_many()
            .filter(entity::destination_of_the_month::Column::Id.eq(id))
            .col_expr(
                entity::destination_of_the_month::Column::IsActive,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DestinationOfTheMonth::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
