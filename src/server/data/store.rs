use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::store::{StoreItem, UpsertStoreItemParam};

/// Repository for store items and the purchases made from them.
pub struct StoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active items, cheapest first.
    pub async fn get_active(&self) -> Result<Vec<StoreItem>, DbErr> {
        let entities = entity::prelude::StoreItem::find()
            .filter(entity::store_item::Column::IsActive.eq(true))
            .order_by_asc(entity::store_item::Column::Price)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StoreItem::from_entity).collect())
    }

    /// Every item, including inactive ones, for administration.
    pub async fn get_all(&self) -> Result<Vec<StoreItem>, DbErr> {
        let entities = entity::prelude::StoreItem::find()
            .order_by_asc(entity::store_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StoreItem::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<StoreItem>, DbErr> {
        let entity = entity::prelude::StoreItem::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(StoreItem::from_entity))
    }

    pub async fn create(&self, param: UpsertStoreItemParam) -> Result<StoreItem, DbErr> {
        let entity = entity::store_item::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            price: ActiveValue::Set(param.price),
            category: ActiveValue::Set(param.category),
            image_url: ActiveValue::Set(param.image_url),
            is_active: ActiveValue::Set(param.is_active),
            stock_quantity: ActiveValue::Set(param.stock_quantity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StoreItem::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpsertStoreItemParam,
    ) -> Result<Option<StoreItem>, DbErr> {
        let Some(model) = entity::prelude::StoreItem::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::store_item::ActiveModel = model.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.price = ActiveValue::Set(param.price);
        active.category = ActiveValue::Set(param.category);
        active.image_url = ActiveValue::Set(param.image_url);
        active.is_active = ActiveValue::Set(param.is_active);
        active.stock_quantity = ActiveValue::Set(param.stock_quantity);

        Ok(Some(StoreItem::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StoreItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Decrements the stock of a limited item by one.
    pub async fn decrement_stock(&self, item: &StoreItem) -> Result<(), DbErr> {
        if !item.is_limited() {
            return Ok(());
        }

        entity::prelude::StoreItem::update_many()
            .filter(entity::store_item::Column::Id.eq(item.id))
            .col_expr(
                entity::store_item::Column::StockQuantity,
                sea_orm::sea_query::Expr::value((item.stock_quantity - 1).max(0)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Records an item in a pilot's inventory at the price paid.
    pub async fn record_purchase(&self, pilot_id: i32, item: &StoreItem) -> Result<(), DbErr> {
        entity::purchase::ActiveModel {
            pilot_id: ActiveValue::Set(pilot_id),
            item_id: ActiveValue::Set(item.id),
            price: ActiveValue::Set(item.price),
            purchased_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
