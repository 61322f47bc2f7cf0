//! Store item factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StoreItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i64,
    is_active: bool,
    stock_quantity: i32,
}

impl<'a> StoreItemFactory<'a> {
    /// Creates a new factory for an active item priced at 1000 with unlimited stock.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Item {}", next_id()),
            price: 1000,
            is_active: true,
            stock_quantity: -1,
        }
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets a limited stock; `-1` means unlimited.
    pub fn stock(mut self, quantity: i32) -> Self {
        self.stock_quantity = quantity;
        self
    }

    pub async fn build(self) -> Result<entity::store_item::Model, DbErr> {
        entity::store_item::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            price: ActiveValue::Set(self.price),
            category: ActiveValue::Set("Livery".to_string()),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            stock_quantity: ActiveValue::Set(self.stock_quantity),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active store item with the given price.
pub async fn create_store_item(
    db: &DatabaseConnection,
    price: i64,
) -> Result<entity::store_item::Model, DbErr> {
    StoreItemFactory::new(db).price(price).build().await
}
