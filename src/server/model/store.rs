use crate::model::economy::{StoreItemDto, UpsertStoreItemDto};

/// Stock quantity meaning an item never runs out.
pub const UNLIMITED_STOCK: i32 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub stock_quantity: i32,
}

impl StoreItem {
    pub fn from_entity(entity: entity::store_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            category: entity.category,
            image_url: entity.image_url,
            is_active: entity.is_active,
            stock_quantity: entity.stock_quantity,
        }
    }

    pub fn is_limited(&self) -> bool {
        self.stock_quantity != UNLIMITED_STOCK
    }

    pub fn into_dto(self) -> StoreItemDto {
        StoreItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
            is_active: self.is_active,
            stock_quantity: self.stock_quantity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertStoreItemParam {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub stock_quantity: i32,
}

impl UpsertStoreItemParam {
    pub fn from_dto(dto: UpsertStoreItemDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            price: dto.price,
            category: dto.category,
            image_url: dto.image_url,
            is_active: dto.is_active,
            stock_quantity: dto.stock_quantity,
        }
    }
}
