use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pilot_id: i32,
    pub item_id: i32,
    pub price: i64,
    pub purchased_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pilot::Entity",
        from = "Column::PilotId",
        to = "super::pilot::Column::Id",
        on_delete = "Cascade"
    )]
    Pilot,
    #[sea_orm(
        belongs_to = "super::store_item::Entity",
        from = "Column::ItemId",
        to = "super::store_item::Column::Id",
        on_delete = "Cascade"
    )]
    StoreItem,
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::store_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
