use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub banner: Option<String>,
    pub kind: String,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text")]
    pub airports: String,
    pub slots_available: Option<i32>,
    pub reward_points: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
