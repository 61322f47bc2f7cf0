use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "airline_finance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub balance: i64,
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub last_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
