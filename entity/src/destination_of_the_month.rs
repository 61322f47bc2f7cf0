use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "destination_of_the_month")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub month: String,
    pub year: i32,
    pub airport_icao: String,
    pub bonus_points: i64,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
