pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_pilot_tables;
mod m20260105_000002_create_fleet_tables;
mod m20260105_000003_create_flight_tables;
mod m20260105_000004_create_finance_tables;
mod m20260105_000005_create_content_tables;
mod m20260105_000006_create_staff_tables;
mod m20260105_000007_create_auth_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_pilot_tables::Migration),
            Box::new(m20260105_000002_create_fleet_tables::Migration),
            Box::new(m20260105_000003_create_flight_tables::Migration),
            Box::new(m20260105_000004_create_finance_tables::Migration),
            Box::new(m20260105_000005_create_content_tables::Migration),
            Box::new(m20260105_000006_create_staff_tables::Migration),
            Box::new(m20260105_000007_create_auth_tables::Migration),
        ]
    }
}
