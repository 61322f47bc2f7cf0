use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(Aircraft::Id))
                    .col(string_uniq(Aircraft::Registration))
                    .col(string(Aircraft::AircraftType))
                    .col(string(Aircraft::Name))
                    .col(string(Aircraft::AirlineCode))
                    .col(string(Aircraft::CurrentLocation))
                    .col(string(Aircraft::Status).default("Available"))
                    .col(double(Aircraft::Condition).default(100.0))
                    .col(double(Aircraft::TotalHours).default(0.0))
                    .col(integer(Aircraft::FlightCount).default(0))
                    .col(boolean(Aircraft::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Aircraft::LastService))
                    .col(string_null(Aircraft::GroundedReason))
                    .col(text(Aircraft::DamageLog))
                    .col(timestamp_with_time_zone_null(Aircraft::RepairUntil))
                    .col(timestamp_with_time_zone_null(Aircraft::DamagedAt))
                    .col(string_null(Aircraft::DamagedByPilot))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aircraft_type_location")
                    .table(Aircraft::Table)
                    .col(Aircraft::AircraftType)
                    .col(Aircraft::CurrentLocation)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MaintenanceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceLog::Id))
                    .col(string(MaintenanceLog::AircraftRegistration))
                    .col(string(MaintenanceLog::Kind))
                    .col(double(MaintenanceLog::HealthBefore))
                    .col(double(MaintenanceLog::HealthAfter))
                    .col(big_integer(MaintenanceLog::Cost).default(0))
                    .col(string(MaintenanceLog::Description))
                    .col(integer_null(MaintenanceLog::FlightId))
                    .col(string_null(MaintenanceLog::PilotId))
                    .col(string_null(MaintenanceLog::PerformedBy))
                    .col(
                        timestamp_with_time_zone(MaintenanceLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    Registration,
    AircraftType,
    Name,
    AirlineCode,
    CurrentLocation,
    Status,
    Condition,
    TotalHours,
    FlightCount,
    IsActive,
    LastService,
    GroundedReason,
    DamageLog,
    RepairUntil,
    DamagedAt,
    DamagedByPilot,
}

#[derive(DeriveIden)]
pub enum MaintenanceLog {
    Table,
    Id,
    AircraftRegistration,
    Kind,
    HealthBefore,
    HealthAfter,
    Cost,
    Description,
    FlightId,
    PilotId,
    PerformedBy,
    CreatedAt,
}
