use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_pilot_tables::Pilot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(pk_auto(Bid::Id))
                    .col(integer(Bid::PilotId))
                    .col(string(Bid::PilotName))
                    .col(string(Bid::Callsign))
                    .col(string(Bid::FlightNumber))
                    .col(string(Bid::DepartureIcao))
                    .col(string(Bid::ArrivalIcao))
                    .col(string(Bid::AircraftType))
                    .col(string_null(Bid::AircraftRegistration))
                    .col(text_null(Bid::Route))
                    .col(integer_null(Bid::EstimatedFlightTime))
                    .col(integer_null(Bid::Pax))
                    .col(integer_null(Bid::Cargo))
                    .col(double_null(Bid::PlannedFuel))
                    .col(integer_null(Bid::RotationSpeed))
                    .col(string_null(Bid::SimbriefOfpId))
                    .col(integer_null(Bid::ActivityId))
                    .col(string(Bid::Status).default("Active"))
                    .col(
                        timestamp_with_time_zone(Bid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone(Bid::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_pilot_id")
                            .from(Bid::Table, Bid::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bid_pilot_status")
                    .table(Bid::Table)
                    .col(Bid::PilotId)
                    .col(Bid::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActiveFlight::Table)
                    .if_not_exists()
                    .col(pk_auto(ActiveFlight::Id))
                    .col(integer(ActiveFlight::PilotId))
                    .col(string(ActiveFlight::PilotName))
                    .col(string(ActiveFlight::Callsign))
                    .col(string(ActiveFlight::DepartureIcao))
                    .col(string(ActiveFlight::ArrivalIcao))
                    .col(string(ActiveFlight::AircraftType))
                    .col(string_null(ActiveFlight::AircraftRegistration))
                    .col(double(ActiveFlight::Latitude).default(0.0))
                    .col(double(ActiveFlight::Longitude).default(0.0))
                    .col(double(ActiveFlight::Altitude).default(0.0))
                    .col(double(ActiveFlight::Heading).default(0.0))
                    .col(double(ActiveFlight::GroundSpeed).default(0.0))
                    .col(double(ActiveFlight::Ias).default(0.0))
                    .col(double(ActiveFlight::VerticalSpeed).default(0.0))
                    .col(string(ActiveFlight::Phase).default("Preflight"))
                    .col(double(ActiveFlight::Fuel).default(0.0))
                    .col(double(ActiveFlight::GForce).default(1.0))
                    .col(double(ActiveFlight::ComfortScore).default(100.0))
                    .col(string(ActiveFlight::Status).default("Active"))
                    .col(boolean(ActiveFlight::TakeoffNotified).default(false))
                    .col(
                        timestamp_with_time_zone(ActiveFlight::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ActiveFlight::LastUpdate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_active_flight_pilot_id")
                            .from(ActiveFlight::Table, ActiveFlight::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_active_flight_last_update")
                    .table(ActiveFlight::Table)
                    .col(ActiveFlight::LastUpdate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(integer(Flight::PilotId))
                    .col(string(Flight::PilotName))
                    .col(string(Flight::FlightNumber))
                    .col(string(Flight::Callsign))
                    .col(string(Flight::DepartureIcao))
                    .col(string(Flight::ArrivalIcao))
                    .col(string_null(Flight::AlternateIcao))
                    .col(text_null(Flight::Route))
                    .col(string(Flight::AircraftType))
                    .col(string_null(Flight::AircraftRegistration))
                    .col(integer(Flight::FlightTime).default(0))
                    .col(double(Flight::FuelUsed).default(0.0))
                    .col(double(Flight::Distance).default(0.0))
                    .col(double(Flight::LandingRate).default(0.0))
                    .col(string(Flight::LandingGrade))
                    .col(double(Flight::MaxGForce).default(1.0))
                    .col(integer(Flight::Pax).default(0))
                    .col(integer(Flight::Cargo).default(0))
                    .col(integer(Flight::Score).default(100))
                    .col(text(Flight::Deductions))
                    .col(double(Flight::ComfortScore).default(100.0))
                    .col(big_integer(Flight::RevenuePassenger).default(0))
                    .col(big_integer(Flight::RevenueCargo).default(0))
                    .col(big_integer(Flight::ExpenseFuel).default(0))
                    .col(big_integer(Flight::ExpenseAirport).default(0))
                    .col(big_integer(Flight::ExpensePilot).default(0))
                    .col(big_integer(Flight::ExpenseMaintenance).default(0))
                    .col(big_integer(Flight::RealProfit).default(0))
                    .col(integer(Flight::PassengerRating).default(5))
                    .col(string_null(Flight::PassengerReview))
                    .col(big_integer(Flight::CreditsEarned).default(0))
                    .col(text(Flight::CreditsBreakdown))
                    .col(integer(Flight::ApprovedStatus).default(0))
                    .col(text_null(Flight::Comments))
                    .col(text_null(Flight::AdminComments))
                    .col(string_null(Flight::AcarsVersion))
                    .col(boolean(Flight::IsManual).default(false))
                    .col(integer_null(Flight::EventId))
                    .col(
                        timestamp_with_time_zone(Flight::SubmittedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Flight::ReviewedAt))
                    .col(string_null(Flight::ReviewedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_pilot_id")
                            .from(Flight::Table, Flight::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_submitted_at")
                    .table(Flight::Table)
                    .col(Flight::SubmittedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActiveFlight::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bid {
    Table,
    Id,
    PilotId,
    PilotName,
    Callsign,
    FlightNumber,
    DepartureIcao,
    ArrivalIcao,
    AircraftType,
    AircraftRegistration,
    Route,
    EstimatedFlightTime,
    Pax,
    Cargo,
    PlannedFuel,
    RotationSpeed,
    SimbriefOfpId,
    ActivityId,
    Status,
    CreatedAt,
    ExpiresAt,
}

#[derive(DeriveIden)]
pub enum ActiveFlight {
    Table,
    Id,
    PilotId,
    PilotName,
    Callsign,
    DepartureIcao,
    ArrivalIcao,
    AircraftType,
    AircraftRegistration,
    Latitude,
    Longitude,
    Altitude,
    Heading,
    GroundSpeed,
    Ias,
    VerticalSpeed,
    Phase,
    Fuel,
    GForce,
    ComfortScore,
    Status,
    TakeoffNotified,
    StartedAt,
    LastUpdate,
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    PilotId,
    PilotName,
    FlightNumber,
    Callsign,
    DepartureIcao,
    ArrivalIcao,
    AlternateIcao,
    Route,
    AircraftType,
    AircraftRegistration,
    FlightTime,
    FuelUsed,
    Distance,
    LandingRate,
    LandingGrade,
    MaxGForce,
    Pax,
    Cargo,
    Score,
    Deductions,
    ComfortScore,
    RevenuePassenger,
    RevenueCargo,
    ExpenseFuel,
    ExpenseAirport,
    ExpensePilot,
    ExpenseMaintenance,
    RealProfit,
    PassengerRating,
    PassengerReview,
    CreditsEarned,
    CreditsBreakdown,
    ApprovedStatus,
    Comments,
    AdminComments,
    AcarsVersion,
    IsManual,
    EventId,
    SubmittedAt,
    ReviewedAt,
    ReviewedBy,
}
