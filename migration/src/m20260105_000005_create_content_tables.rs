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
                    .table(Notam::Table)
                    .if_not_exists()
                    .col(pk_auto(Notam::Id))
                    .col(string(Notam::Title))
                    .col(text(Notam::Content))
                    .col(string(Notam::Kind).default("General"))
                    .col(string_null(Notam::AirportIcao))
                    .col(integer(Notam::Priority).default(0))
                    .col(timestamp_with_time_zone(Notam::EffectiveFrom))
                    .col(timestamp_with_time_zone_null(Notam::EffectiveUntil))
                    .col(boolean(Notam::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Notam::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text(Event::Description))
                    .col(string_null(Event::Banner))
                    .col(string(Event::Kind).default("Fly-In"))
                    .col(timestamp_with_time_zone(Event::StartTime))
                    .col(timestamp_with_time_zone_null(Event::EndTime))
                    .col(text(Event::Airports))
                    .col(integer_null(Event::SlotsAvailable))
                    .col(big_integer(Event::RewardPoints).default(0))
                    .col(boolean(Event::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventBooking::Table)
                    .if_not_exists()
                    .col(pk_auto(EventBooking::Id))
                    .col(integer(EventBooking::EventId))
                    .col(integer(EventBooking::PilotId))
                    .col(string(EventBooking::Status).default("Booked"))
                    .col(integer_null(EventBooking::FlightId))
                    .col(
                        timestamp_with_time_zone(EventBooking::BookedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(EventBooking::AttendedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_booking_event_id")
                            .from(EventBooking::Table, EventBooking::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_booking_pilot_id")
                            .from(EventBooking::Table, EventBooking::PilotId)
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
                    .name("idx_event_booking_event_pilot")
                    .table(EventBooking::Table)
                    .col(EventBooking::EventId)
                    .col(EventBooking::PilotId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(string(Tour::Name))
                    .col(text(Tour::Description))
                    .col(string_null(Tour::Banner))
                    .col(big_integer(Tour::RewardCredits).default(0))
                    .col(string(Tour::Difficulty).default("medium"))
                    .col(boolean(Tour::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Tour::StartDate))
                    .col(timestamp_with_time_zone_null(Tour::EndDate))
                    .col(
                        timestamp_with_time_zone(Tour::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourLeg::Table)
                    .if_not_exists()
                    .col(pk_auto(TourLeg::Id))
                    .col(integer(TourLeg::TourId))
                    .col(integer(TourLeg::LegNumber))
                    .col(string(TourLeg::DepartureIcao))
                    .col(string(TourLeg::ArrivalIcao))
                    .col(double(TourLeg::DistanceNm).default(0.0))
                    .col(text(TourLeg::AircraftTypes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_leg_tour_id")
                            .from(TourLeg::Table, TourLeg::TourId)
                            .to(Tour::Table, Tour::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TourProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(TourProgress::Id))
                    .col(integer(TourProgress::TourId))
                    .col(integer(TourProgress::PilotId))
                    .col(integer(TourProgress::CurrentLeg).default(1))
                    .col(string(TourProgress::Status).default("InProgress"))
                    .col(
                        timestamp_with_time_zone(TourProgress::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(TourProgress::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_progress_tour_id")
                            .from(TourProgress::Table, TourProgress::TourId)
                            .to(Tour::Table, Tour::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_progress_pilot_id")
                            .from(TourProgress::Table, TourProgress::PilotId)
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
                    .name("idx_tour_progress_tour_pilot")
                    .table(TourProgress::Table)
                    .col(TourProgress::TourId)
                    .col(TourProgress::PilotId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(string(Activity::Title))
                    .col(text(Activity::Description))
                    .col(string(Activity::Kind).default("Event"))
                    .col(timestamp_with_time_zone_null(Activity::StartDate))
                    .col(timestamp_with_time_zone_null(Activity::EndDate))
                    .col(boolean(Activity::LegsInOrder).default(false))
                    .col(string_null(Activity::MinRank))
                    .col(big_integer(Activity::RewardPoints).default(0))
                    .col(integer(Activity::TotalPilotsComplete).default(0))
                    .col(string_null(Activity::FirstPilotToComplete))
                    .col(boolean(Activity::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Activity::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActivityLeg::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityLeg::Id))
                    .col(integer(ActivityLeg::ActivityId))
                    .col(integer(ActivityLeg::LegOrder))
                    .col(string_null(ActivityLeg::DepartureIcao))
                    .col(string_null(ActivityLeg::ArrivalIcao))
                    .col(string_null(ActivityLeg::FlightNumber))
                    .col(text(ActivityLeg::AircraftTypes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_leg_activity_id")
                            .from(ActivityLeg::Table, ActivityLeg::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActivityProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityProgress::Id))
                    .col(integer(ActivityProgress::ActivityId))
                    .col(integer(ActivityProgress::PilotId))
                    .col(text(ActivityProgress::CompletedLegIds))
                    .col(integer(ActivityProgress::LegsComplete).default(0))
                    .col(double(ActivityProgress::PercentComplete).default(0.0))
                    .col(
                        timestamp_with_time_zone(ActivityProgress::StartDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(ActivityProgress::DateComplete))
                    .col(timestamp_with_time_zone_null(
                        ActivityProgress::LastLegFlownDate,
                    ))
                    .col(integer_null(ActivityProgress::DaysToComplete))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_progress_activity_id")
                            .from(ActivityProgress::Table, ActivityProgress::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_progress_pilot_id")
                            .from(ActivityProgress::Table, ActivityProgress::PilotId)
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
                    .name("idx_activity_progress_activity_pilot")
                    .table(ActivityProgress::Table)
                    .col(ActivityProgress::ActivityId)
                    .col(ActivityProgress::PilotId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DestinationOfTheMonth::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationOfTheMonth::Id))
                    .col(string(DestinationOfTheMonth::Month))
                    .col(integer(DestinationOfTheMonth::Year))
                    .col(string(DestinationOfTheMonth::AirportIcao))
                    .col(big_integer(DestinationOfTheMonth::BonusPoints).default(0))
                    .col(string_null(DestinationOfTheMonth::Description))
                    .col(boolean(DestinationOfTheMonth::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(DestinationOfTheMonth::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dotm_month_year")
                    .table(DestinationOfTheMonth::Table)
                    .col(DestinationOfTheMonth::Month)
                    .col(DestinationOfTheMonth::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer(Notification::PilotId))
                    .col(string(Notification::Kind))
                    .col(string(Notification::Title))
                    .col(text(Notification::Message))
                    .col(string_null(Notification::Link))
                    .col(boolean(Notification::Read).default(false))
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_pilot_id")
                            .from(Notification::Table, Notification::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DestinationOfTheMonth::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivityProgress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivityLeg::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TourProgress::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TourLeg::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EventBooking::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notam {
    Table,
    Id,
    Title,
    Content,
    Kind,
    AirportIcao,
    Priority,
    EffectiveFrom,
    EffectiveUntil,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Banner,
    Kind,
    StartTime,
    EndTime,
    Airports,
    SlotsAvailable,
    RewardPoints,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum EventBooking {
    Table,
    Id,
    EventId,
    PilotId,
    Status,
    FlightId,
    BookedAt,
    AttendedAt,
}

#[derive(DeriveIden)]
pub enum Tour {
    Table,
    Id,
    Name,
    Description,
    Banner,
    RewardCredits,
    Difficulty,
    IsActive,
    StartDate,
    EndDate,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum TourLeg {
    Table,
    Id,
    TourId,
    LegNumber,
    DepartureIcao,
    ArrivalIcao,
    DistanceNm,
    AircraftTypes,
}

#[derive(DeriveIden)]
pub enum TourProgress {
    Table,
    Id,
    TourId,
    PilotId,
    CurrentLeg,
    Status,
    StartedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    Title,
    Description,
    Kind,
    StartDate,
    EndDate,
    LegsInOrder,
    MinRank,
    RewardPoints,
    TotalPilotsComplete,
    FirstPilotToComplete,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum ActivityLeg {
    Table,
    Id,
    ActivityId,
    LegOrder,
    DepartureIcao,
    ArrivalIcao,
    FlightNumber,
    AircraftTypes,
}

#[derive(DeriveIden)]
pub enum ActivityProgress {
    Table,
    Id,
    ActivityId,
    PilotId,
    CompletedLegIds,
    LegsComplete,
    PercentComplete,
    StartDate,
    DateComplete,
    LastLegFlownDate,
    DaysToComplete,
}

#[derive(DeriveIden)]
pub enum DestinationOfTheMonth {
    Table,
    Id,
    Month,
    Year,
    AirportIcao,
    BonusPoints,
    Description,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Notification {
    Table,
    Id,
    PilotId,
    Kind,
    Title,
    Message,
    Link,
    Read,
    CreatedAt,
}
