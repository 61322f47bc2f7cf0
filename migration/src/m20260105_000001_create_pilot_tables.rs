use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rank::Table)
                    .if_not_exists()
                    .col(pk_auto(Rank::Id))
                    .col(string_uniq(Rank::Name))
                    .col(string_null(Rank::Description))
                    .col(double(Rank::RequirementHours).default(0.0))
                    .col(integer(Rank::RequirementFlights).default(0))
                    .col(boolean(Rank::AutoPromote).default(true))
                    .col(text(Rank::AllowedAircraft))
                    .col(string_null(Rank::ImageUrl))
                    .col(integer(Rank::SortOrder).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pilot::Table)
                    .if_not_exists()
                    .col(pk_auto(Pilot::Id))
                    .col(string_uniq(Pilot::PilotId))
                    .col(string(Pilot::FirstName))
                    .col(string(Pilot::LastName))
                    .col(string_uniq(Pilot::Email))
                    .col(string(Pilot::PasswordHash))
                    .col(string(Pilot::Rank).default("Cadet"))
                    .col(string(Pilot::Status).default("Active"))
                    .col(boolean(Pilot::IsAdmin).default(false))
                    .col(double(Pilot::TotalHours).default(0.0))
                    .col(double(Pilot::TransferHours).default(0.0))
                    .col(integer(Pilot::TotalFlights).default(0))
                    .col(big_integer(Pilot::TotalCredits).default(0))
                    .col(big_integer(Pilot::Balance).default(0))
                    .col(string(Pilot::CurrentLocation).default("OJAI"))
                    .col(string(Pilot::HomeBase).default("OJAI"))
                    .col(string_null(Pilot::SimbriefId))
                    .col(string_null(Pilot::VatsimCid))
                    .col(string_null(Pilot::IvaoVid))
                    .col(text(Pilot::RoutesFlown))
                    .col(timestamp_with_time_zone_null(Pilot::LastFlightDate))
                    .col(timestamp_with_time_zone_null(Pilot::LastActivity))
                    .col(string_null(Pilot::Hwid))
                    .col(string_null(Pilot::BlacklistReason))
                    .col(string_null(Pilot::BlacklistedBy))
                    .col(timestamp_with_time_zone_null(Pilot::BlacklistedAt))
                    .col(
                        timestamp_with_time_zone(Pilot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pilot_status")
                    .table(Pilot::Table)
                    .col(Pilot::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pilot::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rank::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rank {
    Table,
    Id,
    Name,
    Description,
    RequirementHours,
    RequirementFlights,
    AutoPromote,
    AllowedAircraft,
    ImageUrl,
    SortOrder,
}

#[derive(DeriveIden)]
pub enum Pilot {
    Table,
    Id,
    PilotId,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Rank,
    Status,
    IsAdmin,
    TotalHours,
    TransferHours,
    TotalFlights,
    TotalCredits,
    Balance,
    CurrentLocation,
    HomeBase,
    SimbriefId,
    VatsimCid,
    IvaoVid,
    RoutesFlown,
    LastFlightDate,
    LastActivity,
    Hwid,
    BlacklistReason,
    BlacklistedBy,
    BlacklistedAt,
    CreatedAt,
}
