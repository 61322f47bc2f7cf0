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
                    .table(GlobalConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GlobalConfig::Id))
                    .col(string_uniq(GlobalConfig::Key))
                    .col(double(GlobalConfig::FuelTaxPercent))
                    .col(double(GlobalConfig::PenaltyMultiplier))
                    .col(double(GlobalConfig::RepairRatePerPercent))
                    .col(double(GlobalConfig::TicketPricePerNm))
                    .col(double(GlobalConfig::CargoPricePerLbNm))
                    .col(double(GlobalConfig::FuelPricePerLb))
                    .col(double(GlobalConfig::BaseLandingFee))
                    .col(double(GlobalConfig::PilotPayRate))
                    .col(double(GlobalConfig::HardLandingThreshold))
                    .col(double(GlobalConfig::SevereDamageThreshold))
                    .col(double(GlobalConfig::GroundedHealthThreshold))
                    .col(double(GlobalConfig::StoreToAirlinePercent))
                    .col(boolean(GlobalConfig::SalaryEnabled))
                    .col(big_integer(GlobalConfig::SalaryCadet))
                    .col(big_integer(GlobalConfig::SalarySecondOfficer))
                    .col(big_integer(GlobalConfig::SalaryFirstOfficer))
                    .col(big_integer(GlobalConfig::SalarySeniorFirstOfficer))
                    .col(big_integer(GlobalConfig::SalaryCaptain))
                    .col(big_integer(GlobalConfig::SalarySeniorCaptain))
                    .col(big_integer(GlobalConfig::SalaryCheckAirman))
                    .col(big_integer(GlobalConfig::CreditsBaseFlight))
                    .col(big_integer(GlobalConfig::CreditsGreaserBonus))
                    .col(big_integer(GlobalConfig::CreditsFirmBonus))
                    .col(big_integer(GlobalConfig::CreditsHardLandingPenalty))
                    .col(big_integer(GlobalConfig::CreditsFuelEfficiencyBonus))
                    .col(double(GlobalConfig::CreditsFirstFlightMultiplier))
                    .col(big_integer(GlobalConfig::CreditsHubToHubBonus))
                    .col(double(GlobalConfig::CreditsEventMultiplier))
                    .col(big_integer(GlobalConfig::CreditsLongHaul4h))
                    .col(big_integer(GlobalConfig::CreditsLongHaul8h))
                    .col(big_integer(GlobalConfig::CreditsNewRouteBonus))
                    .col(big_integer(GlobalConfig::CreditsTaxiSpeedPenalty))
                    .col(big_integer(GlobalConfig::CreditsLightViolationPenalty))
                    .col(big_integer(GlobalConfig::CreditsOverspeedPenalty))
                    .col(double(GlobalConfig::RepairHoursPerPercent))
                    .col(boolean(GlobalConfig::LocationBasedFleet))
                    .col(
                        timestamp_with_time_zone(GlobalConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(GlobalConfig::UpdatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AirlineFinance::Table)
                    .if_not_exists()
                    .col(pk_auto(AirlineFinance::Id))
                    .col(big_integer(AirlineFinance::Balance).default(1_000_000))
                    .col(big_integer(AirlineFinance::TotalRevenue).default(0))
                    .col(big_integer(AirlineFinance::TotalExpenses).default(0))
                    .col(
                        timestamp_with_time_zone(AirlineFinance::LastUpdated)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FinanceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(FinanceLog::Id))
                    .col(integer_null(FinanceLog::PilotId))
                    .col(string(FinanceLog::Kind))
                    .col(big_integer(FinanceLog::Amount))
                    .col(string(FinanceLog::Description))
                    .col(string_null(FinanceLog::ReferenceId))
                    .col(
                        timestamp_with_time_zone(FinanceLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_finance_log_pilot_id")
                            .from(FinanceLog::Table, FinanceLog::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StoreItem::Table)
                    .if_not_exists()
                    .col(pk_auto(StoreItem::Id))
                    .col(string(StoreItem::Name))
                    .col(text(StoreItem::Description))
                    .col(big_integer(StoreItem::Price))
                    .col(string(StoreItem::Category))
                    .col(string_null(StoreItem::ImageUrl))
                    .col(boolean(StoreItem::IsActive).default(true))
                    .col(integer(StoreItem::StockQuantity).default(-1))
                    .col(
                        timestamp_with_time_zone(StoreItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Purchase::Table)
                    .if_not_exists()
                    .col(pk_auto(Purchase::Id))
                    .col(integer(Purchase::PilotId))
                    .col(integer(Purchase::ItemId))
                    .col(big_integer(Purchase::Price))
                    .col(
                        timestamp_with_time_zone(Purchase::PurchasedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_pilot_id")
                            .from(Purchase::Table, Purchase::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_item_id")
                            .from(Purchase::Table, Purchase::ItemId)
                            .to(StoreItem::Table, StoreItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchase::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StoreItem::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FinanceLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AirlineFinance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GlobalConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GlobalConfig {
    Table,
    Id,
    Key,
    FuelTaxPercent,
    PenaltyMultiplier,
    RepairRatePerPercent,
    TicketPricePerNm,
    CargoPricePerLbNm,
    FuelPricePerLb,
    BaseLandingFee,
    PilotPayRate,
    HardLandingThreshold,
    SevereDamageThreshold,
    GroundedHealthThreshold,
    StoreToAirlinePercent,
    SalaryEnabled,
    SalaryCadet,
    SalarySecondOfficer,
    SalaryFirstOfficer,
    SalarySeniorFirstOfficer,
    SalaryCaptain,
    SalarySeniorCaptain,
    SalaryCheckAirman,
    CreditsBaseFlight,
    CreditsGreaserBonus,
    CreditsFirmBonus,
    CreditsHardLandingPenalty,
    CreditsFuelEfficiencyBonus,
    CreditsFirstFlightMultiplier,
    CreditsHubToHubBonus,
    CreditsEventMultiplier,
    #[sea_orm(iden = "credits_long_haul_4h")]
    CreditsLongHaul4h,
    #[sea_orm(iden = "credits_long_haul_8h")]
    CreditsLongHaul8h,
    CreditsNewRouteBonus,
    CreditsTaxiSpeedPenalty,
    CreditsLightViolationPenalty,
    CreditsOverspeedPenalty,
    RepairHoursPerPercent,
    LocationBasedFleet,
    UpdatedAt,
    UpdatedBy,
}

#[derive(DeriveIden)]
pub enum AirlineFinance {
    Table,
    Id,
    Balance,
    TotalRevenue,
    TotalExpenses,
    LastUpdated,
}

#[derive(DeriveIden)]
pub enum FinanceLog {
    Table,
    Id,
    PilotId,
    Kind,
    Amount,
    Description,
    ReferenceId,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum StoreItem {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
    ImageUrl,
    IsActive,
    StockQuantity,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Purchase {
    Table,
    Id,
    PilotId,
    ItemId,
    Price,
    PurchasedAt,
}
