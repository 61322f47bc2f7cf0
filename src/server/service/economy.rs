//! Pilot store, airline ledger overview and the scheduled payroll and operations charges.

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    model::economy::{
        DailyOpsResultDto, FinanceOverviewDto, PayrollResultDto, PurchaseResultDto,
        UpsertStoreItemDto,
    },
    server::{
        data::{
            config::ConfigRepository, finance::FinanceRepository, pilot::PilotRepository,
            store::StoreRepository,
        },
        error::AppError,
        model::{
            economy::{ledger, AirlineAdjustment, CreateFinanceLogParam},
            pilot::Pilot,
            store::{StoreItem, UpsertStoreItemParam},
        },
        service::discord::DiscordNotifier,
        util::parse::require_text,
    },
};

const RECENT_LEDGER_LIMIT: u64 = 50;

pub struct EconomyService<'a> {
    pub db: &'a DatabaseConnection,
    pub notifier: &'a DiscordNotifier,
}

impl<'a> EconomyService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a DiscordNotifier) -> Self {
        Self { db, notifier }
    }

    pub async fn store_items(&self) -> Result<Vec<StoreItem>, AppError> {
        Ok(StoreRepository::new(self.db).get_active().await?)
    }

    pub async fn all_store_items(&self) -> Result<Vec<StoreItem>, AppError> {
        Ok(StoreRepository::new(self.db).get_all().await?)
    }

    pub async fn create_store_item(&self, dto: UpsertStoreItemDto) -> Result<StoreItem, AppError> {
        let param = validate_item(dto)?;

        Ok(StoreRepository::new(self.db).create(param).await?)
    }

    pub async fn update_store_item(
        &self,
        id: i32,
        dto: UpsertStoreItemDto,
    ) -> Result<StoreItem, AppError> {
        let param = validate_item(dto)?;

        StoreRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store item {} not found", id)))
    }

    pub async fn delete_store_item(&self, id: i32) -> Result<(), AppError> {
        if !StoreRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Store item {} not found", id)));
        }

        Ok(())
    }

    /// Buys a store item with the pilot's balance.
    ///
    /// The configured share of the price is transferred to the airline account.
    ///
    /// # Arguments
    /// - `pilot` - The buyer
    /// - `item_id` - Item to purchase
    ///
    /// # Returns
    /// - `Ok(PurchaseResultDto)` - Purchased item and the pilot's remaining balance
    /// - `Err(AppError::NotFound)` - Item missing or inactive
    /// - `Err(AppError::BadRequest)` - Item out of stock or balance too low
    pub async fn purchase(
        &self,
        pilot: &Pilot,
        item_id: i32,
    ) -> Result<PurchaseResultDto, AppError> {
        let store_repo = StoreRepository::new(self.db);

        let item = store_repo
            .find_by_id(item_id)
            .await?
            .filter(|item| item.is_active)
            .ok_or_else(|| AppError::NotFound("Item not found or inactive".to_string()))?;

        if item.is_limited() && item.stock_quantity <= 0 {
            return Err(AppError::BadRequest(format!("{} is out of stock", item.name)));
        }
        if pilot.balance < item.price {
            return Err(AppError::BadRequest("Insufficient balance".to_string()));
        }

        let buyer = PilotRepository::new(self.db)
            .adjust_balance(pilot.id, -item.price)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pilot {} not found", pilot.pilot_id)))?;

        store_repo.record_purchase(pilot.id, &item).await?;
        store_repo.decrement_stock(&item).await?;

        let config = ConfigRepository::new(self.db).get_or_create().await?;
        let transfer = store_transfer(item.price, config.store_to_airline_percent);
        if transfer > 0 {
            let finance_repo = FinanceRepository::new(self.db);
            finance_repo
                .adjust_airline(AirlineAdjustment {
                    balance: transfer,
                    revenue: transfer,
                    expenses: 0,
                })
                .await?;
            finance_repo
                .log(CreateFinanceLogParam {
                    pilot_id: Some(pilot.id),
                    kind: ledger::STORE_REVENUE,
                    amount: transfer,
                    description: format!(
                        "Store purchase: {} ({}% of {} Cr)",
                        item.name, config.store_to_airline_percent, item.price
                    ),
                    reference_id: Some(item.id.to_string()),
                })
                .await?;
        }

        tracing::info!(
            "{} purchased {} for {} Cr",
            pilot.pilot_id,
            item.name,
            item.price
        );

        Ok(PurchaseResultDto {
            item: item.into_dto(),
            balance: buyer.balance,
        })
    }

    /// Airline balance, running totals and the most recent ledger entries.
    pub async fn finance_overview(&self) -> Result<FinanceOverviewDto, AppError> {
        let finance_repo = FinanceRepository::new(self.db);
        let airline = finance_repo.get_airline().await?;
        let recent = finance_repo.recent_logs(RECENT_LEDGER_LIMIT).await?;

        Ok(airline.into_dto(recent))
    }

    /// Pays every Active pilot the weekly salary of their rank out of the airline account.
    ///
    /// Does nothing when salaries are disabled.
    pub async fn pay_weekly_salaries(&self) -> Result<PayrollResultDto, AppError> {
        let finance_repo = FinanceRepository::new(self.db);
        let config = ConfigRepository::new(self.db).get_or_create().await?;

        if !config.salary_enabled {
            tracing::info!("Weekly salaries are disabled, skipping payroll");
            return Ok(PayrollResultDto {
                pilots_paid: 0,
                total_paid: 0,
                airline_balance: finance_repo.get_airline().await?.balance,
            });
        }

        let pilot_repo = PilotRepository::new(self.db);
        let mut total_paid = 0;
        let mut pilots_paid = 0;
        let mut by_rank: BTreeMap<String, (u64, i64)> = BTreeMap::new();

        for pilot in pilot_repo.get_active().await? {
            let salary = config.salary_for_rank(&pilot.rank);
            if salary <= 0 {
                continue;
            }

            pilot_repo.adjust_balance(pilot.id, salary).await?;
            total_paid += salary;
            pilots_paid += 1;

            let entry = by_rank.entry(pilot.rank).or_default();
            entry.0 += 1;
            entry.1 += salary;
        }

        let mut airline = finance_repo.get_airline().await?;
        if total_paid > 0 {
            airline = finance_repo
                .adjust_airline(AirlineAdjustment {
                    balance: -total_paid,
                    revenue: 0,
                    expenses: total_paid,
                })
                .await?;
            finance_repo
                .log(CreateFinanceLogParam {
                    pilot_id: None,
                    kind: ledger::WEEKLY_SALARY,
                    amount: -total_paid,
                    description: format!(
                        "Weekly pilot salaries paid to {} active pilots. Total: {} Cr",
                        pilots_paid, total_paid
                    ),
                    reference_id: None,
                })
                .await?;

            let lines = by_rank
                .iter()
                .map(|(rank, (count, amount))| {
                    format!("**{}** {} pilot(s) = `{} Cr`", rank, count, amount)
                })
                .collect::<Vec<_>>()
                .join("\n");
            self.notifier
                .finance(
                    "Pilot Salaries Processed",
                    lines,
                    -total_paid,
                    airline.balance,
                )
                .await;
        }

        tracing::info!("Paid {} Cr in salaries to {} pilots", total_paid, pilots_paid);

        Ok(PayrollResultDto {
            pilots_paid,
            total_paid,
            airline_balance: airline.balance,
        })
    }

    /// Charges the airline for a day of fuel and catering purchases.
    ///
    /// The charge never takes the airline balance below zero and is skipped when the
    /// balance is already exhausted.
    pub async fn run_daily_operations(&self) -> Result<DailyOpsResultDto, AppError> {
        let finance_repo = FinanceRepository::new(self.db);
        let config = ConfigRepository::new(self.db).get_or_create().await?;
        let airline = finance_repo.get_airline().await?;

        let (fuel_lbs, catering_cost) = {
            let mut rng = rand::rng();
            (
                rng.random_range(50_000..=200_000_i64),
                rng.random_range(2_000..=8_000_i64),
            )
        };
        let fuel_cost = (fuel_lbs as f64 * config.fuel_price_per_lb).round() as i64;
        let deducted = daily_deduction(fuel_cost + catering_cost, airline.balance);

        if deducted == 0 {
            tracing::info!("Airline balance exhausted, skipping daily operations");
            return Ok(DailyOpsResultDto {
                fuel_lbs,
                fuel_cost,
                catering_cost,
                deducted,
                airline_balance: airline.balance,
            });
        }

        let airline = finance_repo
            .adjust_airline(AirlineAdjustment {
                balance: -deducted,
                revenue: 0,
                expenses: deducted,
            })
            .await?;
        finance_repo
            .log(CreateFinanceLogParam {
                pilot_id: None,
                kind: ledger::DAILY_OPERATIONS,
                amount: -deducted,
                description: format!(
                    "Daily fuel & catering: Fuel {} lbs ({} Cr) + Catering {} Cr = {} Cr",
                    fuel_lbs, fuel_cost, catering_cost, deducted
                ),
                reference_id: None,
            })
            .await?;

        self.notifier
            .finance(
                "Daily Operations Report",
                format!(
                    "Jet fuel **{} lbs** `{} Cr`\nCatering `{} Cr`",
                    fuel_lbs, fuel_cost, catering_cost
                ),
                -deducted,
                airline.balance,
            )
            .await;

        tracing::info!("Daily operations charged {} Cr", deducted);

        Ok(DailyOpsResultDto {
            fuel_lbs,
            fuel_cost,
            catering_cost,
            deducted,
            airline_balance: airline.balance,
        })
    }
}

fn validate_item(dto: UpsertStoreItemDto) -> Result<UpsertStoreItemParam, AppError> {
    require_text("Name", &dto.name)?;
    if dto.price < 0 {
        return Err(AppError::BadRequest("Price cannot be negative".to_string()));
    }

    Ok(UpsertStoreItemParam::from_dto(dto))
}

/// Share of a store price credited to the airline.
pub fn store_transfer(price: i64, percent: f64) -> i64 {
    (price as f64 * percent / 100.0).round() as i64
}

/// Daily charge capped at what the airline still holds.
pub fn daily_deduction(total: i64, balance: i64) -> i64 {
    total.min(balance.max(0))
}
