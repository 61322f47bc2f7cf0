use sea_orm::EntityTrait;

use crate::server::{
    data::{
        config::ConfigRepository, finance::FinanceRepository, pilot::PilotRepository,
        store::StoreRepository,
    },
    error::AppError,
    model::{
        economy::{ledger, EconomyConfig, INITIAL_AIRLINE_BALANCE},
        pilot::Pilot,
    },
    service::{discord::DiscordNotifier, economy::EconomyService},
};
use test_utils::{builder::TestBuilder, factory};

mod payroll;
mod store;

fn store_builder() -> TestBuilder {
    TestBuilder::new()
        .with_pilot_tables()
        .with_finance_tables()
        .with_table(entity::prelude::StoreItem)
        .with_table(entity::prelude::Purchase)
}
