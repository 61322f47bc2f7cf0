use crate::server::{
    data::{config::ConfigRepository, finance::FinanceRepository},
    model::economy::{ledger, AirlineAdjustment, CreateFinanceLogParam, INITIAL_AIRLINE_BALANCE},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod airline;
mod config;
mod logs;
