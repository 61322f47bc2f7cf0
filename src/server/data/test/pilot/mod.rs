use crate::server::{
    data::pilot::PilotRepository,
    model::pilot::{CreatePilotParam, FlightStatsParam, PilotStatus},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod award_credits;
mod blacklist;
mod create;
mod find_by_identifier;
mod flight_stats;
mod record_login;
