use crate::server::{
    data::flight::FlightRepository,
    model::flight::{ApprovalStatus, CreateFlightParam, FlightFilter, UpdateFlightParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;
