use crate::server::data::active_flight::{ActiveFlightRepository, INITIAL_PHASE};
use crate::server::model::active_flight::{CreateActiveFlightParam, TelemetryParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod lifecycle;
mod stale;
