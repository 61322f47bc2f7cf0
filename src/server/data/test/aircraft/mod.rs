use crate::server::{
    data::aircraft::AircraftRepository,
    model::fleet::{AircraftStatus, AircraftWearParam, DamageEntry, UpdateAircraftParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod apply_wear;
mod get_active;
mod release;
mod update;
