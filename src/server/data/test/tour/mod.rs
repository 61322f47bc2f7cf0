use crate::server::{
    data::tour::TourRepository,
    model::tour::{TourLeg, TourStatus, UpsertTourParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod progress;
mod upsert;
