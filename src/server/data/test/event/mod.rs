use crate::server::{data::event::EventRepository, model::event::EventBookingStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod booking;
