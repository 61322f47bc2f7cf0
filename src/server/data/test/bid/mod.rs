use crate::server::{
    data::bid::BidRepository,
    model::bid::{BidStatus, CreateBidParam, BID_TTL_HOURS},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod expire;
mod find_open;
