use chrono::{Datelike, Duration, Utc};

use crate::{
    model::{
        content::{AssignStaffDto, UpsertDotmDto, UpsertNotamDto, UpsertStaffRoleDto},
        pilot::UpsertRankDto,
    },
    server::{
        data::dotm::DotmRepository,
        error::AppError,
        model::{
            dotm::{month_name, UpsertDotmParam},
            pilot::Pilot,
        },
        service::{
            activity::ActivityService, dotm::DotmService, event::EventService,
            notam::NotamService, rank::RankService, staff::StaffService, tour::TourService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod catalogue;
mod event;
mod tour;

async fn pilot(db: &sea_orm::DatabaseConnection) -> Result<Pilot, AppError> {
    Ok(Pilot::from_entity(factory::create_pilot(db).await?))
}
