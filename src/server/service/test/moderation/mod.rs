use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    model::pirep::{ManualPirepDto, UpdatePirepDto},
    server::{
        data::{
            finance::FinanceRepository, flight::FlightRepository,
            notification::NotificationRepository, pilot::PilotRepository, tour::TourRepository,
        },
        error::AppError,
        model::{
            economy::CreateFinanceLogParam, flight::ApprovalStatus, pilot::Pilot,
            tour::TourStatus,
        },
        service::moderation::ModerationService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod review;

/// An administrator reviewer as the domain model.
async fn reviewer(db: &sea_orm::DatabaseConnection) -> Result<Pilot, AppError> {
    Ok(Pilot::from_entity(factory::create_admin(db).await?))
}

fn approve() -> UpdatePirepDto {
    UpdatePirepDto {
        status: Some("approved".to_string()),
        ..Default::default()
    }
}
