//! Multi-leg tours and pilot progress through them.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::content::{TourDto, UpsertTourDto},
    server::{
        data::tour::TourRepository,
        error::AppError,
        model::{
            pilot::Pilot,
            tour::{Tour, TourProgress, UpsertTourParam},
        },
        util::parse::require_text,
    },
};

pub struct TourService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TourService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active tours with legs and the pilot's progress on each.
    pub async fn list_for_pilot(&self, pilot_id: i32) -> Result<Vec<TourDto>, AppError> {
        let tour_repo = TourRepository::new(self.db);
        let tours = tour_repo.get_active().await?;
        let mut progress = tour_repo.progress_for_pilot(pilot_id).await?;

        Ok(tours
            .into_iter()
            .map(|tour| {
                let mine = progress
                    .iter()
                    .position(|p| p.tour_id == tour.id)
                    .map(|index| progress.swap_remove(index));
                tour.into_dto(mine)
            })
            .collect())
    }

    /// Starts a tour at its first leg.
    ///
    /// # Returns
    /// - `Ok(TourProgress)` - New progress row
    /// - `Err(AppError::NotFound)` - Tour unknown or inactive
    /// - `Err(AppError::Conflict)` - Pilot already started this tour
    pub async fn start(&self, pilot: &Pilot, tour_id: i32) -> Result<TourProgress, AppError> {
        let tour_repo = TourRepository::new(self.db);

        let tour = tour_repo
            .find_by_id(tour_id)
            .await?
            .filter(|t| t.is_active)
            .ok_or_else(|| AppError::NotFound(format!("Tour {} not found", tour_id)))?;

        if tour_repo.find_progress(tour.id, pilot.id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "You have already started {}",
                tour.name
            )));
        }

        let progress = tour_repo.start(tour.id, pilot.id).await?;
        tracing::info!("{} started tour {}", pilot.pilot_id, tour.name);

        Ok(progress)
    }

    pub async fn all(&self) -> Result<Vec<Tour>, AppError> {
        Ok(TourRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, dto: UpsertTourDto) -> Result<Tour, AppError> {
        let param = validate(dto)?;

        Ok(TourRepository::new(self.db).create(param).await?)
    }

    /// Replaces a tour's fields and legs.
    pub async fn update(&self, id: i32, dto: UpsertTourDto) -> Result<Tour, AppError> {
        let param = validate(dto)?;

        TourRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tour {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TourRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Tour {} not found", id)));
        }

        Ok(())
    }
}

fn validate(dto: UpsertTourDto) -> Result<UpsertTourParam, AppError> {
    require_text("Name", &dto.name)?;
    let param = UpsertTourParam::from_dto(dto);

    if param.legs.is_empty() {
        return Err(AppError::BadRequest("A tour needs at least one leg".to_string()));
    }
    if let Some(leg) = param
        .legs
        .iter()
        .find(|l| l.departure_icao.len() != 4 || l.arrival_icao.len() != 4)
    {
        return Err(AppError::BadRequest(format!(
            "Leg {} needs 4-letter departure and arrival codes",
            leg.leg_number
        )));
    }

    Ok(param)
}
