//! Tour, tour leg and tour progress data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::tour::{Tour, TourLeg, TourProgress, TourStatus, UpsertTourParam};

pub struct TourRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active tours with their legs, ordered by name.
    pub async fn get_active(&self) -> Result<Vec<Tour>, DbErr> {
        let tours = entity::prelude::Tour::find()
            .filter(entity::tour::Column::IsActive.eq(true))
            .order_by_asc(entity::tour::Column::Name)
            .all(self.db)
            .await?;

        self.with_legs(tours).await
    }

    pub async fn get_all(&self) -> Result<Vec<Tour>, DbErr> {
        let tours = entity::prelude::Tour::find()
            .order_by_asc(entity::tour::Column::Name)
            .all(self.db)
            .await?;

        self.with_legs(tours).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tour>, DbErr> {
        let Some(tour) = entity::prelude::Tour::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_legs(vec![tour]).await?.pop())
    }

    /// Creates a tour and its legs.
    pub async fn create(&self, param: UpsertTourParam) -> Result<Tour, DbErr> {
        let tour = entity::tour::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            banner: ActiveValue::Set(param.banner),
            reward_credits: ActiveValue::Set(param.reward_credits),
            difficulty: ActiveValue::Set(param.difficulty),
            is_active: ActiveValue::Set(param.is_active),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let legs = self.insert_legs(tour.id, param.legs).await?;

        Ok(Tour::from_entity(tour, legs))
    }

    /// Replaces a tour's fields and its full leg list.
    ///
    /// # Returns
    /// - `Ok(Some(Tour))` - Updated tour with its new legs
    /// - `Ok(None)` - No tour with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpsertTourParam) -> Result<Option<Tour>, DbErr> {
        let Some(model) = entity::prelude::Tour::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::tour::ActiveModel = model.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.banner = ActiveValue::Set(param.banner);
        active.reward_credits = ActiveValue::Set(param.reward_credits);
        active.difficulty = ActiveValue::Set(param.difficulty);
        active.is_active = ActiveValue::Set(param.is_active);
        active.start_date = ActiveValue::Set(param.start_date);
        active.end_date = ActiveValue::Set(param.end_date);
        let tour = active.update(self.db).await?;

        entity::prelude::TourLeg::delete_many()
            .filter(entity::tour_leg::Column::TourId.eq(id))
            .exec(self.db)
            .await?;
        let legs = self.insert_legs(id, param.legs).await?;

        Ok(Some(Tour::from_entity(tour, legs)))
    }

    /// Deletes a tour with its legs and all pilots' progress on it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::TourProgress::delete_many()
            .filter(entity::tour_progress::Column::TourId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::TourLeg::delete_many()
            .filter(entity::tour_leg::Column::TourId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Tour::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_progress(
        &self,
        tour_id: i32,
        pilot_id: i32,
    ) -> Result<Option<TourProgress>, DbErr> {
        let entity = entity::prelude::TourProgress::find()
            .filter(entity::tour_progress::Column::TourId.eq(tour_id))
            .filter(entity::tour_progress::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        Ok(entity.map(TourProgress::from_entity))
    }

    /// Every tour progress row of a pilot.
    pub async fn progress_for_pilot(&self, pilot_id: i32) -> Result<Vec<TourProgress>, DbErr> {
        let entities = entity::prelude::TourProgress::find()
            .filter(entity::tour_progress::Column::PilotId.eq(pilot_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TourProgress::from_entity).collect())
    }

    /// Starts a tour for a pilot at the first leg.
    pub async fn start(&self, tour_id: i32, pilot_id: i32) -> Result<TourProgress, DbErr> {
        let entity = entity::tour_progress::ActiveModel {
            tour_id: ActiveValue::Set(tour_id),
            pilot_id: ActiveValue::Set(pilot_id),
            current_leg: ActiveValue::Set(0),
            status: ActiveValue::Set(TourStatus::InProgress.as_str().to_string()),
            started_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TourProgress::from_entity(entity))
    }

    /// Moves progress to the given leg index, completing the tour when `completed` is set.
    pub async fn advance(
        &self,
        progress_id: i32,
        next_leg: i32,
        completed: bool,
    ) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::TourProgress::find_by_id(progress_id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::tour_progress::ActiveModel = model.into();
        active.current_leg = ActiveValue::Set(next_leg);
        if completed {
            active.status = ActiveValue::Set(TourStatus::Completed.as_str().to_string());
            active.completed_at = ActiveValue::Set(Some(Utc::now()));
        }
        active.update(self.db).await?;

        Ok(())
    }

    /// Returns completed progress to InProgress at the given leg index.
    pub async fn reopen(&self, progress_id: i32, current_leg: i32) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::TourProgress::find_by_id(progress_id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let mut active: entity::tour_progress::ActiveModel = model.into();
        active.current_leg = ActiveValue::Set(current_leg.max(0));
        active.status = ActiveValue::Set(TourStatus::InProgress.as_str().to_string());
        active.completed_at = ActiveValue::Set(None);
        active.update(self.db).await?;

        Ok(())
    }

    async fn insert_legs(
        &self,
        tour_id: i32,
        legs: Vec<TourLeg>,
    ) -> Result<Vec<entity::tour_leg::Model>, DbErr> {
        let mut created = Vec::with_capacity(legs.len());

        for leg in legs {
            let aircraft_types = serde_json::to_string(&leg.aircraft_types)
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            let model = entity::tour_leg::ActiveModel {
                tour_id: ActiveValue::Set(tour_id),
                leg_number: ActiveValue::Set(leg.leg_number),
                departure_icao: ActiveValue::Set(leg.departure_icao),
                arrival_icao: ActiveValue::Set(leg.arrival_icao),
                distance_nm: ActiveValue::Set(leg.distance_nm),
                aircraft_types: ActiveValue::Set(aircraft_types),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            created.push(model);
        }

        Ok(created)
    }

    async fn with_legs(&self, tours: Vec<entity::tour::Model>) -> Result<Vec<Tour>, DbErr> {
        if tours.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = tours.iter().map(|t| t.id).collect();
        let legs = entity::prelude::TourLeg::find()
            .filter(entity::tour_leg::Column::TourId.is_in(ids))
            .all(self.db)
            .await?;

        let mut by_tour: HashMap<i32, Vec<entity::tour_leg::Model>> = HashMap::new();
        for leg in legs {
            by_tour.entry(leg.tour_id).or_default().push(leg);
        }

        Ok(tours
            .into_iter()
            .map(|tour| {
                let legs = by_tour.remove(&tour.id).unwrap_or_default();
                Tour::from_entity(tour, legs)
            })
            .collect())
    }
}
