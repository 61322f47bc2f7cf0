//! Activity, activity leg and activity progress data repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::content::ActivityLegDto,
    server::model::activity::{Activity, ActivityProgress, UpsertActivityParam},
};

pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active activities with their legs, newest first.
    pub async fn get_active(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .filter(entity::activity::Column::IsActive.eq(true))
            .order_by_desc(entity::activity::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_legs(activities).await
    }

    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_desc(entity::activity::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_legs(activities).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let Some(activity) = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.with_legs(vec![activity]).await?.pop())
    }

    pub async fn create(&self, param: UpsertActivityParam) -> Result<Activity, DbErr> {
        let activity = entity::activity::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            kind: ActiveValue::Set(param.kind),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            legs_in_order: ActiveValue::Set(param.legs_in_order),
            min_rank: ActiveValue::Set(param.min_rank),
            reward_points: ActiveValue::Set(param.reward_points),
            total_pilots_complete: ActiveValue::Set(0),
            first_pilot_to_complete: ActiveValue::Set(None),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let legs = self.insert_legs(activity.id, param.legs).await?;

        Ok(Activity::from_entity(activity, legs))
    }

    /// Replaces an activity's fields and leg list. Completion counters are kept.
    pub async fn update(
        &self,
        id: i32,
        param: UpsertActivityParam,
    ) -> Result<Option<Activity>, DbErr> {
        let Some(model) = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::activity::ActiveModel = model.into();
        active.title = ActiveValue::Set(param.title);
        active.description = ActiveValue::Set(param.description);
        active.kind = ActiveValue::Set(param.kind);
        active.start_date = ActiveValue::Set(param.start_date);
        active.end_date = ActiveValue::Set(param.end_date);
        active.legs_in_order = ActiveValue::Set(param.legs_in_order);
        active.min_rank = ActiveValue::Set(param.min_rank);
        active.reward_points = ActiveValue::Set(param.reward_points);
        active.is_active = ActiveValue::Set(param.is_active);
        let activity = active.update(self.db).await?;

        entity::prelude::ActivityLeg::delete_many()
            .filter(entity::activity_leg::Column::ActivityId.eq(id))
            .exec(self.db)
            .await?;
        let legs = self.insert_legs(id, param.legs).await?;

        Ok(Some(Activity::from_entity(activity, legs)))
    }

    /// Deletes an activity together with its legs and progress rows.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::ActivityProgress::delete_many()
            .filter(entity::activity_progress::Column::ActivityId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::ActivityLeg::delete_many()
            .filter(entity::activity_leg::Column::ActivityId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Activity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_progress(
        &self,
        activity_id: i32,
        pilot_id: i32,
    ) -> Result<Option<ActivityProgress>, DbErr> {
        let entity = entity::prelude::ActivityProgress::find()
            .filter(entity::activity_progress::Column::ActivityId.eq(activity_id))
            .filter(entity::activity_progress::Column::PilotId.eq(pilot_id))
            .one(self.db)
            .await?;

        Ok(entity.map(ActivityProgress::from_entity))
    }

    pub async fn progress_for_pilot(&self, pilot_id: i32) -> Result<Vec<ActivityProgress>, DbErr> {
        let entities = entity::prelude::ActivityProgress::find()
            .filter(entity::activity_progress::Column::PilotId.eq(pilot_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ActivityProgress::from_entity).collect())
    }

    /// Creates an empty progress row for a pilot starting an activity.
    pub async fn start_progress(
        &self,
        activity_id: i32,
        pilot_id: i32,
    ) -> Result<ActivityProgress, DbErr> {
        let entity = entity::activity_progress::ActiveModel {
            activity_id: ActiveValue::Set(activity_id),
            pilot_id: ActiveValue::Set(pilot_id),
            completed_leg_ids: ActiveValue::Set("[]".to_string()),
            legs_complete: ActiveValue::Set(0),
            percent_complete: ActiveValue::Set(0.0),
            start_date: ActiveValue::Set(Utc::now()),
            date_complete: ActiveValue::Set(None),
            last_leg_flown_date: ActiveValue::Set(None),
            days_to_complete: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ActivityProgress::from_entity(entity))
    }

    /// Writes the mutable fields of a progress row.
    pub async fn save_progress(&self, progress: &ActivityProgress) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::ActivityProgress::find_by_id(progress.id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let completed = serde_json::to_string(&progress.completed_leg_ids)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let mut active: entity::activity_progress::ActiveModel = model.into();
        active.completed_leg_ids = ActiveValue::Set(completed);
        active.legs_complete = ActiveValue::Set(progress.legs_complete);
        active.percent_complete = ActiveValue::Set(progress.percent_complete);
        active.date_complete = ActiveValue::Set(progress.date_complete);
        active.last_leg_flown_date = ActiveValue::Set(progress.last_leg_flown_date);
        active.days_to_complete = ActiveValue::Set(progress.days_to_complete);
        active.update(self.db).await?;

        Ok(())
    }

    /// Counts a completion, remembering the first pilot to finish.
    pub async fn record_completion(&self, activity_id: i32, pilot_name: &str) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::Activity::find_by_id(activity_id)
            .one(self.db)
            .await?
        else {
            return Ok(());
        };

        let total = model.total_pilots_complete + 1;
        let first = model.first_pilot_to_complete.is_none();

        let mut active: entity::activity::ActiveModel = model.into();
        active.total_pilots_complete = ActiveValue::Set(total);
        if first {
            active.first_pilot_to_complete = ActiveValue::Set(Some(pilot_name.to_string()));
        }
        active.update(self.db).await?;

        Ok(())
    }

    async fn insert_legs(
        &self,
        activity_id: i32,
        legs: Vec<ActivityLegDto>,
    ) -> Result<Vec<entity::activity_leg::Model>, DbErr> {
        let mut created = Vec::with_capacity(legs.len());

        for leg in legs {
            let aircraft_types = serde_json::to_string(&leg.aircraft_types)
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            let model = entity::activity_leg::ActiveModel {
                activity_id: ActiveValue::Set(activity_id),
                leg_order: ActiveValue::Set(leg.leg_order),
                departure_icao: ActiveValue::Set(leg.departure_icao),
                arrival_icao: ActiveValue::Set(leg.arrival_icao),
                flight_number: ActiveValue::Set(leg.flight_number),
                aircraft_types: ActiveValue::Set(aircraft_types),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            created.push(model);
        }

        Ok(created)
    }

    async fn with_legs(
        &self,
        activities: Vec<entity::activity::Model>,
    ) -> Result<Vec<Activity>, DbErr> {
        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = activities.iter().map(|a| a.id).collect();
        let legs = entity::prelude::ActivityLeg::find()
            .filter(entity::activity_leg::Column::ActivityId.is_in(ids))
            .all(self.db)
            .await?;

        let mut by_activity: HashMap<i32, Vec<entity::activity_leg::Model>> = HashMap::new();
        for leg in legs {
            by_activity.entry(leg.activity_id).or_default().push(leg);
        }

        Ok(activities
            .into_iter()
            .map(|activity| {
                let legs = by_activity.remove(&activity.id).unwrap_or_default();
                Activity::from_entity(activity, legs)
            })
            .collect())
    }
}
