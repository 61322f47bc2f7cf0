use sea_orm::DatabaseConnection;

use crate::{
    model::content::{ActivityDto, UpsertActivityDto},
    server::{
        data::activity::ActivityRepository,
        error::AppError,
        model::activity::{Activity, UpsertActivityParam},
        util::parse::require_text,
    },
};

pub struct ActivityService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active activities, each with the caller's progress when a pilot is signed in.
    pub async fn list(&self, pilot_id: Option<i32>) -> Result<Vec<ActivityDto>, AppError> {
        let activity_repo = ActivityRepository::new(self.db);
        let activities = activity_repo.get_active().await?;

        let mut progress = match pilot_id {
            Some(pilot_id) => activity_repo.progress_for_pilot(pilot_id).await?,
            None => Vec::new(),
        };

        Ok(activities
            .into_iter()
            .map(|activity| {
                let mine = progress
                    .iter()
                    .position(|p| p.activity_id == activity.id)
                    .map(|index| progress.swap_remove(index));
                activity.into_dto(mine)
            })
            .collect())
    }

    /// A single activity with its legs and the caller's progress.
    ///
    /// # Returns
    /// - `Ok(ActivityDto)` - The activity
    /// - `Err(AppError::NotFound)` - No activity with that id
    pub async fn get(&self, id: i32, pilot_id: Option<i32>) -> Result<ActivityDto, AppError> {
        let activity_repo = ActivityRepository::new(self.db);

        let activity = activity_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        let progress = match pilot_id {
            Some(pilot_id) => activity_repo.find_progress(activity.id, pilot_id).await?,
            None => None,
        };

        Ok(activity.into_dto(progress))
    }

    pub async fn all(&self) -> Result<Vec<Activity>, AppError> {
        Ok(ActivityRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, dto: UpsertActivityDto) -> Result<Activity, AppError> {
        require_text("Title", &dto.title)?;

        Ok(ActivityRepository::new(self.db)
            .create(UpsertActivityParam::from_dto(dto))
            .await?)
    }

    pub async fn update(&self, id: i32, dto: UpsertActivityDto) -> Result<Activity, AppError> {
        require_text("Title", &dto.title)?;

        ActivityRepository::new(self.db)
            .update(id, UpsertActivityParam::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ActivityRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Activity {} not found", id)));
        }

        Ok(())
    }
}
