use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::content::UpsertDotmDto,
    server::{
        data::dotm::DotmRepository,
        error::AppError,
        model::dotm::{Dotm, UpsertDotmParam},
        util::parse::parse_icao,
    },
};

pub struct DotmService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DotmService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The active destination when it belongs to the current month.
    pub async fn current(&self) -> Result<Option<Dotm>, AppError> {
        Ok(DotmRepository::new(self.db)
            .find_active()
            .await?
            .filter(|dotm| dotm.is_current(Utc::now())))
    }

    pub async fn all(&self) -> Result<Vec<Dotm>, AppError> {
        Ok(DotmRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, dto: UpsertDotmDto) -> Result<Dotm, AppError> {
        let param = validate(dto)?;

        Ok(DotmRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, dto: UpsertDotmDto) -> Result<Dotm, AppError> {
        let param = validate(dto)?;

        DotmRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Destination {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DotmRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Destination {} not found", id)));
        }

        Ok(())
    }
}

fn validate(dto: UpsertDotmDto) -> Result<UpsertDotmParam, AppError> {
    parse_icao(&dto.airport_icao)?;
    if dto.bonus_points < 0 {
        return Err(AppError::BadRequest("Bonus cannot be negative".to_string()));
    }

    Ok(UpsertDotmParam::from_dto(dto))
}
