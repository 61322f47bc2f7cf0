use sea_orm::DatabaseConnection;

use crate::{
    model::content::UpsertNotamDto,
    server::{
        data::notam::NotamRepository,
        error::AppError,
        model::notam::{Notam, UpsertNotamParam},
        util::parse::require_text,
    },
};

/// Most NOTAMs returned by the public list.
pub const NOTAM_LIMIT: u64 = 50;

pub struct NotamService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active NOTAMs, highest priority first and newest within a priority.
    pub async fn active(&self, kind: Option<&str>) -> Result<Vec<Notam>, AppError> {
        let kind = kind.map(str::trim).filter(|k| !k.is_empty());

        Ok(NotamRepository::new(self.db)
            .get_active(kind, NOTAM_LIMIT)
            .await?)
    }

    pub async fn all(&self) -> Result<Vec<Notam>, AppError> {
        Ok(NotamRepository::new(self.db).get_all().await?)
    }

    pub async fn create(&self, dto: UpsertNotamDto) -> Result<Notam, AppError> {
        require_text("Title", &dto.title)?;

        Ok(NotamRepository::new(self.db)
            .create(UpsertNotamParam::from_dto(dto))
            .await?)
    }

    pub async fn update(&self, id: i32, dto: UpsertNotamDto) -> Result<Notam, AppError> {
        require_text("Title", &dto.title)?;

        NotamRepository::new(self.db)
            .update(id, UpsertNotamParam::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("NOTAM {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NotamRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("NOTAM {} not found", id)));
        }

        Ok(())
    }
}
