use sea_orm::DatabaseConnection;

use crate::{
    model::pilot::UpsertRankDto,
    server::{
        data::rank::RankRepository,
        error::AppError,
        model::rank::{Rank, UpsertRankParam},
        util::parse::require_text,
    },
};

pub struct RankService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RankService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Career ladder from most junior to most senior.
    pub async fn all(&self) -> Result<Vec<Rank>, AppError> {
        Ok(RankRepository::new(self.db).get_all().await?)
    }

    /// Creates a rank.
    ///
    /// # Returns
    /// - `Ok(Rank)` - The new rank
    /// - `Err(AppError::BadRequest)` - Missing name or negative requirements
    /// - `Err(AppError::Conflict)` - A rank with the same name exists
    pub async fn create(&self, dto: UpsertRankDto) -> Result<Rank, AppError> {
        let rank_repo = RankRepository::new(self.db);
        let param = validate(dto)?;

        if rank_repo.find_by_name(&param.name).await?.is_some() {
            return Err(AppError::Conflict(format!("Rank {} already exists", param.name)));
        }

        Ok(rank_repo.create(param).await?)
    }

    pub async fn update(&self, id: i32, dto: UpsertRankDto) -> Result<Rank, AppError> {
        let rank_repo = RankRepository::new(self.db);
        let param = validate(dto)?;

        if let Some(existing) = rank_repo.find_by_name(&param.name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "Rank {} already exists",
                    param.name
                )));
            }
        }

        rank_repo
            .update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rank {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RankRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Rank {} not found", id)));
        }

        Ok(())
    }
}

fn validate(dto: UpsertRankDto) -> Result<UpsertRankParam, AppError> {
    require_text("Name", &dto.name)?;
    if dto.requirement_hours < 0.0 || dto.requirement_flights < 0 {
        return Err(AppError::BadRequest(
            "Rank requirements cannot be negative".to_string(),
        ));
    }

    Ok(UpsertRankParam::from_dto(dto))
}
