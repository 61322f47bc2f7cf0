use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::auth::{AcarsToken, TokenKind};

/// Repository for hashed ACARS bearer tokens.
pub struct AcarsTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcarsTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a token by its hash.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex digest of the raw token
    /// - `pilot_id` - Database id of the owning pilot
    /// - `kind` - Access or refresh
    /// - `expires_at` - Instant after which the token is rejected
    pub async fn create(
        &self,
        token_hash: String,
        pilot_id: i32,
        kind: TokenKind,
        expires_at: DateTime<Utc>,
    ) -> Result<AcarsToken, DbErr> {
        let entity = entity::acars_token::ActiveModel {
            token_hash: ActiveValue::Set(token_hash),
            pilot_id: ActiveValue::Set(pilot_id),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AcarsToken::from_entity(entity))
    }

    pub async fn find_by_hash(&self, token_hash: &str) -> Result<Option<AcarsToken>, DbErr> {
        let entity = entity::prelude::AcarsToken::find()
            .filter(entity::acars_token::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await?;

        Ok(entity.map(AcarsToken::from_entity))
    }

    pub async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AcarsToken::delete_many()
            .filter(entity::acars_token::Column::TokenHash.eq(token_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Revokes every token of a pilot.
    pub async fn delete_for_pilot(&self, pilot_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcarsToken::delete_many()
            .filter(entity::acars_token::Column::PilotId.eq(pilot_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AcarsToken::delete_many()
            .filter(entity::acars_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
