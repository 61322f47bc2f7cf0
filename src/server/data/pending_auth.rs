use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::auth::PendingAuth;

pub struct PendingAuthRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PendingAuthRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, pending: PendingAuth) -> Result<PendingAuth, DbErr> {
        let entity = entity::pending_auth::ActiveModel {
            code: ActiveValue::Set(pending.code),
            pilot_id: ActiveValue::Set(pending.pilot_id),
            code_challenge: ActiveValue::Set(pending.code_challenge),
            challenge_method: ActiveValue::Set(pending.challenge_method),
            redirect_uri: ActiveValue::Set(pending.redirect_uri),
            expires_at: ActiveValue::Set(pending.expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PendingAuth::from_entity(entity))
    }

    /// Removes and returns the authorization code so it can be exchanged only once.
    ///
    /// # Returns
    /// - `Ok(Some(PendingAuth))` - The code existed and has been consumed
    /// - `Ok(None)` - Unknown or already used code
    /// - `Err(DbErr)` - Database error during lookup or delete
    pub async fn take(&self, code: &str) -> Result<Option<PendingAuth>, DbErr> {
        let Some(model) = entity::prelude::PendingAuth::find()
            .filter(entity::pending_auth::Column::Code.eq(code))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let result = entity::prelude::PendingAuth::delete_by_id(model.id)
            .exec(self.db)
            .await?;

        // Lost a race with a concurrent exchange
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(PendingAuth::from_entity(model)))
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PendingAuth::delete_many()
            .filter(entity::pending_auth::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
