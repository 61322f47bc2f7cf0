use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::auth::PasswordReset;

pub struct PasswordResetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasswordResetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        token_hash: String,
        pilot_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<PasswordReset, DbErr> {
        let entity = entity::password_reset::ActiveModel {
            token_hash: ActiveValue::Set(token_hash),
            pilot_id: ActiveValue::Set(pilot_id),
            used: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PasswordReset::from_entity(entity))
    }

    pub async fn find_by_hash(&self, token_hash: &str) -> Result<Option<PasswordReset>, DbErr> {
        let entity = entity::prelude::PasswordReset::find()
            .filter(entity::password_reset::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await?;

        Ok(entity.map(PasswordReset::from_entity))
    }

    /// Flags a reset as used; returns false when it was already used.
    pub async fn mark_used(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PasswordReset::update_many()
            .filter(entity::password_reset::Column::Id.eq(id))
            .filter(entity::password_reset::Column::Used.eq(false))
            .col_expr(
                entity::password_reset::Column::Used,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Drops expired and used resets.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::PasswordReset::delete_many()
            .filter(
                sea_orm::Condition::any()
                    .add(entity::password_reset::Column::ExpiresAt.lte(now))
                    .add(entity::password_reset::Column::Used.eq(true)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
