//! Airline account and finance ledger repository.
//!
//! The airline account is a singleton row created with the initial balance on first access.
//! Every movement of money is also recorded as a finance log entry, optionally tied to a
//! pilot and to a reference such as a flight id.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::economy::{
    AirlineAdjustment, AirlineFinance, CreateFinanceLogParam, FinanceLog, INITIAL_AIRLINE_BALANCE,
};

/// Repository for the airline account and its ledger.
pub struct FinanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceRepository<'a> {
    /// Creates a new FinanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FinanceRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the airline account, creating it with the initial balance if missing.
    pub async fn get_airline(&self) -> Result<AirlineFinance, DbErr> {
        Ok(AirlineFinance::from_entity(self.airline_model().await?))
    }

    /// Applies a signed adjustment to the airline balance and running totals.
    ///
    /// # Arguments
    /// - `adjustment` - Change to balance, total revenue and total expenses
    ///
    /// # Returns
    /// - `Ok(AirlineFinance)` - Account after the adjustment
    /// - `Err(DbErr)` - Database error during update
    pub async fn adjust_airline(
        &self,
        adjustment: AirlineAdjustment,
    ) -> Result<AirlineFinance, DbErr> {
        let model = self.airline_model().await?;

        let balance = model.balance + adjustment.balance;
        let total_revenue = model.total_revenue + adjustment.revenue;
        let total_expenses = model.total_expenses + adjustment.expenses;

        let mut active: entity::airline_finance::ActiveModel = model.into();
        active.balance = ActiveValue::Set(balance);
        active.total_revenue = ActiveValue::Set(total_revenue);
        active.total_expenses = ActiveValue::Set(total_expenses);
        active.last_updated = ActiveValue::Set(Utc::now());

        Ok(AirlineFinance::from_entity(active.update(self.db).await?))
    }

    /// Appends an entry to the finance ledger.
    pub async fn log(&self, param: CreateFinanceLogParam) -> Result<FinanceLog, DbErr> {
        let entity = entity::finance_log::ActiveModel {
            pilot_id: ActiveValue::Set(param.pilot_id),
            kind: ActiveValue::Set(param.kind.to_string()),
            amount: ActiveValue::Set(param.amount),
            description: ActiveValue::Set(param.description),
            reference_id: ActiveValue::Set(param.reference_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FinanceLog::from_entity(entity))
    }

    /// Appends several ledger entries in order.
    pub async fn log_many(&self, params: Vec<CreateFinanceLogParam>) -> Result<(), DbErr> {
        for param in params {
            self.log(param).await?;
        }
        Ok(())
    }

    /// Most recent ledger entries, newest first.
    pub async fn recent_logs(&self, limit: u64) -> Result<Vec<FinanceLog>, DbErr> {
        let entities = entity::prelude::FinanceLog::find()
            .order_by_desc(entity::finance_log::Column::CreatedAt)
            .order_by_desc(entity::finance_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(FinanceLog::from_entity).collect())
    }

    /// Deletes every ledger entry referencing the given id.
    pub async fn delete_logs_by_reference(&self, reference_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::FinanceLog::delete_many()
            .filter(entity::finance_log::Column::ReferenceId.eq(reference_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn airline_model(&self) -> Result<entity::airline_finance::Model, DbErr> {
        if let Some(model) = entity::prelude::AirlineFinance::find()
            .order_by_asc(entity::airline_finance::Column::Id)
            .one(self.db)
            .await?
        {
            return Ok(model);
        }

        entity::airline_finance::ActiveModel {
            balance: ActiveValue::Set(INITIAL_AIRLINE_BALANCE),
            total_revenue: ActiveValue::Set(0),
            total_expenses: ActiveValue::Set(0),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
