use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a chosen set of tables.
///
/// Tables are created in the order they were added, so entities carrying foreign keys
/// must be added after the tables they reference. The `with_*_tables` helpers add the
/// common groups in dependency order.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Pilot)
///     .with_table(Bid)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the pilot table together with ranks and notifications.
    pub fn with_pilot_tables(self) -> Self {
        self.with_table(Rank)
            .with_table(Pilot)
            .with_table(Notification)
    }

    /// Adds every table touched while booking and flying: pilots, fleet, bids,
    /// active flights and filed flights.
    pub fn with_flight_tables(self) -> Self {
        self.with_pilot_tables()
            .with_table(Aircraft)
            .with_table(MaintenanceLog)
            .with_table(Bid)
            .with_table(ActiveFlight)
            .with_table(Flight)
    }

    /// Adds the ledger tables: global configuration, airline finance and finance logs.
    pub fn with_finance_tables(self) -> Self {
        self.with_table(GlobalConfig)
            .with_table(AirlineFinance)
            .with_table(FinanceLog)
    }

    /// Adds events, tours and activities with their progress tables.
    ///
    /// Requires the pilot table, so call after `with_pilot_tables()`.
    pub fn with_content_tables(self) -> Self {
        self.with_table(Event)
            .with_table(EventBooking)
            .with_table(Tour)
            .with_table(TourLeg)
            .with_table(TourProgress)
            .with_table(Activity)
            .with_table(ActivityLeg)
            .with_table(ActivityProgress)
            .with_table(DestinationOfTheMonth)
    }

    /// Adds every table required to file a PIREP end to end.
    pub fn with_pirep_tables(self) -> Self {
        self.with_flight_tables()
            .with_finance_tables()
            .with_content_tables()
    }

    /// Adds the ACARS authorization tables.
    ///
    /// Requires the pilot table, so call after `with_pilot_tables()`.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(PendingAuth)
            .with_table(AcarsToken)
            .with_table(PasswordReset)
    }

    /// Builds the context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database and the tables created
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
