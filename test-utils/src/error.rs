use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database, creating a table or migrating the
    /// session store failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
