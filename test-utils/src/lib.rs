//! Flightdeck Test Utils
//!
//! Shared testing utilities for the flightdeck server. Tests build an isolated in-memory
//! SQLite database containing only the tables they touch, then seed rows through the
//! entity factories.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder selecting which entity tables to create
//! - **TestContext**: the built environment holding the database connection and session
//! - **TestError**: errors that can occur while setting the environment up
//! - **factory**: per-entity builders with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn books_a_flight() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let pilot = factory::create_pilot(db).await?;
//!     let bid = factory::create_bid(db, &pilot).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
