//! Virtual airline backend: ACARS ingestion, portal API and airline economy.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//! Discord is reached only through outgoing webhooks; there is no gateway connection.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request/response processing and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, traffic cache)
//! - **Startup** (`startup`) - Database, session store and admin bootstrap
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - Cleanup, weekly payroll and daily operating costs
//!
//! # Request Flow
//!
//! Portal requests carry a tower-sessions cookie and are checked with `AuthGuard`. ACARS
//! requests identify the pilot in the body or query and may carry a bearer token checked
//! by the ACARS guard. PIREP submission additionally verifies an HMAC signature before
//! any state changes. Handlers call one service, which reads and writes through the
//! repositories and returns domain models the handler converts to DTOs.
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
