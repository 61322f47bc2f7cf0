//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services borrow the database connection and whatever shared state they need for the
//! duration of one request or job.

pub mod acars;
pub mod activity;
pub mod admin;
pub mod auth;
pub mod booking;
pub mod cleanup;
pub mod discord;
pub mod dotm;
pub mod economy;
pub mod event;
pub mod fleet;
pub mod github;
pub mod moderation;
pub mod notam;
pub mod oauth;
pub mod pilot;
pub mod pirep;
pub mod rank;
pub mod simbrief;
pub mod staff;
pub mod tour;
pub mod traffic;

#[cfg(test)]
mod test;
