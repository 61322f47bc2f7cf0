//! Database repository layer for all domain entities.
//!
//! Each repository borrows the database connection and performs the CRUD operations of one
//! domain. Repositories use SeaORM entity models internally and return the server domain
//! models, keeping entity types out of the service layer.

pub mod acars_token;
pub mod active_flight;
pub mod activity;
pub mod aircraft;
pub mod bid;
pub mod config;
pub mod dotm;
pub mod event;
pub mod finance;
pub mod flight;
pub mod maintenance_log;
pub mod notam;
pub mod notification;
pub mod password_reset;
pub mod pending_auth;
pub mod pilot;
pub mod rank;
pub mod staff;
pub mod store;
pub mod tour;

#[cfg(test)]
mod test;
