//! Domain models and operation parameter types.
//!
//! Domain models are converted from SeaORM entities at the repository boundary with
//! `from_entity` and into shared DTOs at the controller boundary with `into_dto`. `*Param`
//! types carry the input of a single write operation.

pub mod active_flight;
pub mod activity;
pub mod auth;
pub mod bid;
pub mod dotm;
pub mod economy;
pub mod event;
pub mod fleet;
pub mod flight;
pub mod notam;
pub mod notification;
pub mod pilot;
pub mod rank;
pub mod staff;
pub mod store;
pub mod tour;
