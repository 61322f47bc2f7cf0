//! HTTP handlers.
//!
//! Controllers check access, hand DTOs to a service and convert the resulting domain
//! models back into DTOs. Every handler carries a `#[utoipa::path]` annotation and is
//! registered in `router`.

pub mod acars;
pub mod admin;
pub mod auth;
pub mod booking;
pub mod content;
pub mod cron;
pub mod economy;
pub mod fleet;
pub mod moderation;
pub mod oauth;
pub mod pilot;
pub mod traffic;
