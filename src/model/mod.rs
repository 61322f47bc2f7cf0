//! Data transfer objects shared by the server API and the portal client.
//!
//! Types here are plain serde structs. With the `server` feature they additionally derive
//! `utoipa::ToSchema` for the OpenAPI document. The ACARS surface uses camelCase keys to
//! match the desktop client; every other route uses snake_case.

pub mod acars;
pub mod api;
pub mod auth;
pub mod bid;
pub mod content;
pub mod economy;
pub mod fleet;
pub mod pilot;
pub mod pirep;
pub mod traffic;
