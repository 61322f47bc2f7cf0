//! Airline content: NOTAMs, events, tours, activities, destination of the month and staff.
//!
//! Each module pairs the public or portal read endpoints with the admin CRUD endpoints for
//! the same content.

pub mod activity;
pub mod dotm;
pub mod event;
pub mod notam;
pub mod staff;
pub mod tour;

/// Tag for grouping content endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";
