pub mod admin;
pub mod auth;
pub mod helper;
pub mod portal;
