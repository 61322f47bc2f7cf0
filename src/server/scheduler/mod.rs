//! In-process cron jobs.

pub mod operations;
