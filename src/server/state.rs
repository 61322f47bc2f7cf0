//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection is a
//! pool, the HTTP client and the caches wrap `Arc`s internally.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    config::Config,
    service::{
        acars::slew::SlewTracker, admin::code::AdminCodeService, discord::DiscordNotifier,
        traffic::TrafficCache,
    },
};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for SimBrief, GitHub and the network traffic feeds.
    ///
    /// Configured without redirects.
    pub http_client: reqwest::Client,

    /// Environment configuration loaded at startup.
    pub config: Arc<Config>,

    /// One-time admin bootstrap codes, issued while no admin pilot exists.
    pub admin_codes: AdminCodeService,

    /// Discord webhook delivery.
    pub notifier: DiscordNotifier,

    /// Cached VATSIM and IVAO snapshots.
    pub traffic: TrafficCache,

    /// Last known position of each pilot, for slew detection.
    pub slew: SlewTracker,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `config` - Application configuration
    /// - `admin_codes` - Service holding the admin bootstrap code
    ///
    /// # Returns
    /// - `AppState` - State with fresh traffic and slew caches
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        config: Config,
        admin_codes: AdminCodeService,
    ) -> Self {
        let notifier = DiscordNotifier::new(config.webhooks.clone());

        Self {
            db,
            http_client,
            config: Arc::new(config),
            admin_codes,
            notifier,
            traffic: TrafficCache::default(),
            slew: SlewTracker::new(),
        }
    }
}
