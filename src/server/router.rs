//! Route table and OpenAPI document.
//!
//! Handlers are registered through `utoipa_axum::routes!` so the OpenAPI document is
//! built from the same list that serves requests. Swagger UI is mounted at `/api/docs`.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        acars::{self, ACARS_TAG},
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        booking::{self, BOOKING_TAG},
        content::{activity, dotm, event, notam, staff, tour, CONTENT_TAG},
        cron::{self, CRON_TAG},
        economy::{self, ECONOMY_TAG},
        fleet::{self, FLEET_TAG},
        moderation::{self, MODERATION_TAG},
        oauth::{self, OAUTH_TAG},
        pilot::{self, PILOT_TAG},
        traffic::{self, TRAFFIC_TAG},
    },
    error::AppError,
    state::AppState,
};

/// Sustained requests per second allowed to credential endpoints per client IP.
const CREDENTIAL_RATE_PER_SECOND: u64 = 2;
/// Burst allowance on top of the sustained credential rate.
const CREDENTIAL_BURST: u32 = 10;

#[derive(OpenApi)]
#[openapi(
    info(title = "Flightdeck API", description = "Virtual airline portal and ACARS backend"),
    tags(
        (name = AUTH_TAG, description = "Portal registration, login and password management"),
        (name = OAUTH_TAG, description = "ACARS client authorization with PKCE"),
        (name = ACARS_TAG, description = "Desktop ACARS client endpoints"),
        (name = BOOKING_TAG, description = "Portal flight booking"),
        (name = PILOT_TAG, description = "Roster, ranks, leaderboard and pilot settings"),
        (name = FLEET_TAG, description = "Fleet and maintenance"),
        (name = MODERATION_TAG, description = "PIREP review"),
        (name = ECONOMY_TAG, description = "Pilot store and airline finance"),
        (name = ADMIN_TAG, description = "Economy configuration, blacklist and ranks"),
        (name = CONTENT_TAG, description = "NOTAMs, events, tours, activities, DOTM and staff"),
        (name = TRAFFIC_TAG, description = "Live map traffic"),
        (name = CRON_TAG, description = "Externally triggered scheduled jobs"),
    )
)]
struct ApiDoc;

/// Builds the API router.
///
/// Credential endpoints are rate limited per client IP. ACARS endpoints answer
/// cross-origin requests from the desktop client.
///
/// # Returns
/// - `Ok(Router<AppState>)` - Every API route plus Swagger UI
/// - `Err(AppError::InternalError)` - Rate limiter configuration rejected
pub fn router() -> Result<Router<AppState>, AppError> {
    let (credential_routes, credential_api) = credential_routes().split_for_parts();
    let (acars_routes, acars_api) = acars_routes().split_for_parts();
    let (routes, mut api) = portal_routes().split_for_parts();

    api.merge(credential_api);
    api.merge(acars_api);

    let governor = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(CREDENTIAL_RATE_PER_SECOND)
        .burst_size(CREDENTIAL_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limiter configuration".to_string()))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(routes
        .merge(credential_routes.layer(GovernorLayer::new(Arc::new(governor))))
        .merge(acars_routes.layer(cors))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api)))
}

fn credential_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::forgot_password))
        .routes(routes!(auth::reset_password))
        .routes(routes!(oauth::token))
        .routes(routes!(acars::auth))
}

fn acars_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(acars::ping))
        .routes(routes!(acars::start))
        .routes(routes!(acars::position))
        .routes(routes!(acars::end))
        .routes(routes!(acars::pirep))
        .routes(routes!(acars::traffic))
        .routes(routes!(acars::pilot_stats))
        .routes(routes!(acars::aircraft_health))
        .routes(routes!(acars::get_bid, acars::create_bid))
        .routes(routes!(acars::cancel_bid))
        .routes(routes!(acars::simbrief))
        .routes(routes!(acars::github_release))
}

fn portal_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        // auth
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::change_password))
        .routes(routes!(oauth::authorize))
        // pilots
        .routes(routes!(pilot::roster))
        .routes(routes!(pilot::ranks))
        .routes(routes!(pilot::update_settings))
        .routes(routes!(pilot::jumpseat))
        .routes(routes!(pilot::leaderboard))
        .routes(routes!(pilot::notifications))
        .routes(routes!(pilot::mark_notifications_read))
        // booking
        .routes(routes!(booking::book))
        .routes(routes!(booking::current_bid))
        .routes(routes!(booking::cancel))
        // fleet
        .routes(routes!(fleet::list))
        .routes(routes!(fleet::available))
        .routes(routes!(fleet::create))
        .routes(routes!(fleet::update, fleet::retire))
        .routes(routes!(fleet::maintenance))
        .routes(routes!(fleet::repair))
        // moderation
        .routes(routes!(moderation::list))
        .routes(routes!(moderation::get, moderation::update, moderation::delete))
        .routes(routes!(moderation::file_manual))
        // economy
        .routes(routes!(economy::store))
        .routes(routes!(economy::purchase))
        .routes(routes!(economy::finance))
        .routes(routes!(economy::all_store_items, economy::create_store_item))
        .routes(routes!(economy::update_store_item, economy::delete_store_item))
        // admin
        .routes(routes!(admin::get_config, admin::update_config))
        .routes(routes!(admin::get_blacklist, admin::blacklist))
        .routes(routes!(admin::unblacklist))
        .routes(routes!(admin::create_rank))
        .routes(routes!(admin::update_rank, admin::delete_rank))
        // content
        .routes(routes!(notam::active))
        .routes(routes!(notam::all, notam::create))
        .routes(routes!(notam::update, notam::delete))
        .routes(routes!(event::list))
        .routes(routes!(event::book, event::cancel))
        .routes(routes!(event::all, event::create))
        .routes(routes!(event::update, event::delete))
        .routes(routes!(tour::list))
        .routes(routes!(tour::start))
        .routes(routes!(tour::all, tour::create))
        .routes(routes!(tour::update, tour::delete))
        .routes(routes!(activity::list))
        .routes(routes!(activity::get))
        .routes(routes!(activity::all, activity::create))
        .routes(routes!(activity::update, activity::delete))
        .routes(routes!(dotm::current))
        .routes(routes!(dotm::all, dotm::create))
        .routes(routes!(dotm::update, dotm::delete))
        .routes(routes!(staff::roster))
        .routes(routes!(staff::roles, staff::create_role))
        .routes(routes!(staff::update_role, staff::delete_role))
        .routes(routes!(staff::assign))
        .routes(routes!(staff::remove_member))
        // traffic
        .routes(routes!(traffic::active_flights))
        .routes(routes!(traffic::vatsim))
        // cron
        .routes(routes!(cron::cleanup))
        .routes(routes!(cron::weekly_salary))
        .routes(routes!(cron::daily_ops))
}
