//! Endpoints called by the desktop ACARS client.
//!
//! Payload keys are camelCase. Every call that names a pilot passes through `AcarsGuard`,
//! which checks an accompanying bearer token against that pilot.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        acars::{
            AcarsAuthDto, AcarsAuthResponseDto, AcarsBidDto, AcarsBidResponseDto,
            AcarsTrafficListDto, AircraftHealthDto, CancelledDto, FlightRefDto,
            GithubReleaseDto, PilotStatsDto, PingDto, PingResponseDto, PositionDto,
            SimbriefPlanDto, StartFlightDto,
        },
        api::{ErrorDto, MessageDto},
        pirep::{PirepResultDto, PirepSubmissionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AcarsGuard,
        model::pilot::Pilot,
        service::{
            acars::AcarsService,
            booking::BookingService,
            fleet::FleetService,
            github::GithubReleaseService,
            oauth::OauthService,
            pilot::PilotService,
            pirep::{PirepPolicy, PirepService},
            simbrief::SimbriefService,
        },
        state::AppState,
    },
};

/// Tag for grouping ACARS endpoints in OpenAPI documentation
pub static ACARS_TAG: &str = "acars";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotQuery {
    #[serde(default)]
    pub pilot_id: String,
}

#[derive(Deserialize)]
pub struct RegistrationQuery {
    #[serde(default)]
    pub registration: String,
}

/// Checks the bearer token and resolves the pilot named by an ACARS payload.
async fn acars_pilot(
    state: &AppState,
    headers: &HeaderMap,
    claimed: &str,
) -> Result<Pilot, AppError> {
    if let Some(pilot) = AcarsGuard::new(&state.db, headers, state.config.acars_require_token)
        .check(claimed)
        .await?
    {
        return Ok(pilot);
    }

    PilotService::new(&state.db).find_for_acars(claimed).await
}

/// Log in from the ACARS client with pilot id or email and password.
///
/// Issues the same access and refresh tokens as the authorization-code flow.
///
/// # Returns
/// - `200 OK` - Tokens and pilot summary
/// - `400 Bad Request` - Missing pilot id or password
/// - `401 Unauthorized` - Unknown pilot or wrong password
/// - `403 Forbidden` - Pilot is blacklisted
#[utoipa::path(
    post,
    path = "/api/acars/auth",
    tag = ACARS_TAG,
    request_body = AcarsAuthDto,
    responses(
        (status = 200, description = "Authenticated", body = AcarsAuthResponseDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Pilot is blacklisted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn auth(
    State(state): State<AppState>,
    Json(payload): Json<AcarsAuthDto>,
) -> Result<impl IntoResponse, AppError> {
    let (pilot, tokens) = OauthService::new(&state.db)
        .password_login(&payload.pilot_id, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AcarsAuthResponseDto {
            success: true,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            pilot: pilot.to_acars_dto(),
        }),
    ))
}

/// Data link heartbeat.
///
/// # Returns
/// - `200 OK` - Link active, with server time and echoed client time
/// - `400 Bad Request` - Missing pilot id
/// - `404 Not Found` - Unknown pilot
#[utoipa::path(
    post,
    path = "/api/acars/ping",
    tag = ACARS_TAG,
    request_body = PingDto,
    responses(
        (status = 200, description = "Data link active", body = PingResponseDto),
        (status = 400, description = "Missing pilot id", body = ErrorDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ping(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PingDto>,
) -> Result<impl IntoResponse, AppError> {
    AcarsGuard::new(&state.db, &headers, state.config.acars_require_token)
        .check(&payload.pilot_id)
        .await?;

    let response = AcarsService::new(&state.db, &state.notifier, &state.slew)
        .ping(payload)
        .await?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/acars/start",
    tag = ACARS_TAG,
    request_body = StartFlightDto,
    responses(
        (status = 200, description = "Flight tracking started", body = MessageDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StartFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    AcarsGuard::new(&state.db, &headers, state.config.acars_require_token)
        .check(&payload.pilot_id)
        .await?;

    let flight = AcarsService::new(&state.db, &state.notifier, &state.slew)
        .start(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok(format!("Tracking {}", flight.callsign))),
    ))
}

/// Position report.
///
/// Upserts the pilot's active flight, runs slew detection and posts the takeoff
/// notification on the first airborne phase.
///
/// # Returns
/// - `200 OK` - Position stored
/// - `403 Forbidden` - Pilot is blacklisted
/// - `404 Not Found` - Unknown pilot
#[utoipa::path(
    post,
    path = "/api/acars/position",
    tag = ACARS_TAG,
    request_body = PositionDto,
    responses(
        (status = 200, description = "Position stored", body = MessageDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 403, description = "Pilot is blacklisted", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn position(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PositionDto>,
) -> Result<impl IntoResponse, AppError> {
    AcarsGuard::new(&state.db, &headers, state.config.acars_require_token)
        .check(&payload.pilot_id)
        .await?;

    AcarsService::new(&state.db, &state.notifier, &state.slew)
        .position(payload)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Position updated"))))
}

/// End flight tracking without filing a PIREP.
///
/// Always succeeds for a known pilot, even when no bid or active flight matches.
#[utoipa::path(
    post,
    path = "/api/acars/end",
    tag = ACARS_TAG,
    request_body = FlightRefDto,
    responses(
        (status = 200, description = "Flight ended", body = MessageDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FlightRefDto>,
) -> Result<impl IntoResponse, AppError> {
    AcarsGuard::new(&state.db, &headers, state.config.acars_require_token)
        .check(&payload.pilot_id)
        .await?;

    AcarsService::new(&state.db, &state.notifier, &state.slew)
        .end(payload)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Flight ended"))))
}

/// File a PIREP.
///
/// Hard landings beyond the reject threshold and failed checkrides are stored as rejected
/// flights and answered with 200 and an explanatory message. Accepted flights run the full
/// economy, damage, progress and credit pipeline.
///
/// # Arguments
/// - `state` - Application state containing the database, notifier and signing key
/// - `headers` - Request headers carrying the optional bearer token
/// - `payload` - Signed or unsigned submission
///
/// # Returns
/// - `200 OK` - Outcome with credits and revenue breakdown
/// - `400 Bad Request` - Missing callsign or invalid airports
/// - `403 Forbidden` - Unsigned, tampered or stale submission, or blacklisted pilot
/// - `404 Not Found` - Unknown pilot
#[utoipa::path(
    post,
    path = "/api/acars/pirep",
    tag = ACARS_TAG,
    request_body = PirepSubmissionDto,
    responses(
        (status = 200, description = "PIREP processed", body = PirepResultDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 403, description = "Signature check failed or pilot blacklisted", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pirep(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<PirepSubmissionDto>,
) -> Result<impl IntoResponse, AppError> {
    AcarsGuard::new(&state.db, &headers, state.config.acars_require_token)
        .check(&payload.pilot_id)
        .await?;

    let result = PirepService::new(
        &state.db,
        &state.notifier,
        PirepPolicy::from_config(&state.config),
    )
    .submit(payload)
    .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/acars/traffic",
    tag = ACARS_TAG,
    responses(
        (status = 200, description = "Flights with a heartbeat in the last 10 minutes", body = AcarsTrafficListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn traffic(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let traffic: Vec<_> = AcarsService::new(&state.db, &state.notifier, &state.slew)
        .traffic()
        .await?
        .into_iter()
        .map(|flight| flight.into_acars_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(AcarsTrafficListDto {
            success: true,
            count: traffic.len(),
            traffic,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/acars/pilot-stats",
    tag = ACARS_TAG,
    params(
        ("pilotId" = String, Query, description = "Pilot id, email or numeric id")
    ),
    responses(
        (status = 200, description = "Pilot career summary", body = PilotStatsDto),
        (status = 400, description = "Missing pilot id", body = ErrorDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pilot_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PilotQuery>,
) -> Result<impl IntoResponse, AppError> {
    AcarsGuard::new(&state.db, &headers, state.config.acars_require_token)
        .check(&params.pilot_id)
        .await?;

    let stats = AcarsService::new(&state.db, &state.notifier, &state.slew)
        .pilot_stats(&params.pilot_id)
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Airframe health before departure.
///
/// An aircraft found below the grounded threshold is grounded as a side effect.
#[utoipa::path(
    get,
    path = "/api/acars/aircraft-health",
    tag = ACARS_TAG,
    params(
        ("registration" = String, Query, description = "Aircraft registration")
    ),
    responses(
        (status = 200, description = "Airframe health", body = AircraftHealthDto),
        (status = 400, description = "Missing registration", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn aircraft_health(
    State(state): State<AppState>,
    Query(params): Query<RegistrationQuery>,
) -> Result<impl IntoResponse, AppError> {
    if params.registration.trim().is_empty() {
        return Err(AppError::BadRequest("registration is required".to_string()));
    }

    let health = FleetService::new(&state.db)
        .health(&params.registration)
        .await?;

    Ok((StatusCode::OK, Json(health.into_dto())))
}

/// Current booking of a pilot, with the latest SimBrief plan when linked.
///
/// SimBrief failures leave `ofp` empty rather than failing the call.
#[utoipa::path(
    get,
    path = "/api/acars/bid",
    tag = ACARS_TAG,
    params(
        ("pilotId" = String, Query, description = "Pilot id, email or numeric id")
    ),
    responses(
        (status = 200, description = "Current bid", body = AcarsBidResponseDto),
        (status = 400, description = "Missing pilot id", body = ErrorDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bid(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PilotQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = acars_pilot(&state, &headers, &params.pilot_id).await?;

    let bid = BookingService::new(&state.db).current(pilot.id).await?;

    let ofp = match pilot.simbrief_id.as_deref() {
        Some(simbrief_id) => SimbriefService::new(&state.http_client)
            .latest_ofp(simbrief_id)
            .await
            .ok(),
        _ => None,
    };

    Ok((
        StatusCode::OK,
        Json(AcarsBidResponseDto {
            success: true,
            bid: bid.map(|b| b.into_acars_dto()),
            ofp,
        }),
    ))
}

/// Book a flight from the ACARS client.
///
/// Replaces any Active bid the pilot already holds. An aircraft whose repair timer has run
/// out is returned to service on the spot. Registrations outside the fleet are booked as sent.
///
/// # Returns
/// - `201 Created` - The new bid
/// - `400 Bad Request` - Aircraft under repair, grounded or not at the departure airport
/// - `404 Not Found` - Unknown pilot
#[utoipa::path(
    post,
    path = "/api/acars/bid",
    tag = ACARS_TAG,
    request_body = AcarsBidDto,
    responses(
        (status = 201, description = "Bid created", body = AcarsBidResponseDto),
        (status = 400, description = "Aircraft unavailable", body = ErrorDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bid(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AcarsBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = acars_pilot(&state, &headers, &payload.pilot_id).await?;

    let bid = BookingService::new(&state.db)
        .acars_book(&pilot, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AcarsBidResponseDto {
            success: true,
            bid: Some(bid.into_acars_dto()),
            ofp: None,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/acars/cancel-bid",
    tag = ACARS_TAG,
    request_body = FlightRefDto,
    responses(
        (status = 200, description = "Bids cancelled", body = CancelledDto),
        (status = 401, description = "Invalid bearer token", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_bid(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FlightRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = acars_pilot(&state, &headers, &payload.pilot_id).await?;

    let cancelled = BookingService::new(&state.db).acars_cancel(&pilot).await?;

    Ok((
        StatusCode::OK,
        Json(CancelledDto {
            success: true,
            cancelled,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/acars/simbrief",
    tag = ACARS_TAG,
    params(
        ("pilotId" = String, Query, description = "Pilot id, email or numeric id")
    ),
    responses(
        (status = 200, description = "Latest SimBrief plan", body = SimbriefPlanDto),
        (status = 400, description = "No SimBrief id linked", body = ErrorDto),
        (status = 404, description = "Pilot or plan not found", body = ErrorDto),
        (status = 500, description = "SimBrief unavailable", body = ErrorDto)
    ),
)]
pub async fn simbrief(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PilotQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = acars_pilot(&state, &headers, &params.pilot_id).await?;

    let plan = SimbriefService::new(&state.http_client)
        .plan_for(&pilot)
        .await?;

    Ok((StatusCode::OK, Json(plan)))
}

/// Latest ACARS client release.
///
/// Answers `release: null` when no repository is configured or it has no releases.
#[utoipa::path(
    get,
    path = "/api/acars/github-release",
    tag = ACARS_TAG,
    responses(
        (status = 200, description = "Latest release", body = GithubReleaseDto),
        (status = 500, description = "GitHub unavailable", body = ErrorDto)
    ),
)]
pub async fn github_release(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let release = match state.config.github_repo.as_deref() {
        Some(repo) => {
            GithubReleaseService::new(
                &state.http_client,
                repo,
                state.config.github_token.as_deref(),
            )
            .latest()
            .await?
        }
        None => None,
    };

    Ok((StatusCode::OK, Json(GithubReleaseDto { release })))
}
