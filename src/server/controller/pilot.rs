use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        pilot::{
            JumpseatDto, JumpseatResultDto, LeaderboardDto, MarkNotificationsReadDto,
            NotificationDto, PilotDto, PilotSettingsDto, RankDto, RosterEntryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{
            pilot::{LeaderboardKind, PilotService, JUMPSEAT_COST},
            rank::RankService,
        },
        state::AppState,
    },
};

/// Tag for grouping pilot endpoints in OpenAPI documentation
pub static PILOT_TAG: &str = "pilot";

#[derive(Deserialize)]
pub struct LeaderboardParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/pilots",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "Active pilots", body = Vec<RosterEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roster(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roster: Vec<RosterEntryDto> = PilotService::new(&state.db)
        .roster()
        .await?
        .into_iter()
        .map(|pilot| pilot.into_roster_dto())
        .collect();

    Ok((StatusCode::OK, Json(roster)))
}

#[utoipa::path(
    get,
    path = "/api/ranks",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "Ranks in career order", body = Vec<RankDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ranks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ranks: Vec<RankDto> = RankService::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(|rank| rank.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(ranks)))
}

/// Update the pilot's linked SimBrief, VATSIM and IVAO accounts.
///
/// Blank values unlink the account.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/pilots/me/settings",
    tag = PILOT_TAG,
    request_body = PilotSettingsDto,
    responses(
        (status = 200, description = "Settings saved", body = PilotDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PilotSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let updated = PilotService::new(&state.db)
        .update_settings(pilot.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Jumpseat to another airport for a flat fare.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session of the travelling pilot
/// - `payload` - Destination ICAO
///
/// # Returns
/// - `200 OK` - New location and remaining balance
/// - `400 Bad Request` - Invalid ICAO, already there, or insufficient balance
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/portal/jumpseat",
    tag = PILOT_TAG,
    request_body = JumpseatDto,
    responses(
        (status = 200, description = "Pilot relocated", body = JumpseatResultDto),
        (status = 400, description = "Jumpseat not possible", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn jumpseat(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<JumpseatDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let moved = PilotService::new(&state.db)
        .jumpseat(pilot.id, &payload.destination)
        .await?;

    Ok((
        StatusCode::OK,
        Json(JumpseatResultDto {
            location: moved.current_location,
            cost: JUMPSEAT_COST,
            balance: moved.balance,
        }),
    ))
}

/// Pilot rankings.
///
/// `all-time` ranks by total hours, `monthly` by approved hours this month, `credits` by
/// balance. Unknown types fall back to `all-time`.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = PILOT_TAG,
    params(
        ("type" = Option<String>, Query, description = "all-time, monthly or credits")
    ),
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let kind = LeaderboardKind::parse(params.kind.as_deref());

    let entries = PilotService::new(&state.db).leaderboard(kind).await?;

    Ok((
        StatusCode::OK,
        Json(LeaderboardDto {
            kind: kind.as_str().to_string(),
            entries,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/portal/notifications",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "Pilot's notifications, newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let notifications: Vec<NotificationDto> = PilotService::new(&state.db)
        .notifications(pilot.id)
        .await?
        .into_iter()
        .map(|n| n.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(notifications)))
}

/// Mark notifications read.
///
/// An empty id list marks every notification of the pilot.
#[utoipa::path(
    post,
    path = "/api/portal/notifications/read",
    tag = PILOT_TAG,
    request_body = MarkNotificationsReadDto,
    responses(
        (status = 204, description = "Notifications marked read"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MarkNotificationsReadDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    PilotService::new(&state.db)
        .mark_notifications_read(pilot.id, &payload.ids)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
