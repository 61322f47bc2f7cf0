use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        pirep::{ManualPirepDto, PirepDto, UpdatePirepDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::moderation::ModerationService,
        state::AppState,
    },
};

/// Tag for grouping PIREP moderation endpoints in OpenAPI documentation
pub static MODERATION_TAG: &str = "moderation";

#[derive(Deserialize, Default)]
pub struct PirepQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// List PIREPs for review.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session of the reviewing admin
/// - `query` - Status filter, flight number or callsign search, page and page size
///
/// # Returns
/// - `200 OK` - One page of PIREPs, newest first
#[utoipa::path(
    get,
    path = "/api/admin/pireps",
    tag = MODERATION_TAG,
    params(
        ("status" = Option<String>, Query, description = "pending, approved or denied"),
        ("search" = Option<String>, Query, description = "Flight number or callsign substring"),
        ("page" = Option<u64>, Query, description = "One-based page, defaults to 1"),
        ("limit" = Option<u64>, Query, description = "Page size, defaults to 20")
    ),
    responses(
        (status = 200, description = "Page of PIREPs", body = PageDto<PirepDto>),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PirepQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let page = ModerationService::new(&state.db)
        .list(query.status.as_deref(), query.search, query.page, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/admin/pireps/{id}",
    tag = MODERATION_TAG,
    params(
        ("id" = i32, Path, description = "Flight id")
    ),
    responses(
        (status = 200, description = "PIREP", body = PirepDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "PIREP not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let flight = ModerationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Edit a PIREP or decide on it.
///
/// Approving a pending manual PIREP credits the pilot with hours and credits. Approval
/// and rejection notify the pilot.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated PIREP
/// - `400 Bad Request` - Unknown status, invalid ICAO, or approving a restricted type
/// - `404 Not Found` - Unknown PIREP
#[utoipa::path(
    put,
    path = "/api/admin/pireps/{id}",
    tag = MODERATION_TAG,
    params(
        ("id" = i32, Path, description = "Flight id")
    ),
    request_body = UpdatePirepDto,
    responses(
        (status = 200, description = "PIREP updated", body = PirepDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "PIREP not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePirepDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let flight = ModerationService::new(&state.db)
        .update(id, payload, &admin)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Delete a PIREP.
///
/// Hours and flight counts of an approved PIREP are taken back from the pilot.
#[utoipa::path(
    delete,
    path = "/api/admin/pireps/{id}",
    tag = MODERATION_TAG,
    params(
        ("id" = i32, Path, description = "Flight id")
    ),
    responses(
        (status = 204, description = "PIREP deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "PIREP not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ModerationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// File a manual PIREP for a flight ACARS didn't record.
///
/// The PIREP waits for review; nothing is credited until an admin approves it.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Returns
/// - `201 Created` - The pending PIREP
/// - `400 Bad Request` - Missing fields, invalid ICAO or non-positive flight time
#[utoipa::path(
    post,
    path = "/api/portal/pireps/manual",
    tag = MODERATION_TAG,
    request_body = ManualPirepDto,
    responses(
        (status = 201, description = "PIREP filed", body = PirepDto),
        (status = 400, description = "Invalid PIREP", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn file_manual(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ManualPirepDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let flight = ModerationService::new(&state.db)
        .file_manual(&pilot, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}
