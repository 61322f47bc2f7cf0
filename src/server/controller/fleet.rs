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
        api::ErrorDto,
        fleet::{
            AircraftDto, CreateAircraftDto, MaintenanceOverviewDto, RepairRequestDto,
            RepairResultDto, UpdateAircraftDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::fleet::Aircraft,
        service::fleet::FleetService,
        state::AppState,
    },
};

/// Tag for grouping fleet endpoints in OpenAPI documentation
pub static FLEET_TAG: &str = "fleet";

#[derive(Deserialize, Default)]
pub struct FleetQuery {
    pub location: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct LocationQuery {
    pub location: String,
}

fn to_dtos(aircraft: Vec<Aircraft>) -> Vec<AircraftDto> {
    aircraft.into_iter().map(|a| a.into_dto()).collect()
}

/// List active aircraft.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional ICAO location and status filters
///
/// # Returns
/// - `200 OK` - Aircraft ordered by registration
/// - `400 Bad Request` - Unknown status or malformed ICAO
#[utoipa::path(
    get,
    path = "/api/fleet",
    tag = FLEET_TAG,
    params(
        ("location" = Option<String>, Query, description = "ICAO the aircraft is parked at"),
        ("status" = Option<String>, Query, description = "Available, InUse, Maintenance or Grounded")
    ),
    responses(
        (status = 200, description = "Fleet", body = Vec<AircraftDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<FleetQuery>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = FleetService::new(&state.db)
        .list(query.location, query.status)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(aircraft))))
}

#[utoipa::path(
    get,
    path = "/api/fleet/available",
    tag = FLEET_TAG,
    params(
        ("location" = String, Query, description = "ICAO to search")
    ),
    responses(
        (status = 200, description = "Available aircraft at the airport", body = Vec<AircraftDto>),
        (status = 400, description = "Malformed ICAO", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn available(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = FleetService::new(&state.db)
        .available_at(&query.location)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(aircraft))))
}

/// Add an aircraft to the fleet.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new aircraft at full health
/// - `400 Bad Request` - Malformed registration or location
/// - `409 Conflict` - Registration already exists
#[utoipa::path(
    post,
    path = "/api/admin/fleet",
    tag = FLEET_TAG,
    request_body = CreateAircraftDto,
    responses(
        (status = 201, description = "Aircraft created", body = AircraftDto),
        (status = 400, description = "Invalid aircraft", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 409, description = "Registration taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let aircraft = FleetService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(aircraft.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/fleet/{registration}",
    tag = FLEET_TAG,
    params(
        ("registration" = String, Path, description = "Aircraft registration")
    ),
    request_body = UpdateAircraftDto,
    responses(
        (status = 200, description = "Aircraft updated", body = AircraftDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(registration): Path<String>,
    Json(payload): Json<UpdateAircraftDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let aircraft = FleetService::new(&state.db)
        .update(&registration, payload)
        .await?;

    Ok((StatusCode::OK, Json(aircraft.into_dto())))
}

/// Retire an aircraft.
///
/// Retired aircraft are hidden from the fleet list but keep their flight history.
#[utoipa::path(
    delete,
    path = "/api/admin/fleet/{registration}",
    tag = FLEET_TAG,
    params(
        ("registration" = String, Path, description = "Aircraft registration")
    ),
    responses(
        (status = 204, description = "Aircraft retired"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn retire(
    State(state): State<AppState>,
    session: Session,
    Path(registration): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    FleetService::new(&state.db).retire(&registration).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/maintenance",
    tag = FLEET_TAG,
    responses(
        (status = 200, description = "Fleet health, repair costs and recent maintenance", body = MaintenanceOverviewDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn maintenance(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let overview = FleetService::new(&state.db).maintenance_overview().await?;

    Ok((StatusCode::OK, Json(overview.into_dto())))
}

/// Repair an aircraft at the airline's expense.
///
/// `FULL` restores 100% health; `MINIMUM` restores just above the grounding threshold.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session of the admin ordering the repair
/// - `payload` - Registration and repair type
///
/// # Returns
/// - `200 OK` - Health before and after, cost and remaining airline balance
/// - `400 Bad Request` - Unknown repair type, nothing to repair, or insufficient funds
/// - `404 Not Found` - Unknown registration
#[utoipa::path(
    post,
    path = "/api/admin/maintenance/repair",
    tag = FLEET_TAG,
    request_body = RepairRequestDto,
    responses(
        (status = 200, description = "Aircraft repaired", body = RepairResultDto),
        (status = 400, description = "Repair not possible", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn repair(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RepairRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let outcome = FleetService::new(&state.db)
        .repair(&payload.registration, &payload.repair_type, admin.full_name())
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
