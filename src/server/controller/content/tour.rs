use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        content::{TourDto, TourProgressDto, UpsertTourDto},
    },
    server::{
        controller::content::CONTENT_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::tour::TourService,
        state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/api/portal/tours",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active tours with legs and the caller's progress", body = Vec<TourDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tours = TourService::new(&state.db).list_for_pilot(pilot.id).await?;

    Ok((StatusCode::OK, Json(tours)))
}

/// Start a tour at its first leg.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Returns
/// - `201 Created` - Progress on leg 1
/// - `404 Not Found` - Unknown or inactive tour
/// - `409 Conflict` - Tour already started
#[utoipa::path(
    post,
    path = "/api/portal/tours/{id}/start",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Tour id")
    ),
    responses(
        (status = 201, description = "Tour started", body = TourProgressDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 409, description = "Already started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let progress = TourService::new(&state.db).start(&pilot, id).await?;

    Ok((StatusCode::CREATED, Json(progress.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/tours",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All tours with legs", body = Vec<TourDto>),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn all(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let tours: Vec<TourDto> = TourService::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(|tour| tour.into_dto(None))
        .collect();

    Ok((StatusCode::OK, Json(tours)))
}

/// Create a tour together with its legs.
///
/// Legs are numbered in the order given.
#[utoipa::path(
    post,
    path = "/api/admin/tours",
    tag = CONTENT_TAG,
    request_body = UpsertTourDto,
    responses(
        (status = 201, description = "Tour created", body = TourDto),
        (status = 400, description = "Invalid tour", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertTourDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let tour = TourService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(tour.into_dto(None))))
}

/// Replace a tour and its legs.
#[utoipa::path(
    put,
    path = "/api/admin/tours/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Tour id")
    ),
    request_body = UpsertTourDto,
    responses(
        (status = 200, description = "Tour updated", body = TourDto),
        (status = 400, description = "Invalid tour", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertTourDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let tour = TourService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(tour.into_dto(None))))
}

#[utoipa::path(
    delete,
    path = "/api/admin/tours/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Tour id")
    ),
    responses(
        (status = 204, description = "Tour deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
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

    TourService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
