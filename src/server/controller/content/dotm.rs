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
        content::{CurrentDotmDto, DotmDto, UpsertDotmDto},
    },
    server::{
        controller::content::CONTENT_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::dotm::DotmService,
        state::AppState,
    },
};

/// Current destination of the month.
///
/// `dotm` is null when no active destination matches the current month and year.
#[utoipa::path(
    get,
    path = "/api/dotm",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Current destination", body = CurrentDotmDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dotm = DotmService::new(&state.db).current().await?;

    Ok((
        StatusCode::OK,
        Json(CurrentDotmDto {
            dotm: dotm.map(|d| d.into_dto()),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/dotm",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All destinations", body = Vec<DotmDto>),
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

    let destinations: Vec<DotmDto> = DotmService::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(|d| d.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(destinations)))
}

#[utoipa::path(
    post,
    path = "/api/admin/dotm",
    tag = CONTENT_TAG,
    request_body = UpsertDotmDto,
    responses(
        (status = 201, description = "Destination created", body = DotmDto),
        (status = 400, description = "Invalid month or ICAO", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertDotmDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dotm = DotmService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(dotm.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/dotm/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    request_body = UpsertDotmDto,
    responses(
        (status = 200, description = "Destination updated", body = DotmDto),
        (status = 400, description = "Invalid month or ICAO", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertDotmDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dotm = DotmService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(dotm.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/dotm/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
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

    DotmService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
