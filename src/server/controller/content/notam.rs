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
        content::{NotamDto, UpsertNotamDto},
    },
    server::{
        controller::content::CONTENT_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notam::Notam,
        service::notam::NotamService,
        state::AppState,
    },
};

#[derive(Deserialize, Default)]
pub struct NotamQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn to_dtos(notams: Vec<Notam>) -> Vec<NotamDto> {
    notams.into_iter().map(|n| n.into_dto()).collect()
}

/// Active NOTAMs.
///
/// Ordered by priority, highest first, then newest. At most 50 are returned.
#[utoipa::path(
    get,
    path = "/api/notams",
    tag = CONTENT_TAG,
    params(
        ("type" = Option<String>, Query, description = "Only NOTAMs of this type")
    ),
    responses(
        (status = 200, description = "Active NOTAMs", body = Vec<NotamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn active(
    State(state): State<AppState>,
    Query(query): Query<NotamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let notams = NotamService::new(&state.db)
        .active(query.kind.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(notams))))
}

#[utoipa::path(
    get,
    path = "/api/admin/notams",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All NOTAMs", body = Vec<NotamDto>),
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

    let notams = NotamService::new(&state.db).all().await?;

    Ok((StatusCode::OK, Json(to_dtos(notams))))
}

#[utoipa::path(
    post,
    path = "/api/admin/notams",
    tag = CONTENT_TAG,
    request_body = UpsertNotamDto,
    responses(
        (status = 201, description = "NOTAM created", body = NotamDto),
        (status = 400, description = "Missing title", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertNotamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let notam = NotamService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(notam.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/notams/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "NOTAM id")
    ),
    request_body = UpsertNotamDto,
    responses(
        (status = 200, description = "NOTAM updated", body = NotamDto),
        (status = 400, description = "Missing title", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "NOTAM not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertNotamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let notam = NotamService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(notam.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/notams/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "NOTAM id")
    ),
    responses(
        (status = 204, description = "NOTAM deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "NOTAM not found", body = ErrorDto),
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

    NotamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
