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
        content::{ActivityDto, UpsertActivityDto},
    },
    server::{
        controller::content::CONTENT_TAG,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        service::activity::ActivityService,
        state::AppState,
    },
};

/// List active activities.
///
/// Public; a logged-in caller also gets their progress on each activity.
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active activities with legs", body = Vec<ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let pilot_id = AuthSession::new(&session).get_pilot_id().await?;

    let activities = ActivityService::new(&state.db).list(pilot_id).await?;

    Ok((StatusCode::OK, Json(activities)))
}

#[utoipa::path(
    get,
    path = "/api/activities/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    responses(
        (status = 200, description = "Activity with legs and the caller's progress", body = ActivityDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pilot_id = AuthSession::new(&session).get_pilot_id().await?;

    let activity = ActivityService::new(&state.db).get(id, pilot_id).await?;

    Ok((StatusCode::OK, Json(activity)))
}

#[utoipa::path(
    get,
    path = "/api/admin/activities",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All activities", body = Vec<ActivityDto>),
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

    let activities: Vec<ActivityDto> = ActivityService::new(&state.db)
        .all()
        .await?
        .into_iter()
        .map(|activity| activity.into_dto(None))
        .collect();

    Ok((StatusCode::OK, Json(activities)))
}

#[utoipa::path(
    post,
    path = "/api/admin/activities",
    tag = CONTENT_TAG,
    request_body = UpsertActivityDto,
    responses(
        (status = 201, description = "Activity created", body = ActivityDto),
        (status = 400, description = "Invalid activity", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let activity = ActivityService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto(None))))
}

#[utoipa::path(
    put,
    path = "/api/admin/activities/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    request_body = UpsertActivityDto,
    responses(
        (status = 200, description = "Activity updated", body = ActivityDto),
        (status = 400, description = "Invalid activity", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let activity = ActivityService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(activity.into_dto(None))))
}

#[utoipa::path(
    delete,
    path = "/api/admin/activities/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Activity id")
    ),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
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

    ActivityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
