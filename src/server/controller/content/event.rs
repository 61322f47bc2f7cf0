use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        content::{EventDto, UpsertEventDto},
    },
    server::{
        controller::content::CONTENT_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::event::EventService,
        state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/api/portal/events",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active events with booking counts and the caller's booking", body = Vec<EventDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let events = EventService::new(&state.db).list_for_pilot(pilot.id).await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Book the logged-in pilot on an event.
///
/// A cancelled booking can be renewed.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Returns
/// - `201 Created` - Booked
/// - `400 Bad Request` - Event full or already over
/// - `404 Not Found` - Unknown or inactive event
/// - `409 Conflict` - Already booked
#[utoipa::path(
    post,
    path = "/api/portal/events/{id}/book",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 201, description = "Booked", body = MessageDto),
        (status = 400, description = "Event full or over", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db).book(&pilot, id).await?;

    Ok((StatusCode::CREATED, Json(MessageDto::ok("Booked"))))
}

#[utoipa::path(
    delete,
    path = "/api/portal/events/{id}/book",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No booking on this event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db).cancel(&pilot, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Booking cancelled"))))
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
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

    let events = EventService::new(&state.db).all().await?;

    Ok((StatusCode::OK, Json(events)))
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = CONTENT_TAG,
    request_body = UpsertEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto(0, None))))
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    request_body = UpsertEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(event)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
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

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
