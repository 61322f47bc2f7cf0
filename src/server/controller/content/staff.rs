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
        content::{AssignStaffDto, StaffGroupDto, StaffRoleDto, UpsertStaffRoleDto},
    },
    server::{
        controller::content::CONTENT_TAG,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::staff::StaffService,
        state::AppState,
    },
};

/// Public staff roster, grouped by active role in display order.
#[utoipa::path(
    get,
    path = "/api/staff/members",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Staff grouped by role", body = Vec<StaffGroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roster(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = StaffService::new(&state.db).roster().await?;

    Ok((StatusCode::OK, Json(groups)))
}

#[utoipa::path(
    get,
    path = "/api/admin/staff/roles",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All staff roles", body = Vec<StaffRoleDto>),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let roles: Vec<StaffRoleDto> = StaffService::new(&state.db)
        .roles()
        .await?
        .into_iter()
        .map(|role| role.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(roles)))
}

#[utoipa::path(
    post,
    path = "/api/admin/staff/roles",
    tag = CONTENT_TAG,
    request_body = UpsertStaffRoleDto,
    responses(
        (status = 201, description = "Role created", body = StaffRoleDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertStaffRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = StaffService::new(&state.db).create_role(payload).await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/staff/roles/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Role id")
    ),
    request_body = UpsertStaffRoleDto,
    responses(
        (status = 200, description = "Role updated", body = StaffRoleDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertStaffRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = StaffService::new(&state.db).update_role(id, payload).await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

/// Delete a staff role and its memberships.
#[utoipa::path(
    delete,
    path = "/api/admin/staff/roles/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Role id")
    ),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    StaffService::new(&state.db).delete_role(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a pilot to a staff role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - Pilot assigned
/// - `404 Not Found` - Unknown role or pilot callsign
/// - `409 Conflict` - Pilot already holds the role
#[utoipa::path(
    post,
    path = "/api/admin/staff/members",
    tag = CONTENT_TAG,
    request_body = AssignStaffDto,
    responses(
        (status = 201, description = "Pilot assigned", body = MessageDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Role or pilot not found", body = ErrorDto),
        (status = 409, description = "Already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AssignStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pilot_id = payload.pilot_id.trim().to_uppercase();
    StaffService::new(&state.db).assign(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::ok(format!("{} assigned", pilot_id))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admin/staff/members/{id}",
    tag = CONTENT_TAG,
    params(
        ("id" = i32, Path, description = "Membership id")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    StaffService::new(&state.db).remove_member(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
