use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        economy::GlobalConfigDto,
        pilot::{BlacklistEntryDto, BlacklistRequestDto, RankDto, UpsertRankDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{admin::AdminService, rank::RankService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/api/admin/config",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Economy configuration", body = GlobalConfigDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_config(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let config = AdminService::new(&state.db, &state.notifier)
        .get_config()
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

/// Update the economy configuration.
///
/// Accepts a partial object using the same keys as the GET response. Unknown keys and
/// values of the wrong type are ignored; `updated_at` and `updated_by` are set by the
/// server.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session of the admin making the change
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Stored configuration after the merge
/// - `400 Bad Request` - Body is not a JSON object
#[utoipa::path(
    put,
    path = "/api/admin/config",
    tag = ADMIN_TAG,
    request_body = Object,
    responses(
        (status = 200, description = "Configuration updated", body = GlobalConfigDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_config(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let config = AdminService::new(&state.db, &state.notifier)
        .update_config(payload, admin.full_name())
        .await?;

    Ok((StatusCode::OK, Json(config.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/blacklist",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Blacklisted pilots, most recent first", body = Vec<BlacklistEntryDto>),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blacklist(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries: Vec<BlacklistEntryDto> = AdminService::new(&state.db, &state.notifier)
        .get_blacklist()
        .await?
        .into_iter()
        .map(|pilot| pilot.into_blacklist_dto())
        .collect();

    Ok((StatusCode::OK, Json(entries)))
}

/// Blacklist a pilot by callsign or email.
///
/// Open bids and tracked flights of the pilot are cancelled and a moderation alert is
/// posted to Discord.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The blacklisted pilot
/// - `403 Forbidden` - Target is an admin
/// - `404 Not Found` - No pilot matches the identifier
/// - `409 Conflict` - Pilot already blacklisted
#[utoipa::path(
    post,
    path = "/api/admin/blacklist",
    tag = ADMIN_TAG,
    request_body = BlacklistRequestDto,
    responses(
        (status = 200, description = "Pilot blacklisted", body = BlacklistEntryDto),
        (status = 403, description = "Admin only, or target is an admin", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 409, description = "Already blacklisted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn blacklist(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BlacklistRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let pilot = AdminService::new(&state.db, &state.notifier)
        .blacklist(&payload.identifier, payload.reason, &admin)
        .await?;

    Ok((StatusCode::OK, Json(pilot.into_blacklist_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/blacklist/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Pilot database id")
    ),
    responses(
        (status = 204, description = "Blacklist lifted"),
        (status = 400, description = "Pilot is not blacklisted", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unblacklist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AdminService::new(&state.db, &state.notifier)
        .unblacklist(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/ranks",
    tag = ADMIN_TAG,
    request_body = UpsertRankDto,
    responses(
        (status = 201, description = "Rank created", body = RankDto),
        (status = 400, description = "Invalid rank", body = ErrorDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rank(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertRankDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rank = RankService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(rank.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/ranks/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Rank id")
    ),
    request_body = UpsertRankDto,
    responses(
        (status = 200, description = "Rank updated", body = RankDto),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_rank(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpsertRankDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rank = RankService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(rank.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/ranks/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Rank id")
    ),
    responses(
        (status = 204, description = "Rank deleted"),
        (status = 403, description = "Admin only", body = ErrorDto),
        (status = 404, description = "Rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rank(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    RankService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
