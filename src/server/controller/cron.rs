//! Externally triggered runs of the scheduled jobs.
//!
//! The in-process scheduler already runs these; the routes exist for hosts that prefer an
//! external cron. Every route requires `Authorization: Bearer {CRON_SECRET}` and answers
//! 404 when no secret is configured.

use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        economy::{CleanupResultDto, DailyOpsResultDto, PayrollResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::require_cron_secret,
        service::{cleanup::CleanupService, economy::EconomyService},
        state::AppState,
    },
};

/// Tag for grouping cron endpoints in OpenAPI documentation
pub static CRON_TAG: &str = "cron";

#[utoipa::path(
    get,
    path = "/api/cron/cleanup",
    tag = CRON_TAG,
    responses(
        (status = 200, description = "Records removed per category", body = CleanupResultDto),
        (status = 401, description = "Wrong cron secret", body = ErrorDto),
        (status = 404, description = "Cron routes disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cleanup(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_cron_secret(&headers, state.config.cron_secret.as_deref())?;

    let result = CleanupService::new(&state.db, &state.slew).run().await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/cron/weekly-salary",
    tag = CRON_TAG,
    responses(
        (status = 200, description = "Salaries paid", body = PayrollResultDto),
        (status = 401, description = "Wrong cron secret", body = ErrorDto),
        (status = 404, description = "Cron routes disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn weekly_salary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_cron_secret(&headers, state.config.cron_secret.as_deref())?;

    let result = EconomyService::new(&state.db, &state.notifier)
        .pay_weekly_salaries()
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/api/cron/daily-ops",
    tag = CRON_TAG,
    responses(
        (status = 200, description = "Daily operating costs deducted", body = DailyOpsResultDto),
        (status = 401, description = "Wrong cron secret", body = ErrorDto),
        (status = 404, description = "Cron routes disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn daily_ops(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    require_cron_secret(&headers, state.config.cron_secret.as_deref())?;

    let result = EconomyService::new(&state.db, &state.notifier)
        .run_daily_operations()
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
