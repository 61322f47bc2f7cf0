use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{cleanup::CleanupService, economy::EconomyService},
    state::AppState,
};

/// Every minute.
const CLEANUP_SCHEDULE: &str = "0 * * * * *";
/// Mondays at 00:00 UTC.
const WEEKLY_SALARY_SCHEDULE: &str = "0 0 0 * * Mon";
/// Daily at 03:00 UTC.
const DAILY_OPS_SCHEDULE: &str = "0 0 3 * * *";

/// Starts the airline operations scheduler.
///
/// Runs the same jobs exposed under `/api/cron/*`:
/// - cleanup of expired bids, abandoned flights and expired credentials, every minute
/// - weekly salary payroll
/// - daily fuel and catering deduction
///
/// A failing run is logged and retried on the next tick.
///
/// # Arguments
/// - `state`: Application state shared with the HTTP handlers
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_state = state.clone();
    let cleanup = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            match CleanupService::new(&state.db, &state.slew).run().await {
                Ok(result) => {
                    let removed = result.expired_bids
                        + result.stale_flights
                        + result.expired_auth_codes
                        + result.expired_tokens
                        + result.expired_password_resets
                        + result.old_notifications;
                    if removed > 0 {
                        tracing::info!("Cleanup removed {} records: {:?}", removed, result);
                    }
                }
                Err(e) => tracing::error!("Error running cleanup: {}", e),
            }
        })
    })?;

    let job_state = state.clone();
    let salary = Job::new_async(WEEKLY_SALARY_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = EconomyService::new(&state.db, &state.notifier)
                .pay_weekly_salaries()
                .await
            {
                tracing::error!("Error paying weekly salaries: {}", e);
            }
        })
    })?;

    let job_state = state;
    let daily_ops = Job::new_async(DAILY_OPS_SCHEDULE, move |_uuid, _lock| {
        let state = job_state.clone();

        Box::pin(async move {
            if let Err(e) = EconomyService::new(&state.db, &state.notifier)
                .run_daily_operations()
                .await
            {
                tracing::error!("Error running daily operations: {}", e);
            }
        })
    })?;

    scheduler.add(cleanup).await?;
    scheduler.add(salary).await?;
    scheduler.add(daily_ops).await?;
    scheduler.start().await?;

    tracing::info!("Operations scheduler started");

    Ok(())
}
