use dioxus_logger::tracing;

use crate::{
    model::pirep::PirepSubmissionDto,
    server::{error::acars::AcarsError, util::signature::verify_pirep},
};

/// Signed PIREPs older than this are rejected as replays.
pub const REPLAY_WINDOW_MS: i64 = 300_000;

/// Verifies the HMAC signature and freshness of a submission.
///
/// An empty signature skips the HMAC comparison but still requires a fresh timestamp.
///
/// # Arguments
/// - `secret` - Shared application key
/// - `dto` - Submitted PIREP
/// - `now_ms` - Server clock in milliseconds since the epoch
pub fn check(secret: &str, dto: &PirepSubmissionDto, now_ms: i64) -> Result<(), AcarsError> {
    let (Some(timestamp), Some(signature)) = (dto.timestamp, dto.signature.as_deref()) else {
        return Err(AcarsError::UnsignedData(dto.pilot_id.clone()));
    };

    if signature.is_empty() {
        tracing::warn!(
            "{} submitted an unsigned PIREP, checking timestamp only",
            dto.pilot_id
        );
    } else if !verify_pirep(secret, &dto.pilot_id, dto.landing_rate, timestamp, signature) {
        return Err(AcarsError::SignatureMismatch(dto.pilot_id.clone()));
    }

    let age_ms = now_ms - timestamp;
    if age_ms > REPLAY_WINDOW_MS {
        return Err(AcarsError::ReplayDetected {
            pilot_id: dto.pilot_id.clone(),
            age_ms,
        });
    }

    Ok(())
}
