use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Integrity failures on data submitted by the ACARS client.
#[derive(Error, Debug)]
pub enum AcarsError {
    /// Signing is enabled but the payload carried no timestamp or signature.
    #[error("Unsigned PIREP from {0}")]
    UnsignedData(String),

    /// The payload signature does not match the server-side HMAC.
    #[error("Signature mismatch on PIREP from {0}")]
    SignatureMismatch(String),

    /// The signed timestamp is outside the accepted window.
    #[error("Stale PIREP from {pilot_id}: {age_ms} ms old")]
    ReplayDetected { pilot_id: String, age_ms: i64 },
}

/// All ACARS integrity failures are logged as warnings and answered with 403.
impl IntoResponse for AcarsError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        let message = match self {
            Self::UnsignedData(_) => "Unsigned data rejected",
            Self::SignatureMismatch(_) => "Data integrity check failed",
            Self::ReplayDetected { .. } => "Request expired",
        };

        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
