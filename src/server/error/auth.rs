use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No pilot id is stored in the session.
    #[error("No pilot is logged in")]
    PilotNotInSession,

    /// The session references a pilot that no longer exists.
    #[error("Pilot {0} from session was not found in the database")]
    PilotNotInDatabase(i32),

    /// The pilot lacks a permission required by the route.
    #[error("Pilot {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown login identifier or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The pilot account is blacklisted.
    #[error("Pilot {0} is blacklisted")]
    Blacklisted(String),

    /// The login came from a different machine than the one bound to the account.
    #[error("Pilot {0} attempted login from an unrecognised device")]
    DeviceMismatch(String),

    /// Missing, unknown or expired bearer token.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Bearer token belongs to a different pilot than the one claimed in the payload.
    #[error("Token issued to pilot {0} used for pilot {1}")]
    TokenPilotMismatch(i32, String),

    /// Authorization code exchange failed.
    #[error("{0}")]
    InvalidGrant(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `PilotNotInSession` / `InvalidCredentials` / `InvalidToken` / `TokenPilotMismatch` → 401
/// - `AccessDenied` / `Blacklisted` / `DeviceMismatch` → 403
/// - `PilotNotInDatabase` → 404
/// - `InvalidGrant` → 400 with the grant failure message
///
/// Details are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::PilotNotInSession => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            Self::InvalidToken | Self::TokenPilotMismatch(_, _) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Forbidden".to_string()),
            Self::Blacklisted(_) => (
                StatusCode::FORBIDDEN,
                "Your account has been suspended".to_string(),
            ),
            Self::DeviceMismatch(_) => (
                StatusCode::FORBIDDEN,
                "This account is locked to another device".to_string(),
            ),
            Self::PilotNotInDatabase(_) => (StatusCode::NOT_FOUND, "Pilot not found".to_string()),
            Self::InvalidGrant(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
