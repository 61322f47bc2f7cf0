use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            ChangePasswordDto, ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto,
            SessionDto,
        },
        pilot::PilotDto,
    },
    server::{
        data::pilot::PilotRepository,
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new pilot account.
///
/// Names are capitalised, the email lowercased and the callsign uppercased. A base of
/// `RANDOM` assigns one of the hubs. The account starts as an Active Cadet located at its
/// base. Registration does not log the pilot in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration form
///
/// # Returns
/// - `201 Created` - The new pilot profile
/// - `400 Bad Request` - Missing fields, malformed callsign or base, taken callsign or email
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Pilot registered", body = PilotDto),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthService::new(&state.db, &state.admin_codes)
        .register(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(pilot.into_dto())))
}

/// Log in with email and password.
///
/// The first hardware id a pilot logs in with is bound to the account; later logins must
/// present the same one. A valid admin bootstrap code grants admin rights. Dormant pilots
/// are reactivated.
///
/// # Arguments
/// - `state` - Application state containing the database connection and admin codes
/// - `session` - Session the pilot id is stored in
/// - `payload` - Credentials, optional hardware id and admin code
///
/// # Returns
/// - `200 OK` - Session with the logged-in pilot
/// - `400 Bad Request` - Missing email or password
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Blacklisted, or logging in from another device
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = SessionDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Blacklisted or device mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthService::new(&state.db, &state.admin_codes)
        .login(payload)
        .await?;

    AuthSession::new(&session).set_pilot_id(pilot.id).await?;

    Ok((
        StatusCode::OK,
        Json(SessionDto {
            user: Some(pilot.into_dto()),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Logged out"))))
}

/// Get the logged-in pilot.
///
/// Never fails for anonymous callers; `user` is null instead. A session pointing at a
/// deleted pilot is treated as logged out.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session", body = SessionDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = match AuthSession::new(&session).get_pilot_id().await? {
        Some(pilot_id) => PilotRepository::new(&state.db)
            .find_by_id(pilot_id)
            .await?
            .map(|pilot| pilot.into_dto()),
        None => None,
    };

    Ok((StatusCode::OK, Json(SessionDto { user })))
}

/// Change the logged-in pilot's password.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password shorter than 8 characters
/// - `401 Unauthorized` - Not logged in or current password wrong
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Password too short", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db, &state.admin_codes)
        .change_password(pilot.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Password updated"))))
}

/// Request a password reset.
///
/// Always answers 200 so the endpoint can't be used to probe for registered emails.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset requested", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.admin_codes)
        .forgot_password(&payload.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::ok(
            "If an account exists with that email, a reset link has been issued",
        )),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Unknown, used or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.admin_codes)
        .reset_password(&payload.token, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::ok("Password has been reset"))))
}
