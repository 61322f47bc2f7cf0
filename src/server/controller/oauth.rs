use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthorizeDto, AuthorizeResponseDto, TokenRequestDto, TokenResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{auth::IssuedTokens, pilot::Pilot},
        service::oauth::{CodeExchangeParam, OauthService},
        state::AppState,
    },
};

/// Tag for grouping ACARS authorization endpoints in OpenAPI documentation
pub static OAUTH_TAG: &str = "oauth";

const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
const GRANT_REFRESH_TOKEN: &str = "refresh_token";

/// Authorize the ACARS client for the logged-in pilot.
///
/// The desktop client opens the portal, the pilot confirms, and the portal calls this
/// endpoint to mint a short-lived authorization code bound to the client's PKCE challenge.
///
/// # Access Control
/// - Logged-in pilot
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Portal session of the pilot granting access
/// - `payload` - PKCE challenge, method, redirect URI and client state
///
/// # Returns
/// - `200 OK` - Code and the redirect URI carrying it
/// - `400 Bad Request` - Missing challenge or malformed redirect URI
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Pilot is blacklisted
#[utoipa::path(
    post,
    path = "/api/auth/oauth/authorize",
    tag = OAUTH_TAG,
    request_body = AuthorizeDto,
    responses(
        (status = 200, description = "Authorization code issued", body = AuthorizeResponseDto),
        (status = 400, description = "Invalid authorization request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Pilot is blacklisted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn authorize(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AuthorizeDto>,
) -> Result<impl IntoResponse, AppError> {
    let pilot = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let grant = OauthService::new(&state.db)
        .authorize(
            pilot.id,
            payload.code_challenge,
            payload.code_challenge_method,
            payload.redirect_uri,
            payload.state,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(AuthorizeResponseDto {
            code: grant.code,
            redirect_uri: grant.redirect_uri,
            expires_in: grant.expires_in,
        }),
    ))
}

/// Exchange an authorization code or refresh token for ACARS tokens.
///
/// # Arguments
/// - `payload` - `grant_type` of `authorization_code` (with code and verifier) or
///   `refresh_token`
///
/// # Returns
/// - `200 OK` - Access and refresh tokens with a pilot summary
/// - `400 Bad Request` - Unknown grant type, or a code that is unknown, expired or fails PKCE
/// - `401 Unauthorized` - Unknown or expired refresh token
/// - `403 Forbidden` - Pilot is blacklisted
/// - `404 Not Found` - The code's pilot no longer exists
#[utoipa::path(
    post,
    path = "/api/auth/oauth/token",
    tag = OAUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Tokens issued", body = TokenResponseDto),
        (status = 400, description = "Invalid grant", body = ErrorDto),
        (status = 401, description = "Invalid refresh token", body = ErrorDto),
        (status = 403, description = "Pilot is blacklisted", body = ErrorDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = OauthService::new(&state.db);

    let (pilot, tokens) = match payload.grant_type.as_str() {
        GRANT_AUTHORIZATION_CODE => {
            let (Some(code), Some(code_verifier)) = (payload.code, payload.code_verifier) else {
                return Err(AppError::BadRequest(
                    "code and code_verifier are required".to_string(),
                ));
            };

            service
                .exchange_code(CodeExchangeParam {
                    code,
                    code_verifier,
                    redirect_uri: payload.redirect_uri,
                })
                .await?
        }
        GRANT_REFRESH_TOKEN => {
            let Some(refresh_token) = payload.refresh_token else {
                return Err(AppError::BadRequest("refresh_token is required".to_string()));
            };

            service.refresh(&refresh_token).await?
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Unsupported grant_type: {}",
                other
            )))
        }
    };

    Ok((StatusCode::OK, Json(token_response(&pilot, tokens))))
}

fn token_response(pilot: &Pilot, tokens: IssuedTokens) -> TokenResponseDto {
    TokenResponseDto {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: tokens.expires_in,
        pilot: pilot.to_acars_dto(),
    }
}
