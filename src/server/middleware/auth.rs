use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::pilot::PilotRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::pilot::Pilot,
    service::oauth::OauthService,
};

pub enum Permission {
    Admin,
}

/// Session guard for portal routes.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session's pilot and checks the required permissions.
    ///
    /// Blacklisted pilots are refused even with a live session.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Logged-in pilot holding every permission
    /// - `Err(AuthError::PilotNotInSession)` - Anonymous session
    /// - `Err(AuthError::PilotNotInDatabase)` - Session pilot was deleted
    /// - `Err(AuthError::Blacklisted)` - Pilot is suspended
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        let Some(pilot_id) = AuthSession::new(self.session).get_pilot_id().await? else {
            return Err(AuthError::PilotNotInSession.into());
        };

        let Some(pilot) = pilot_repo.find_by_id(pilot_id).await? else {
            return Err(AuthError::PilotNotInDatabase(pilot_id).into());
        };

        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !pilot.is_admin {
                        return Err(AuthError::AccessDenied(
                            pilot_id,
                            "Pilot attempted to access an admin route without admin rights"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(pilot)
    }
}

/// Bearer token guard for ACARS routes.
///
/// ACARS payloads name the pilot they act for. When a bearer token accompanies the request it
/// must belong to that pilot; with `require_token` set the token is mandatory.
pub struct AcarsGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
    require_token: bool,
}

impl<'a> AcarsGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap, require_token: bool) -> Self {
        Self {
            db,
            headers,
            require_token,
        }
    }

    /// Checks the request's bearer token against the claimed pilot.
    ///
    /// # Arguments
    /// - `claimed` - Pilot id, email or numeric id from the payload
    ///
    /// # Returns
    /// - `Ok(Some(Pilot))` - Token present and issued to the claimed pilot
    /// - `Ok(None)` - No token and none required
    /// - `Err(AuthError::InvalidToken)` - Token required but missing, or not a live access token
    /// - `Err(AuthError::TokenPilotMismatch)` - Token belongs to someone else
    pub async fn check(&self, claimed: &str) -> Result<Option<Pilot>, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            if self.require_token {
                return Err(AuthError::InvalidToken.into());
            }
            return Ok(None);
        };

        let pilot = OauthService::new(self.db).authenticate(token).await?;

        let claimed = claimed.trim();
        if claimed.is_empty() || token_matches_claim(&pilot, claimed) {
            return Ok(Some(pilot));
        }

        // Claims may also be the email or numeric id of the same pilot.
        let claimed_pilot = PilotRepository::new(self.db)
            .find_by_identifier(claimed)
            .await?;
        match claimed_pilot {
            Some(claimed_pilot) if claimed_pilot.id == pilot.id => Ok(Some(pilot)),
            _ => Err(AuthError::TokenPilotMismatch(pilot.id, claimed.to_string()).into()),
        }
    }
}

/// Checks the shared secret protecting the `/api/cron/*` routes.
///
/// # Returns
/// - `Ok(())` - Header carries `Bearer {secret}`
/// - `Err(AppError::NotFound)` - No secret configured, cron routes disabled
/// - `Err(AuthError::InvalidToken)` - Missing or wrong secret
pub fn require_cron_secret(headers: &HeaderMap, secret: Option<&str>) -> Result<(), AppError> {
    let Some(secret) = secret else {
        return Err(AppError::NotFound("Cron routes are disabled".to_string()));
    };

    match bearer_token(headers) {
        Some(token) if token == secret => Ok(()),
        _ => Err(AuthError::InvalidToken.into()),
    }
}

/// Extracts the token of an `Authorization: Bearer` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

fn token_matches_claim(pilot: &Pilot, claimed: &str) -> bool {
    pilot.pilot_id.eq_ignore_ascii_case(claimed)
}
