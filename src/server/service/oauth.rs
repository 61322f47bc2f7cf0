//! ACARS client authorization.
//!
//! The desktop client obtains bearer tokens either through the authorization-code flow with
//! PKCE (the pilot approves the client from a logged-in portal session) or by sending the
//! pilot's password directly. Codes and tokens are random strings; codes are stored as
//! issued and tokens only as their SHA-256 hash.

use chrono::{Duration, Utc};
use oauth2::{PkceCodeChallenge, PkceCodeVerifier};
use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::{
        acars_token::AcarsTokenRepository, pending_auth::PendingAuthRepository,
        pilot::PilotRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::{
            IssuedTokens, PendingAuth, TokenKind, ACCESS_TOKEN_TTL_SECS, AUTH_CODE_TTL_SECS,
            REFRESH_TOKEN_TTL_DAYS,
        },
        pilot::Pilot,
    },
    util::{
        password::verify_password,
        token::{hash_token, random_hex},
    },
};

pub const DEFAULT_REDIRECT_URI: &str = "levant-acars://callback";
const METHOD_S256: &str = "S256";
const METHOD_PLAIN: &str = "plain";
const CODE_LENGTH: usize = 64;
const TOKEN_LENGTH: usize = 64;

/// A freshly issued authorization code and where to send it.
#[derive(Debug, Clone)]
pub struct AuthorizationGrant {
    pub code: String,
    pub redirect_uri: String,
    pub expires_in: i64,
}

/// Parameters of a code-for-token exchange.
#[derive(Debug, Clone, Default)]
pub struct CodeExchangeParam {
    pub code: String,
    pub code_verifier: String,
    pub redirect_uri: Option<String>,
}

pub struct OauthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OauthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an authorization code for the logged-in pilot.
    ///
    /// # Arguments
    /// - `pilot_id` - Database id of the pilot in the portal session
    /// - `code_challenge` - PKCE challenge supplied by the client
    /// - `challenge_method` - `S256` (default) or `plain`
    /// - `redirect_uri` - Client callback, defaults to the ACARS custom scheme
    /// - `state` - Opaque client state echoed on the callback
    ///
    /// # Returns
    /// - `Ok(AuthorizationGrant)` - Code with the callback URI carrying it
    /// - `Err(AppError::BadRequest)` - Missing challenge, unknown method or malformed URI
    /// - `Err(AuthError::PilotNotInDatabase)` - Session pilot no longer exists
    /// - `Err(AuthError::Blacklisted)` - Pilot is suspended
    pub async fn authorize(
        &self,
        pilot_id: i32,
        code_challenge: Option<String>,
        challenge_method: Option<String>,
        redirect_uri: Option<String>,
        state: Option<String>,
    ) -> Result<AuthorizationGrant, AppError> {
        let pilot_repo = PilotRepository::new(self.db);
        let pending_repo = PendingAuthRepository::new(self.db);

        let Some(code_challenge) = code_challenge.filter(|c| !c.trim().is_empty()) else {
            return Err(AppError::BadRequest("code_challenge required".to_string()));
        };
        let challenge_method = challenge_method.unwrap_or_else(|| METHOD_S256.to_string());
        if challenge_method != METHOD_S256 && challenge_method != METHOD_PLAIN {
            return Err(AppError::BadRequest(format!(
                "Unsupported code_challenge_method '{}'",
                challenge_method
            )));
        }
        let redirect_uri = redirect_uri
            .filter(|uri| !uri.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());

        let Some(pilot) = pilot_repo.find_by_id(pilot_id).await? else {
            return Err(AuthError::PilotNotInDatabase(pilot_id).into());
        };
        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }

        let code = random_hex(CODE_LENGTH);
        let callback = callback_uri(&redirect_uri, &code, state.as_deref())?;

        pending_repo
            .create(PendingAuth {
                code: code.clone(),
                pilot_id: pilot.id,
                code_challenge,
                challenge_method,
                redirect_uri,
                expires_at: Utc::now() + Duration::seconds(AUTH_CODE_TTL_SECS),
            })
            .await?;

        Ok(AuthorizationGrant {
            code,
            redirect_uri: callback,
            expires_in: AUTH_CODE_TTL_SECS,
        })
    }

    /// Exchanges an authorization code and PKCE verifier for tokens.
    ///
    /// The code is consumed whether or not the exchange succeeds.
    ///
    /// # Returns
    /// - `Ok((Pilot, IssuedTokens))` - Tokens and the pilot they were issued to
    /// - `Err(AuthError::InvalidGrant)` - Code unknown or expired, verifier or redirect
    ///   mismatch
    /// - `Err(AuthError::PilotNotInDatabase)` - Pilot deleted since the code was issued
    /// - `Err(AuthError::Blacklisted)` - Pilot is suspended
    pub async fn exchange_code(
        &self,
        param: CodeExchangeParam,
    ) -> Result<(Pilot, IssuedTokens), AppError> {
        let pilot_repo = PilotRepository::new(self.db);
        let pending_repo = PendingAuthRepository::new(self.db);

        if param.code.is_empty() || param.code_verifier.is_empty() {
            return Err(
                AuthError::InvalidGrant("code and code_verifier are required".to_string()).into(),
            );
        }

        let Some(pending) = pending_repo.take(&param.code).await? else {
            return Err(
                AuthError::InvalidGrant("Invalid or expired authorization code".to_string())
                    .into(),
            );
        };

        if pending.expires_at <= Utc::now() {
            return Err(AuthError::InvalidGrant("Authorization code expired".to_string()).into());
        }
        if !verify_pkce(
            &param.code_verifier,
            &pending.code_challenge,
            &pending.challenge_method,
        ) {
            return Err(AuthError::InvalidGrant("PKCE verification failed".to_string()).into());
        }
        if let Some(redirect_uri) = param.redirect_uri.filter(|uri| !uri.is_empty()) {
            if redirect_uri != pending.redirect_uri {
                return Err(AuthError::InvalidGrant("redirect_uri mismatch".to_string()).into());
            }
        }

        let Some(pilot) = pilot_repo.find_by_id(pending.pilot_id).await? else {
            return Err(AuthError::PilotNotInDatabase(pending.pilot_id).into());
        };
        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }

        let pilot = pilot_repo.record_login(&pilot).await?;
        let tokens = self.issue_tokens(pilot.id).await?;

        Ok((pilot, tokens))
    }

    /// Rotates a refresh token into a new token pair.
    ///
    /// # Returns
    /// - `Ok((Pilot, IssuedTokens))` - New tokens; the presented refresh token is revoked
    /// - `Err(AuthError::InvalidToken)` - Unknown, expired or not a refresh token
    /// - `Err(AuthError::Blacklisted)` - Pilot is suspended
    pub async fn refresh(&self, refresh_token: &str) -> Result<(Pilot, IssuedTokens), AppError> {
        let pilot_repo = PilotRepository::new(self.db);
        let token_repo = AcarsTokenRepository::new(self.db);

        let token_hash = hash_token(refresh_token);
        let Some(token) = token_repo.find_by_hash(&token_hash).await? else {
            return Err(AuthError::InvalidToken.into());
        };
        if !token.is_live(TokenKind::Refresh, Utc::now()) {
            return Err(AuthError::InvalidToken.into());
        }

        let Some(pilot) = pilot_repo.find_by_id(token.pilot_id).await? else {
            return Err(AuthError::InvalidToken.into());
        };
        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }

        token_repo.delete_by_hash(&token_hash).await?;
        let tokens = self.issue_tokens(pilot.id).await?;

        Ok((pilot, tokens))
    }

    /// Direct password login used by the ACARS client.
    ///
    /// The identifier may be a pilot id or an email.
    ///
    /// # Returns
    /// - `Ok((Pilot, IssuedTokens))` - Logged-in pilot with fresh tokens
    /// - `Err(AppError::BadRequest)` - Identifier or password missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown pilot or wrong password
    /// - `Err(AuthError::Blacklisted)` - Pilot is suspended
    pub async fn password_login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<(Pilot, IssuedTokens), AppError> {
        let pilot_repo = PilotRepository::new(self.db);

        if identifier.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Pilot ID and password are required".to_string(),
            ));
        }

        let Some(pilot) = pilot_repo.find_by_identifier(identifier).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        if !verify_password(password, &pilot.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }
        if pilot.is_blacklisted() {
            return Err(AuthError::Blacklisted(pilot.pilot_id).into());
        }

        let pilot = pilot_repo.record_login(&pilot).await?;
        let tokens = self.issue_tokens(pilot.id).await?;

        Ok((pilot, tokens))
    }

    /// Resolves a bearer access token to the pilot it was issued to.
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Token is a live access token
    /// - `Err(AuthError::InvalidToken)` - Unknown, expired, refresh-only or orphaned token
    pub async fn authenticate(&self, access_token: &str) -> Result<Pilot, AppError> {
        let pilot_repo = PilotRepository::new(self.db);
        let token_repo = AcarsTokenRepository::new(self.db);

        let Some(token) = token_repo.find_by_hash(&hash_token(access_token)).await? else {
            return Err(AuthError::InvalidToken.into());
        };
        if !token.is_live(TokenKind::Access, Utc::now()) {
            return Err(AuthError::InvalidToken.into());
        }

        pilot_repo
            .find_by_id(token.pilot_id)
            .await?
            .ok_or_else(|| AuthError::InvalidToken.into())
    }

    async fn issue_tokens(&self, pilot_id: i32) -> Result<IssuedTokens, AppError> {
        let token_repo = AcarsTokenRepository::new(self.db);
        let now = Utc::now();

        let access_token = random_hex(TOKEN_LENGTH);
        let refresh_token = random_hex(TOKEN_LENGTH);

        token_repo
            .create(
                hash_token(&access_token),
                pilot_id,
                TokenKind::Access,
                now + Duration::seconds(ACCESS_TOKEN_TTL_SECS),
            )
            .await?;
        token_repo
            .create(
                hash_token(&refresh_token),
                pilot_id,
                TokenKind::Refresh,
                now + Duration::days(REFRESH_TOKEN_TTL_DAYS),
            )
            .await?;

        Ok(IssuedTokens {
            access_token,
            refresh_token,
            expires_in: ACCESS_TOKEN_TTL_SECS,
        })
    }
}

/// Checks a PKCE verifier against the stored challenge.
pub fn verify_pkce(verifier: &str, challenge: &str, method: &str) -> bool {
    match method {
        METHOD_S256 => {
            let verifier = PkceCodeVerifier::new(verifier.to_string());
            PkceCodeChallenge::from_code_verifier_sha256(&verifier).as_str() == challenge
        }
        METHOD_PLAIN => verifier == challenge,
        _ => false,
    }
}

/// Appends the code (and state when given) to the client's redirect URI.
fn callback_uri(redirect_uri: &str, code: &str, state: Option<&str>) -> Result<String, AppError> {
    let mut url = Url::parse(redirect_uri)
        .map_err(|_| AppError::BadRequest(format!("Invalid redirect_uri '{}'", redirect_uri)))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("code", code);
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            query.append_pair("state", state);
        }
    }

    Ok(url.to_string())
}
