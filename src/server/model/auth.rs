//! Authentication artefacts for the ACARS authorization flow and password resets.

use chrono::{DateTime, Utc};

/// Lifetime of an authorization code.
pub const AUTH_CODE_TTL_SECS: i64 = 300;
/// Lifetime of an access token.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;
/// Lifetime of a refresh token.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 30;
/// Lifetime of a password-reset token.
pub const PASSWORD_RESET_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "Access",
            Self::Refresh => "Refresh",
        }
    }
}

/// Authorization code awaiting exchange by the ACARS client.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAuth {
    pub code: String,
    pub pilot_id: i32,
    pub code_challenge: String,
    pub challenge_method: String,
    pub redirect_uri: String,
    pub expires_at: DateTime<Utc>,
}

impl PendingAuth {
    pub fn from_entity(entity: entity::pending_auth::Model) -> Self {
        Self {
            code: entity.code,
            pilot_id: entity.pilot_id,
            code_challenge: entity.code_challenge,
            challenge_method: entity.challenge_method,
            redirect_uri: entity.redirect_uri,
            expires_at: entity.expires_at,
        }
    }
}

/// Stored bearer token; only the SHA-256 hash of the token is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AcarsToken {
    pub pilot_id: i32,
    pub kind: String,
    pub expires_at: DateTime<Utc>,
}

impl AcarsToken {
    pub fn from_entity(entity: entity::acars_token::Model) -> Self {
        Self {
            pilot_id: entity.pilot_id,
            kind: entity.kind,
            expires_at: entity.expires_at,
        }
    }

    pub fn is_live(&self, kind: TokenKind, now: DateTime<Utc>) -> bool {
        self.kind == kind.as_str() && self.expires_at > now
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReset {
    pub id: i32,
    pub pilot_id: i32,
    pub used: bool,
    pub expires_at: DateTime<Utc>,
}

impl PasswordReset {
    pub fn from_entity(entity: entity::password_reset::Model) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            used: entity.used,
            expires_at: entity.expires_at,
        }
    }
}

/// Access and refresh token pair handed to the ACARS client.
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}
