use crate::server::{
    data::{
        acars_token::AcarsTokenRepository, password_reset::PasswordResetRepository,
        pending_auth::PendingAuthRepository,
    },
    model::auth::{PendingAuth, TokenKind},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod acars_token;
mod password_reset;
mod pending_auth;
