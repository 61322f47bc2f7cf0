use chrono::{Duration, Utc};

use crate::server::{
    data::acars_token::AcarsTokenRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AcarsGuard, AuthGuard, Permission},
        session::AuthSession,
    },
    model::auth::TokenKind,
    util::token::hash_token,
};
use test_utils::{builder::TestBuilder, factory};

mod acars;
mod cron;
mod require;
