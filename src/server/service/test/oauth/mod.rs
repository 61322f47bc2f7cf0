use crate::server::{
    error::{auth::AuthError, AppError},
    service::oauth::{CodeExchangeParam, OauthService, DEFAULT_REDIRECT_URI},
    util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory};

mod authorize;
mod exchange;
mod password_login;
mod refresh;

/// RFC 7636 appendix B verifier and its S256 challenge.
const VERIFIER: &str = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
const CHALLENGE: &str = "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM";
