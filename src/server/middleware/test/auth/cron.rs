use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::middleware::auth::{bearer_token, require_cron_secret};

use super::*;

fn with_authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Tests the cron secret check.
///
/// Expected: matching secret passes, wrong or missing secret is 401, unset secret disables
#[test]
fn cron_secret_guards_routes() {
    let good = with_authorization("Bearer s3cret");
    let bad = with_authorization("Bearer guess");

    assert!(require_cron_secret(&good, Some("s3cret")).is_ok());
    assert!(matches!(
        require_cron_secret(&bad, Some("s3cret")),
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
    assert!(matches!(
        require_cron_secret(&HeaderMap::new(), Some("s3cret")),
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
    assert!(matches!(
        require_cron_secret(&good, None),
        Err(AppError::NotFound(_))
    ));
}

/// Tests bearer header parsing.
///
/// Expected: scheme matched case-insensitively, other schemes and empty tokens ignored
#[test]
fn parses_bearer_header() {
    assert_eq!(bearer_token(&with_authorization("bearer abc")), Some("abc"));
    assert_eq!(bearer_token(&with_authorization("Bearer  abc ")), Some("abc"));
    assert_eq!(bearer_token(&with_authorization("Basic abc")), None);
    assert_eq!(bearer_token(&with_authorization("Bearer ")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
