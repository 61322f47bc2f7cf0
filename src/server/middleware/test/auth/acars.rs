use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use super::*;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn issue(
    db: &sea_orm::DatabaseConnection,
    pilot_id: i32,
    token: &str,
    kind: TokenKind,
) -> Result<(), AppError> {
    AcarsTokenRepository::new(db)
        .create(
            hash_token(token),
            pilot_id,
            kind,
            Utc::now() + Duration::hours(1),
        )
        .await?;
    Ok(())
}

/// Tests requests without a bearer token.
///
/// Expected: Ok(None) when tokens are optional, Err(AuthError::InvalidToken) when required
#[tokio::test]
async fn token_optional_unless_required() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();

    let result = AcarsGuard::new(db, &headers, false).check("LVT1").await?;
    assert!(result.is_none());

    let result = AcarsGuard::new(db, &headers, true).check("LVT1").await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid access token presented for its own pilot.
///
/// Expected: Ok(Some(Pilot)) whether the claim is the pilot id, lowercase id or email
#[tokio::test]
async fn accepts_token_of_claimed_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    issue(db, pilot.id, "access-token", TokenKind::Access).await?;
    let headers = bearer("access-token");
    let guard = AcarsGuard::new(db, &headers, true);

    for claim in [
        pilot.pilot_id.clone(),
        pilot.pilot_id.to_lowercase(),
        pilot.email.clone(),
    ] {
        let resolved = guard.check(&claim).await?;
        assert_eq!(resolved.map(|p| p.id), Some(pilot.id));
    }

    Ok(())
}

/// Tests a token used on behalf of another pilot.
///
/// Expected: Err(AuthError::TokenPilotMismatch)
#[tokio::test]
async fn rejects_token_of_other_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_pilot(db).await?;
    let other = factory::create_pilot(db).await?;
    issue(db, owner.id, "owner-token", TokenKind::Access).await?;
    let headers = bearer("owner-token");

    let result = AcarsGuard::new(db, &headers, false)
        .check(&other.pilot_id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenPilotMismatch(id, _))) if id == owner.id
    ));

    Ok(())
}

/// Tests refresh tokens and unknown tokens sent as bearer.
///
/// Expected: Err(AuthError::InvalidToken) for both
#[tokio::test]
async fn rejects_refresh_and_unknown_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    issue(db, pilot.id, "refresh-token", TokenKind::Refresh).await?;

    for token in ["refresh-token", "never-issued"] {
        let headers = bearer(token);
        let result = AcarsGuard::new(db, &headers, false)
            .check(&pilot.pilot_id)
            .await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    Ok(())
}
