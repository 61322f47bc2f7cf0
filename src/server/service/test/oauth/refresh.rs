use super::*;

/// Tests refresh token rotation.
///
/// Verifies that a refresh returns a new pair and the old refresh token stops working.
///
/// Expected: first refresh Ok, reuse of the old token Err(InvalidToken)
#[tokio::test]
async fn rotates_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::pilot::PilotFactory::new(db)
        .password_hash(hash_password("hunter22").unwrap())
        .build()
        .await?;
    let service = OauthService::new(db);

    let (_, first) = service.password_login(&pilot.pilot_id, "hunter22").await?;
    let (refreshed, second) = service.refresh(&first.refresh_token).await?;

    assert_eq!(refreshed.id, pilot.id);
    assert_ne!(first.refresh_token, second.refresh_token);

    let reused = service.refresh(&first.refresh_token).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests that token kinds are not interchangeable.
///
/// Expected: Err(InvalidToken) refreshing with an access token and authenticating with a
/// refresh token
#[tokio::test]
async fn token_kinds_are_distinct() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::pilot::PilotFactory::new(db)
        .password_hash(hash_password("hunter22").unwrap())
        .build()
        .await?;
    let service = OauthService::new(db);

    let (_, tokens) = service.password_login(&pilot.pilot_id, "hunter22").await?;

    let refresh_with_access = service.refresh(&tokens.access_token).await;
    assert!(matches!(
        refresh_with_access,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    let auth_with_refresh = service.authenticate(&tokens.refresh_token).await;
    assert!(matches!(
        auth_with_refresh,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
