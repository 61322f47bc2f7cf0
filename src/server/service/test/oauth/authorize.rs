use super::*;

/// Tests issuing an authorization code with the default redirect.
///
/// Expected: Ok with the code and state appended to the ACARS callback URI
#[tokio::test]
async fn issues_code_for_default_redirect() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::create_pilot(db).await?;

    let grant = OauthService::new(db)
        .authorize(
            pilot.id,
            Some(CHALLENGE.to_string()),
            None,
            None,
            Some("xyz".to_string()),
        )
        .await?;

    assert_eq!(grant.code.len(), 64);
    assert!(grant.redirect_uri.starts_with(DEFAULT_REDIRECT_URI));
    assert!(grant.redirect_uri.contains(&format!("code={}", grant.code)));
    assert!(grant.redirect_uri.contains("state=xyz"));
    assert_eq!(grant.expires_in, 300);

    Ok(())
}

/// Tests request validation.
///
/// Expected: Err(BadRequest) without a challenge and with an unknown method
#[tokio::test]
async fn rejects_invalid_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::create_pilot(db).await?;
    let service = OauthService::new(db);

    let missing = service.authorize(pilot.id, None, None, None, None).await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    let method = service
        .authorize(
            pilot.id,
            Some(CHALLENGE.to_string()),
            Some("S512".to_string()),
            None,
            None,
        )
        .await;
    assert!(matches!(method, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests authorization for a blacklisted pilot.
///
/// Expected: Err(AuthError::Blacklisted)
#[tokio::test]
async fn refuses_blacklisted_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::pilot::PilotFactory::new(db)
        .status("Blacklist")
        .build()
        .await?;

    let result = OauthService::new(db)
        .authorize(pilot.id, Some(CHALLENGE.to_string()), None, None, None)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Blacklisted(_)))
    ));

    Ok(())
}
