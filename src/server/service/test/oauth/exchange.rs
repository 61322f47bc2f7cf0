use super::*;

/// Tests a full code exchange with an S256 verifier.
///
/// Verifies that the issued access token authenticates the pilot.
///
/// Expected: Ok((Pilot, IssuedTokens)) and authenticate returns the same pilot
#[tokio::test]
async fn exchanges_code_for_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::create_pilot(db).await?;
    let service = OauthService::new(db);

    let grant = service
        .authorize(pilot.id, Some(CHALLENGE.to_string()), None, None, None)
        .await?;

    let (exchanged, tokens) = service
        .exchange_code(CodeExchangeParam {
            code: grant.code,
            code_verifier: VERIFIER.to_string(),
            redirect_uri: Some(DEFAULT_REDIRECT_URI.to_string()),
        })
        .await?;

    assert_eq!(exchanged.id, pilot.id);
    assert_eq!(tokens.expires_in, 3600);
    assert_ne!(tokens.access_token, tokens.refresh_token);

    let authenticated = service.authenticate(&tokens.access_token).await?;
    assert_eq!(authenticated.id, pilot.id);

    Ok(())
}

/// Tests that a failed verifier still burns the code.
///
/// Expected: Err(InvalidGrant) for the wrong verifier, then Err(InvalidGrant) for the
/// correct verifier on the same code
#[tokio::test]
async fn wrong_verifier_consumes_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::create_pilot(db).await?;
    let service = OauthService::new(db);

    let grant = service
        .authorize(pilot.id, Some(CHALLENGE.to_string()), None, None, None)
        .await?;

    let wrong = service
        .exchange_code(CodeExchangeParam {
            code: grant.code.clone(),
            code_verifier: "not-the-verifier".to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidGrant(_)))
    ));

    let retry = service
        .exchange_code(CodeExchangeParam {
            code: grant.code,
            code_verifier: VERIFIER.to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        retry,
        Err(AppError::AuthErr(AuthError::InvalidGrant(_)))
    ));

    Ok(())
}

/// Tests a redirect URI that differs from the one authorized.
///
/// Expected: Err(AuthError::InvalidGrant)
#[tokio::test]
async fn rejects_redirect_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::create_pilot(db).await?;
    let service = OauthService::new(db);

    let grant = service
        .authorize(
            pilot.id,
            Some("plain-challenge".to_string()),
            Some("plain".to_string()),
            Some("http://127.0.0.1:5173/callback".to_string()),
            None,
        )
        .await?;

    let result = service
        .exchange_code(CodeExchangeParam {
            code: grant.code,
            code_verifier: "plain-challenge".to_string(),
            redirect_uri: Some("http://127.0.0.1:9999/callback".to_string()),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidGrant(_)))
    ));

    Ok(())
}

/// Tests an unknown authorization code.
///
/// Expected: Err(AuthError::InvalidGrant)
#[tokio::test]
async fn rejects_unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OauthService::new(db)
        .exchange_code(CodeExchangeParam {
            code: "missing".to_string(),
            code_verifier: VERIFIER.to_string(),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidGrant(_)))
    ));

    Ok(())
}
