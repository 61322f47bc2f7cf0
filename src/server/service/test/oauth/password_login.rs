use super::*;

/// Tests ACARS password login by callsign and by email.
///
/// Expected: Ok((Pilot, IssuedTokens)) for both identifiers
#[tokio::test]
async fn logs_in_by_callsign_or_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let pilot = factory::pilot::PilotFactory::new(db)
        .pilot_id("LVT42")
        .email("captain@example.com")
        .password_hash(hash_password("hunter22").unwrap())
        .build()
        .await?;
    let service = OauthService::new(db);

    let (by_callsign, _) = service.password_login("LVT42", "hunter22").await?;
    let (by_email, _) = service
        .password_login("captain@example.com", "hunter22")
        .await?;

    assert_eq!(by_callsign.id, pilot.id);
    assert_eq!(by_email.id, pilot.id);

    Ok(())
}

/// Tests ACARS password login failures.
///
/// Expected: Err(InvalidCredentials) for a wrong password, Err(BadRequest) for blanks
#[tokio::test]
async fn rejects_bad_password() -> Result<(), AppError> {
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

    let wrong = service.password_login(&pilot.pilot_id, "hunter23").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let blank = service.password_login("", "").await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    Ok(())
}
