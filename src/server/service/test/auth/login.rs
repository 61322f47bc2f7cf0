use super::*;

/// Tests a successful login restoring a dormant pilot.
///
/// Expected: Ok(Pilot) with status Active and last_activity stamped
#[tokio::test]
async fn logs_in_and_restores_dormant_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let pilot = factory::pilot::PilotFactory::new(db)
        .email("leave@example.com")
        .password_hash(hash_password("hunter22").unwrap())
        .status("OnLeave")
        .build()
        .await?;

    let logged_in = AuthService::new(db, &codes)
        .login(login_dto("Leave@Example.com", "hunter22"))
        .await?;

    assert_eq!(logged_in.id, pilot.id);
    assert_eq!(logged_in.status, PilotStatus::Active);
    assert!(logged_in.last_activity.is_some());

    Ok(())
}

/// Tests wrong password and unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    factory::pilot::PilotFactory::new(db)
        .email("pilot@example.com")
        .password_hash(hash_password("hunter22").unwrap())
        .build()
        .await?;

    let wrong_password = service.login(login_dto("pilot@example.com", "hunter23")).await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service.login(login_dto("nobody@example.com", "hunter22")).await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let missing = service.login(login_dto("", "")).await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that blacklisted pilots cannot log in.
///
/// Expected: Err(AuthError::Blacklisted)
#[tokio::test]
async fn rejects_blacklisted_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    factory::pilot::PilotFactory::new(db)
        .email("banned@example.com")
        .password_hash(hash_password("hunter22").unwrap())
        .status("Blacklist")
        .build()
        .await?;

    let result = AuthService::new(db, &codes)
        .login(login_dto("banned@example.com", "hunter22"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Blacklisted(_)))
    ));

    Ok(())
}

/// Tests hardware id binding.
///
/// Verifies that the first hwid is bound and a different one is refused afterwards.
///
/// Expected: first login Ok, second with another hwid Err(DeviceMismatch), same hwid Ok
#[tokio::test]
async fn binds_first_hwid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let pilot = factory::pilot::PilotFactory::new(db)
        .email("device@example.com")
        .password_hash(hash_password("hunter22").unwrap())
        .build()
        .await?;

    let mut dto = login_dto("device@example.com", "hunter22");
    dto.hwid = Some("HW-1".to_string());
    service.login(dto.clone()).await?;

    let stored = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(stored.hwid.as_deref(), Some("HW-1"));

    let mut other = dto.clone();
    other.hwid = Some("HW-2".to_string());
    let result = service.login(other).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::DeviceMismatch(_)))
    ));

    assert!(service.login(dto).await.is_ok());

    Ok(())
}

/// Tests admin bootstrap through a login carrying the code.
///
/// Expected: pilot becomes admin and the code cannot be used again
#[tokio::test]
async fn admin_code_grants_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let code = codes.generate().await;

    let pilot = factory::pilot::PilotFactory::new(db)
        .email("first@example.com")
        .password_hash(hash_password("hunter22").unwrap())
        .build()
        .await?;

    let mut dto = login_dto("first@example.com", "hunter22");
    dto.admin_code = Some(code.clone());
    AuthService::new(db, &codes).login(dto).await?;

    let stored = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert!(stored.is_admin);
    assert!(!codes.validate_and_consume(&code).await);

    Ok(())
}
