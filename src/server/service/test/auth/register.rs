use super::*;

/// Tests registering a new pilot.
///
/// Verifies that names are capitalised, the email lowercased, the callsign used as the
/// pilot id and the password stored as a bcrypt hash.
///
/// Expected: Ok(Pilot) as an Active Cadet based at the chosen airport
#[tokio::test]
async fn registers_cadet_at_base() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let pilot = AuthService::new(db, &codes)
        .register(register_dto("lvt7a", "Yousef@Example.com"))
        .await?;

    assert_eq!(pilot.pilot_id, "LVT7A");
    assert_eq!(pilot.first_name, "Yousef");
    assert_eq!(pilot.last_name, "Haddad");
    assert_eq!(pilot.email, "yousef@example.com");
    assert_eq!(pilot.rank, "Cadet");
    assert_eq!(pilot.status, PilotStatus::Active);
    assert_eq!(pilot.home_base, "OJAI");
    assert_eq!(pilot.current_location, "OJAI");
    assert!(verify_password("correct-horse", &pilot.password_hash));

    Ok(())
}

/// Tests the RANDOM base option.
///
/// Expected: Ok(Pilot) based at one of OSDI, OJAI or ORBI
#[tokio::test]
async fn random_base_picks_a_hub() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let mut dto = register_dto("LVT8", "random@example.com");
    dto.base = "RANDOM".to_string();

    let pilot = AuthService::new(db, &codes).register(dto).await?;

    assert!(["OSDI", "OJAI", "ORBI"].contains(&pilot.home_base.as_str()));
    assert_eq!(pilot.current_location, pilot.home_base);

    Ok(())
}

/// Tests callsign format validation.
///
/// Expected: Err(BadRequest) for a callsign without the LVT prefix
#[tokio::test]
async fn rejects_malformed_callsign() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let result = AuthService::new(db, &codes)
        .register(register_dto("RJA101", "bad@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests duplicate email and callsign detection.
///
/// Expected: Err(BadRequest) for a reused email and for a reused callsign
#[tokio::test]
async fn rejects_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    service
        .register(register_dto("LVT100", "first@example.com"))
        .await?;

    let same_email = service
        .register(register_dto("LVT101", "FIRST@example.com"))
        .await;
    assert!(matches!(same_email, Err(AppError::BadRequest(_))));

    let same_callsign = service
        .register(register_dto("lvt100", "second@example.com"))
        .await;
    assert!(matches!(same_callsign, Err(AppError::BadRequest(_))));

    Ok(())
}
