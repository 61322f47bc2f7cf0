use super::*;

/// Tests changing a password with the correct current password.
///
/// Expected: Ok and the new password verifies
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();

    let pilot = factory::pilot::PilotFactory::new(db)
        .password_hash(hash_password("old-password").unwrap())
        .build()
        .await?;

    AuthService::new(db, &codes)
        .change_password(pilot.id, "old-password", "new-password")
        .await?;

    let stored = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert!(verify_password("new-password", &stored.password_hash));

    Ok(())
}

/// Tests change-password validation.
///
/// Expected: Err(BadRequest) for a wrong current password and for a short new password
#[tokio::test]
async fn rejects_invalid_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let pilot = factory::pilot::PilotFactory::new(db)
        .password_hash(hash_password("old-password").unwrap())
        .build()
        .await?;

    let wrong = service
        .change_password(pilot.id, "not-it", "new-password")
        .await;
    assert!(matches!(wrong, Err(AppError::BadRequest(_))));

    let short = service.change_password(pilot.id, "old-password", "short").await;
    assert!(matches!(short, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the full forgot/reset flow.
///
/// Verifies that a reset token sets the password once and cannot be reused.
///
/// Expected: Ok on first reset, Err(BadRequest) on reuse
#[tokio::test]
async fn resets_password_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    let pilot = factory::pilot::PilotFactory::new(db)
        .email("forgetful@example.com")
        .build()
        .await?;

    let token = service
        .forgot_password("forgetful@example.com")
        .await?
        .expect("token for a known email");

    service.reset_password(&token, "brand-new-pass").await?;

    let stored = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert!(verify_password("brand-new-pass", &stored.password_hash));

    let reused = service.reset_password(&token, "another-pass").await;
    assert!(matches!(reused, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests forgot-password with an unknown email and reset with an unknown token.
///
/// Expected: Ok(None) for the email, Err(BadRequest) for the token
#[tokio::test]
async fn unknown_email_and_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codes = AdminCodeService::new();
    let service = AuthService::new(db, &codes);

    assert!(service.forgot_password("ghost@example.com").await?.is_none());

    let result = service.reset_password("deadbeef", "brand-new-pass").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
