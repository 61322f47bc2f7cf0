use super::*;

/// Tests an admin passing the admin check.
///
/// Expected: Ok(Pilot) with is_admin set
#[tokio::test]
async fn grants_access_to_admin_pilot() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_pilot_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_pilot_id(admin.id).await?;

    let pilot = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(pilot.id, admin.id);
    assert!(pilot.is_admin);

    Ok(())
}

/// Tests a regular pilot on an admin route.
///
/// Expected: Err(AuthError::AccessDenied) carrying the pilot id
#[tokio::test]
async fn denies_admin_route_to_regular_pilot() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_pilot_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let pilot = factory::create_pilot(db).await?;
    AuthSession::new(session).set_pilot_id(pilot.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, pilot.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other.map(|p| p.id)),
    }

    // Without required permissions any logged-in pilot passes
    let result = AuthGuard::new(db, session).require(&[]).await?;
    assert_eq!(result.id, pilot.id);

    Ok(())
}

/// Tests an anonymous session.
///
/// Expected: Err(AuthError::PilotNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_pilot_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PilotNotInSession))
    ));

    Ok(())
}

/// Tests a session whose pilot was deleted.
///
/// Expected: Err(AuthError::PilotNotInDatabase) with the stale id
#[tokio::test]
async fn rejects_session_of_missing_pilot() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_pilot_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_pilot_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PilotNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests a live session of a pilot blacklisted after logging in.
///
/// Expected: Err(AuthError::Blacklisted)
#[tokio::test]
async fn rejects_blacklisted_pilot() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_pilot_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let pilot = factory::pilot::PilotFactory::new(db)
        .status("Blacklist")
        .build()
        .await?;
    AuthSession::new(session).set_pilot_id(pilot.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Blacklisted(_)))
    ));

    Ok(())
}

/// Tests clearing the session on logout.
///
/// Expected: pilot id gone after clear
#[tokio::test]
async fn clear_logs_pilot_out() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_pilot_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let pilot = factory::create_pilot(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_pilot_id(pilot.id).await?;
    assert!(auth_session.is_authenticated().await?);

    auth_session.clear().await?;

    assert_eq!(auth_session.get_pilot_id().await?, None);

    Ok(())
}
