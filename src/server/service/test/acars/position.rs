use super::*;

/// Tests a position report for an untracked callsign without a bid.
///
/// Expected: flight recreated with placeholder route and the telemetry applied
#[tokio::test]
async fn recreates_missing_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let pilot = factory::pilot::create_pilot(db).await?;

    let flight = AcarsService::new(db, &notifier, &slew)
        .position(position_dto(&pilot.pilot_id, "lvt5", 31.72, "Taxi"))
        .await?;

    assert_eq!(flight.callsign, "LVT5");
    assert_eq!(flight.departure_icao, "????");
    assert_eq!(flight.aircraft_type, "Unknown");
    assert_eq!(flight.phase, "Taxi");
    assert_eq!(flight.status, "Taxi");
    assert_eq!(flight.altitude, 12000.0);
    assert!(!flight.takeoff_notified);

    Ok(())
}

/// Tests that the first climb report flags the takeoff once.
///
/// Expected: takeoff_notified set on the first Climb report and kept afterwards
#[tokio::test]
async fn flags_takeoff_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();
    let service = AcarsService::new(db, &notifier, &slew);

    let pilot = factory::pilot::create_pilot(db).await?;
    let tracked = factory::active_flight::create_active_flight(db, &pilot).await?;

    let climbing = service
        .position(position_dto(&pilot.pilot_id, &tracked.callsign, 31.72, "Climb"))
        .await?;
    assert!(climbing.takeoff_notified);
    assert_eq!(climbing.id, tracked.id);

    let cruising = service
        .position(position_dto(&pilot.pilot_id, &tracked.callsign, 31.73, "Cruise"))
        .await?;
    assert!(cruising.takeoff_notified);

    Ok(())
}

/// Tests a position report from a blacklisted pilot.
///
/// Expected: Err(AuthError::Blacklisted)
#[tokio::test]
async fn rejects_blacklisted_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let pilot = factory::pilot::PilotFactory::new(db)
        .status("Blacklist")
        .build()
        .await?;

    let result = AcarsService::new(db, &notifier, &slew)
        .position(position_dto(&pilot.pilot_id, "LVT1", 31.72, "Cruise"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Blacklisted(_)))
    ));

    Ok(())
}

/// Tests that a slew between reports does not interrupt tracking.
///
/// Expected: both reports stored, the second position applied
#[tokio::test]
async fn slew_is_reported_not_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();
    let service = AcarsService::new(db, &notifier, &slew);

    let pilot = factory::pilot::create_pilot(db).await?;

    service
        .position(position_dto(&pilot.pilot_id, "LVT7", 31.72, "Cruise"))
        .await?;
    let jumped = service
        .position(position_dto(&pilot.pilot_id, "LVT7", 33.50, "Cruise"))
        .await?;

    assert_eq!(jumped.latitude, 33.50);

    Ok(())
}
