use super::*;

/// Tests the traffic window.
///
/// Expected: only flights with a heartbeat in the last 10 minutes
#[tokio::test]
async fn traffic_skips_stale_flights() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let fresh_pilot = factory::pilot::create_pilot(db).await?;
    let stale_pilot = factory::pilot::create_pilot(db).await?;
    let fresh = factory::active_flight::create_active_flight(db, &fresh_pilot).await?;
    factory::active_flight::ActiveFlightFactory::new(db, &stale_pilot)
        .last_update(Utc::now() - Duration::minutes(11))
        .build()
        .await?;

    let traffic = AcarsService::new(db, &notifier, &slew).traffic().await?;

    assert_eq!(traffic.len(), 1);
    assert_eq!(traffic[0].callsign, fresh.callsign);

    Ok(())
}

/// Tests the pilot statistics summary.
///
/// Expected: recent flights listed, rejected flights excluded from the count, open bid shown
#[tokio::test]
async fn summarises_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let (pilot, _, bid) = factory::helpers::create_booked_pilot(db).await?;
    factory::flight::create_flight(db, &pilot).await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(2)
        .build()
        .await?;

    let stats = AcarsService::new(db, &notifier, &slew)
        .pilot_stats(&pilot.email)
        .await?;

    assert_eq!(stats.pilot.pilot_id, pilot.pilot_id);
    assert_eq!(stats.recent_flights.len(), 2);
    assert_eq!(stats.total_flights, 1);
    assert_eq!(stats.active_bid.map(|b| b.callsign), Some(bid.callsign));

    Ok(())
}
