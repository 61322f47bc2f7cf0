use super::*;

/// Tests a ping with a callsign.
///
/// Expected: link active, client time echoed, activity and heartbeat refreshed
#[tokio::test]
async fn ping_refreshes_heartbeat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let pilot = factory::pilot::create_pilot(db).await?;
    let stale = factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .last_update(Utc::now() - Duration::minutes(8))
        .build()
        .await?;

    let response = AcarsService::new(db, &notifier, &slew)
        .ping(PingDto {
            pilot_id: pilot.pilot_id.clone(),
            callsign: Some(stale.callsign.to_lowercase()),
            timestamp: Some(42),
        })
        .await?;

    assert!(response.success);
    assert_eq!(response.data_link, "active");
    assert_eq!(response.client_time, Some(42));

    let flight = ActiveFlightRepository::new(db)
        .find_by_callsign(pilot.id, &stale.callsign)
        .await?
        .unwrap();
    assert!(flight.last_update > stale.last_update);

    Ok(())
}

/// Tests pings without a pilot id or for an unknown pilot.
///
/// Expected: BadRequest and NotFound
#[tokio::test]
async fn ping_requires_known_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();
    let service = AcarsService::new(db, &notifier, &slew);

    let missing = service.ping(PingDto::default()).await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    let unknown = service
        .ping(PingDto {
            pilot_id: "LVT999".to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests starting a booked flight.
///
/// Expected: previous tracking removed, bid InProgress, aircraft InFlight and a Preflight
/// flight carrying the bid's registration
#[tokio::test]
async fn start_claims_bid_and_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let (pilot, aircraft, bid) = factory::helpers::create_booked_pilot(db).await?;
    factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .callsign("OLD1")
        .build()
        .await?;

    let flight = AcarsService::new(db, &notifier, &slew)
        .start(StartFlightDto {
            pilot_id: pilot.pilot_id.clone(),
            callsign: bid.callsign.clone(),
            departure_icao: "ojai".to_string(),
            arrival_icao: "oerk".to_string(),
            aircraft_type: "a320".to_string(),
        })
        .await?;

    assert_eq!(flight.phase, "Preflight");
    assert_eq!(flight.departure_icao, "OJAI");
    assert_eq!(flight.aircraft_registration, Some(aircraft.registration.clone()));

    let flights = ActiveFlightRepository::new(db);
    assert!(flights.find_by_callsign(pilot.id, "OLD1").await?.is_none());

    let bid = BidRepository::new(db).find_by_id(bid.id).await?.unwrap();
    assert_eq!(bid.status, BidStatus::InProgress);

    let aircraft = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::InFlight);

    Ok(())
}

/// Tests that starting never takes a grounded aircraft into the air.
///
/// Expected: aircraft stays Grounded while the flight starts
#[tokio::test]
async fn start_keeps_grounded_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let pilot = factory::pilot::create_pilot(db).await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("Grounded")
        .build()
        .await?;
    let bid = factory::bid::BidFactory::new(db, &pilot)
        .registration(&aircraft.registration)
        .build()
        .await?;

    AcarsService::new(db, &notifier, &slew)
        .start(StartFlightDto {
            pilot_id: pilot.pilot_id.clone(),
            callsign: bid.callsign.clone(),
            ..Default::default()
        })
        .await?;

    let aircraft = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::Grounded);

    Ok(())
}

/// Tests ending a flight.
///
/// Expected: flight and bid deleted, aircraft released; unknown pilots succeed silently
#[tokio::test]
async fn end_releases_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();
    let service = AcarsService::new(db, &notifier, &slew);

    let (pilot, aircraft, bid) = factory::helpers::create_booked_pilot(db).await?;
    AircraftRepository::new(db)
        .set_status(aircraft.id, AircraftStatus::InFlight)
        .await?;
    factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .callsign(&bid.callsign)
        .build()
        .await?;

    service
        .end(FlightRefDto {
            pilot_id: pilot.pilot_id.clone(),
            callsign: Some(bid.callsign.clone()),
        })
        .await?;

    assert!(ActiveFlightRepository::new(db)
        .find_by_callsign(pilot.id, &bid.callsign)
        .await?
        .is_none());
    assert!(BidRepository::new(db).find_by_id(bid.id).await?.is_none());
    let aircraft = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::Available);

    service
        .end(FlightRefDto {
            pilot_id: "LVT999".to_string(),
            callsign: None,
        })
        .await?;

    Ok(())
}

/// Tests ending a flight that was never booked.
///
/// Expected: call succeeds and the tracked flight is removed
#[tokio::test]
async fn end_without_bid_removes_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let pilot = factory::pilot::create_pilot(db).await?;
    factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .callsign("LVT77")
        .build()
        .await?;

    AcarsService::new(db, &notifier, &slew)
        .end(FlightRefDto {
            pilot_id: pilot.pilot_id.clone(),
            callsign: Some("lvt77".to_string()),
        })
        .await?;

    assert!(ActiveFlightRepository::new(db)
        .find_by_callsign(pilot.id, "LVT77")
        .await?
        .is_none());

    Ok(())
}

/// Tests ending without a callsign while the pilot tracks several flights.
///
/// Expected: every flight of the pilot is removed, other pilots keep theirs
#[tokio::test]
async fn end_without_callsign_removes_all_flights() -> Result<(), AppError> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let slew = SlewTracker::new();

    let pilot = factory::pilot::create_pilot(db).await?;
    let other = factory::pilot::create_pilot(db).await?;
    for callsign in ["LVT10", "LVT11"] {
        factory::active_flight::ActiveFlightFactory::new(db, &pilot)
            .callsign(callsign)
            .build()
            .await?;
    }
    factory::active_flight::ActiveFlightFactory::new(db, &other)
        .callsign("LVT12")
        .build()
        .await?;

    AcarsService::new(db, &notifier, &slew)
        .end(FlightRefDto {
            pilot_id: pilot.pilot_id.clone(),
            callsign: None,
        })
        .await?;

    let repo = ActiveFlightRepository::new(db);
    assert!(repo.find_by_callsign(pilot.id, "LVT10").await?.is_none());
    assert!(repo.find_by_callsign(pilot.id, "LVT11").await?.is_none());
    assert!(repo.find_by_callsign(other.id, "LVT12").await?.is_some());

    Ok(())
}
