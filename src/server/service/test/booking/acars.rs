use super::*;
use sea_orm::EntityTrait;

/// Tests that an ACARS booking replaces the pilot's Active bid.
///
/// Expected: only the new bid remains open
#[tokio::test]
async fn replaces_active_bid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::create_pilot(db).await?;
    let old = factory::bid::create_bid(db, &pilot).await?;
    let pilot = Pilot::from_entity(pilot);

    let bid = BookingService::new(db)
        .acars_book(&pilot, acars_dto(&pilot, None))
        .await?;

    let repo = BidRepository::new(db);
    assert!(repo.find_by_id(old.id).await?.is_none());
    assert_eq!(repo.get_open_for_pilot(pilot.id).await?.len(), 1);
    assert_eq!(bid.route.as_deref(), Some("DCT"));
    assert_eq!(bid.pax, Some(150));

    Ok(())
}

/// Tests a registration that is not part of the fleet.
///
/// Expected: bid created with the registration as sent
#[tokio::test]
async fn books_unknown_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);

    let bid = BookingService::new(db)
        .acars_book(&pilot, acars_dto(&pilot, Some("jy-zzz")))
        .await?;

    assert_eq!(bid.aircraft_registration.as_deref(), Some("JY-ZZZ"));
    assert_eq!(
        BidRepository::new(db)
            .get_open_for_pilot(pilot.id)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests an aircraft whose repair timer is still running.
///
/// Expected: Err(AppError::BadRequest) naming the remaining hours
#[tokio::test]
async fn rejects_aircraft_under_repair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("Maintenance")
        .repair_until(Utc::now() + Duration::minutes(150))
        .build()
        .await?;

    let result = BookingService::new(db)
        .acars_book(&pilot, acars_dto(&pilot, Some(&aircraft.registration)))
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("3 hour")),
        other => panic!("expected BadRequest, got {:?}", other.map(|b| b.id)),
    }

    Ok(())
}

/// Tests an aircraft whose repair timer has elapsed.
///
/// Expected: timer cleared, aircraft Available and the bid created
#[tokio::test]
async fn clears_elapsed_repair_timer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("Maintenance")
        .repair_until(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let bid = BookingService::new(db)
        .acars_book(&pilot, acars_dto(&pilot, Some(&aircraft.registration)))
        .await?;

    let aircraft = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::Available);
    assert!(aircraft.repair_until.is_none());
    assert_eq!(bid.aircraft_registration, Some(aircraft.registration));

    Ok(())
}

/// Tests a grounded aircraft.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_grounded_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("Grounded")
        .condition(10.0)
        .build()
        .await?;

    let result = BookingService::new(db)
        .acars_book(&pilot, acars_dto(&pilot, Some(&aircraft.registration)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests cancelling from ACARS with an aircraft in flight and an active flight.
///
/// Expected: Ok(1), aircraft Available, bid and active flight removed
#[tokio::test]
async fn cancel_releases_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (pilot, aircraft, bid) = factory::helpers::create_booked_pilot(db).await?;
    let aircraft_repo = AircraftRepository::new(db);
    aircraft_repo
        .set_status(aircraft.id, AircraftStatus::InFlight)
        .await?;
    factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .callsign(&bid.callsign)
        .build()
        .await?;

    let cancelled = BookingService::new(db)
        .acars_cancel(&Pilot::from_entity(pilot.clone()))
        .await?;

    assert_eq!(cancelled, 1);
    let aircraft = aircraft_repo
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::Available);
    assert!(BidRepository::new(db).find_by_id(bid.id).await?.is_none());
    assert!(entity::prelude::ActiveFlight::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
