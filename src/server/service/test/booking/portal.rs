use super::*;

/// Tests booking with an available aircraft at the departure airport.
///
/// Expected: Ok(Bid) Active with uppercased ICAOs and callsign, flight number defaulted to
/// the callsign and a 24 hour expiry
#[tokio::test]
async fn books_flight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);
    let aircraft = factory::aircraft::create_aircraft_at(db, "OJAI").await?;

    let bid = BookingService::new(db)
        .book(&pilot, portal_dto("lvt77", Some(&aircraft.registration)))
        .await?;

    assert_eq!(bid.callsign, "LVT77");
    assert_eq!(bid.flight_number, "LVT77");
    assert_eq!(bid.departure_icao, "OJAI");
    assert_eq!(bid.arrival_icao, "OERK");
    assert_eq!(bid.aircraft_type, "A320");
    assert_eq!(bid.status, BidStatus::Active);
    assert_eq!((bid.expires_at - bid.created_at).num_hours(), 24);

    Ok(())
}

/// Tests booking while another bid is open.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_second_open_bid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::create_pilot(db).await?;
    factory::bid::BidFactory::new(db, &pilot)
        .status("InProgress")
        .build()
        .await?;

    let result = BookingService::new(db)
        .book(&Pilot::from_entity(pilot), portal_dto("LVT78", None))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests duplicate OFP and callsign against another pilot's Active bid.
///
/// Expected: Err(AppError::Conflict) for both
#[tokio::test]
async fn rejects_duplicate_ofp_and_callsign() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BookingService::new(db);

    let other = factory::pilot::create_pilot(db).await?;
    factory::bid::BidFactory::new(db, &other)
        .callsign("LVT900")
        .ofp_id("OFP-1")
        .build()
        .await?;

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);

    let duplicate_ofp = service
        .book(
            &pilot,
            CreateBidDto {
                simbrief_ofp_id: Some("OFP-1".to_string()),
                ..portal_dto("LVT901", None)
            },
        )
        .await;
    assert!(matches!(duplicate_ofp, Err(AppError::Conflict(_))));

    let duplicate_callsign = service.book(&pilot, portal_dto("lvt900", None)).await;
    assert!(matches!(duplicate_callsign, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests aircraft checks: unknown, unavailable and parked elsewhere.
///
/// Expected: NotFound for the unknown registration, BadRequest for the other two
#[tokio::test]
async fn validates_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BookingService::new(db);

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);
    let in_flight = factory::aircraft::AircraftFactory::new(db)
        .status("InFlight")
        .build()
        .await?;
    let elsewhere = factory::aircraft::create_aircraft_at(db, "OMDB").await?;

    let unknown = service.book(&pilot, portal_dto("LVT50", Some("JY-NONE"))).await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let busy = service
        .book(&pilot, portal_dto("LVT51", Some(&in_flight.registration)))
        .await;
    assert!(matches!(busy, Err(AppError::BadRequest(_))));

    let away = service
        .book(&pilot, portal_dto("LVT52", Some(&elsewhere.registration)))
        .await;
    assert!(matches!(away, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking a VFR aircraft type.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_vfr_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::pilot::create_pilot(db).await?);

    let result = BookingService::new(db)
        .book(
            &pilot,
            CreateBidDto {
                aircraft_type: "c172".to_string(),
                ..portal_dto("LVT60", None)
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests cancelling all Active bids and a specific bid.
///
/// Expected: bulk cancel counts only Active bids; a foreign bid is NotFound
#[tokio::test]
async fn cancels_bids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BookingService::new(db);

    let pilot = factory::pilot::create_pilot(db).await?;
    let other = factory::pilot::create_pilot(db).await?;
    let active = factory::bid::create_bid(db, &pilot).await?;
    let foreign = factory::bid::create_bid(db, &other).await?;

    assert_eq!(service.cancel(pilot.id, None).await?, 1);
    let cancelled = BidRepository::new(db).find_by_id(active.id).await?.unwrap();
    assert_eq!(cancelled.status, BidStatus::Cancelled);

    let result = service.cancel(pilot.id, Some(foreign.id)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    assert_eq!(service.cancel(other.id, Some(foreign.id)).await?, 1);
    assert_eq!(service.cancel(other.id, Some(foreign.id)).await?, 0);
    assert!(service.current(other.id).await?.is_none());

    Ok(())
}
