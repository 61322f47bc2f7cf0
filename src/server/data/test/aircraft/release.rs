use super::*;

/// Tests releasing an aircraft held for a flight.
///
/// Expected: Ok(true) for an InFlight aircraft, Ok(false) once it is Available
#[tokio::test]
async fn releases_in_flight_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("InFlight")
        .build()
        .await?;

    let repo = AircraftRepository::new(db);

    assert!(repo.release_if_in_flight(&aircraft.registration).await?);
    assert!(!repo.release_if_in_flight(&aircraft.registration).await?);

    Ok(())
}

/// Tests releasing by type and departure when no registration is known.
///
/// Expected: Ok(true) and the matching aircraft becomes Available
#[tokio::test]
async fn releases_by_type_and_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .aircraft_type("A321")
        .location("OJAI")
        .status("InFlight")
        .build()
        .await?;

    let repo = AircraftRepository::new(db);

    assert!(repo.release_type_at_if_in_flight("A321", "OJAI").await?);

    let released = repo.find_by_registration(&aircraft.registration).await?.unwrap();
    assert_eq!(released.status, AircraftStatus::Available);

    Ok(())
}

/// Tests clearing an elapsed repair timer.
///
/// Expected: aircraft Available with no repair deadline
#[tokio::test]
async fn clears_repair_timer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("Maintenance")
        .repair_until(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let repo = AircraftRepository::new(db);
    repo.clear_repair_timer(aircraft.id).await?;

    let cleared = repo.find_by_registration(&aircraft.registration).await?.unwrap();
    assert_eq!(cleared.status, AircraftStatus::Available);
    assert!(cleared.repair_until.is_none());

    Ok(())
}
