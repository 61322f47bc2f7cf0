use super::*;

/// Tests filtering the active fleet by location and status.
///
/// Verifies that retired aircraft are hidden and that both filters narrow the result.
///
/// Expected: Ok with only matching active aircraft
#[tokio::test]
async fn filters_by_location_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::aircraft::AircraftFactory::new(db)
        .registration("JY-AAA")
        .location("OJAI")
        .build()
        .await?;
    factory::aircraft::AircraftFactory::new(db)
        .registration("JY-BBB")
        .location("OJAI")
        .status("Maintenance")
        .build()
        .await?;
    factory::aircraft::AircraftFactory::new(db)
        .registration("JY-CCC")
        .location("OERK")
        .build()
        .await?;
    factory::aircraft::AircraftFactory::new(db)
        .registration("JY-DDD")
        .location("OJAI")
        .active(false)
        .build()
        .await?;

    let repo = AircraftRepository::new(db);

    let all = repo.get_active(None, None).await?;
    assert_eq!(all.len(), 3);

    let at_ojai = repo.get_active(Some("OJAI"), None).await?;
    let regs: Vec<_> = at_ojai.iter().map(|a| a.registration.as_str()).collect();
    assert_eq!(regs, vec!["JY-AAA", "JY-BBB"]);

    let available = repo
        .get_active(Some("OJAI"), Some(AircraftStatus::Available))
        .await?;
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].registration, "JY-AAA");

    Ok(())
}

/// Tests finding an aircraft of a type at an airport.
///
/// Expected: Ok(Some) for the parked type, Ok(None) elsewhere
#[tokio::test]
async fn finds_type_at_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .aircraft_type("B738")
        .location("OMDB")
        .build()
        .await?;

    let repo = AircraftRepository::new(db);

    let found = repo.find_by_type_at("B738", "OMDB").await?;
    assert_eq!(found.map(|a| a.id), Some(aircraft.id));
    assert!(repo.find_by_type_at("B738", "OJAI").await?.is_none());

    Ok(())
}
