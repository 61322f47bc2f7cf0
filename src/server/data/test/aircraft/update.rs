use super::*;

/// Tests a partial aircraft update.
///
/// Verifies that only provided fields change and that condition is clamped to 0..=100.
///
/// Expected: Ok(Some) with clamped condition and unchanged type
#[tokio::test]
async fn updates_fields_and_clamps_condition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;

    let updated = AircraftRepository::new(db)
        .update(
            &aircraft.registration,
            UpdateAircraftParam {
                current_location: Some("OERK".to_string()),
                condition: Some(140.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.current_location, "OERK");
    assert_eq!(updated.condition, 100.0);
    assert_eq!(updated.aircraft_type, aircraft.aircraft_type);

    Ok(())
}

/// Tests retiring an aircraft.
///
/// Expected: Ok(true) and the aircraft leaves the active fleet
#[tokio::test]
async fn retires_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;
    let repo = AircraftRepository::new(db);

    assert!(repo.retire(&aircraft.registration).await?);
    assert!(repo.get_active(None, None).await?.is_empty());

    let retired = repo.find_by_registration(&aircraft.registration).await?.unwrap();
    assert_eq!(retired.status, AircraftStatus::Retired);

    Ok(())
}
