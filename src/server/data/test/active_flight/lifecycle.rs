use super::*;

/// Tests starting a tracked flight and streaming a position into it.
///
/// Expected: flight starts in the initial phase and telemetry overwrites the position
#[tokio::test]
async fn starts_and_updates_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = ActiveFlightRepository::new(db);

    let flight = repo
        .create(CreateActiveFlightParam {
            pilot_id: pilot.id,
            pilot_name: "Test Pilot".to_string(),
            callsign: "LVT501".to_string(),
            departure_icao: "OJAI".to_string(),
            arrival_icao: "OERK".to_string(),
            aircraft_type: "A320".to_string(),
            aircraft_registration: None,
        })
        .await?;

    assert_eq!(flight.phase, INITIAL_PHASE);
    assert!(!flight.takeoff_notified);

    let updated = repo
        .update_telemetry(
            flight.id,
            TelemetryParam {
                latitude: 31.7,
                longitude: 35.9,
                altitude: 35_000.0,
                heading: 140.0,
                ground_speed: 450.0,
                ias: 280.0,
                vertical_speed: 0.0,
                phase: "Cruise".to_string(),
                status: "Airborne".to_string(),
                fuel: 6_000.0,
                g_force: 1.0,
                comfort_score: 98.0,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.phase, "Cruise");
    assert_eq!(updated.altitude, 35_000.0);

    let found = repo.find_by_callsign(pilot.id, "LVT501").await?;
    assert_eq!(found.map(|f| f.id), Some(flight.id));

    Ok(())
}

/// Tests the heartbeat and deletion by callsign.
///
/// Expected: heartbeat touches one row and the flight is gone after deletion
#[tokio::test]
async fn heartbeats_and_deletes_by_callsign() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .callsign("LVT777")
        .build()
        .await?;

    let repo = ActiveFlightRepository::new(db);

    assert_eq!(repo.heartbeat(pilot.id, "LVT777").await?, 1);
    assert_eq!(repo.heartbeat(pilot.id, "LVT000").await?, 0);
    assert_eq!(repo.delete_by_callsign(pilot.id, "LVT777").await?, 1);
    assert!(repo.find_by_callsign(pilot.id, "LVT777").await?.is_none());

    Ok(())
}
