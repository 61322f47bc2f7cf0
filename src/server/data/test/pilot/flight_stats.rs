use super::*;

/// Tests applying an accepted flight to a pilot's career.
///
/// Expected: hours, flights, credits and balance grow and the pilot moves to the arrival
#[tokio::test]
async fn applies_flight_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::pilot::PilotFactory::new(db)
        .hours(10.0)
        .flights(4)
        .balance(100)
        .build()
        .await?;

    let pilot = PilotRepository::new(db)
        .apply_flight_stats(
            model.id,
            FlightStatsParam {
                hours: 1.5,
                revenue: 5_000,
                pay: 300,
                location: "OERK".to_string(),
            },
        )
        .await?
        .unwrap();

    assert_eq!(pilot.total_flights, 5);
    assert!((pilot.total_hours - 11.5).abs() < f64::EPSILON);
    assert_eq!(pilot.total_credits, 5_000);
    assert_eq!(pilot.balance, 400);
    assert_eq!(pilot.current_location, "OERK");

    Ok(())
}

/// Tests reversing a deleted flight's statistics.
///
/// Expected: counters drop and clamp at zero instead of going negative
#[tokio::test]
async fn reverses_and_clamps_stats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::pilot::PilotFactory::new(db)
        .hours(1.0)
        .flights(1)
        .build()
        .await?;

    let pilot = PilotRepository::new(db)
        .reverse_flight_stats(model.id, 3.0, 2_000)
        .await?
        .unwrap();

    assert_eq!(pilot.total_flights, 0);
    assert_eq!(pilot.total_hours, 0.0);
    assert_eq!(pilot.total_credits, 0);

    Ok(())
}

/// Tests reversing statistics of a missing pilot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PilotRepository::new(db)
        .reverse_flight_stats(999, 1.0, 10)
        .await?;

    assert!(result.is_none());

    Ok(())
}
