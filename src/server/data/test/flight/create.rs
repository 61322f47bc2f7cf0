use super::*;

/// Tests filing a bare manual flight record.
///
/// Expected: Ok with no credits and an empty credit breakdown
#[tokio::test]
async fn creates_flight_without_credits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let mut param = CreateFlightParam::bare(pilot.id, "Test Pilot".to_string(), ApprovalStatus::Pending);
    param.flight_number = "LVT100".to_string();
    param.is_manual = true;

    let repo = FlightRepository::new(db);
    let flight = repo.create(param).await?;

    assert_eq!(flight.status, ApprovalStatus::Pending);
    assert_eq!(flight.credits_earned, 0);
    assert!(flight.credits_breakdown.is_empty());
    assert!(flight.is_manual);

    repo.set_credits(flight.id, 250, &["Landing bonus +250".to_string()])
        .await?;
    let credited = repo.find_by_id(flight.id).await?.unwrap();

    assert_eq!(credited.credits_earned, 250);
    assert_eq!(credited.credits_breakdown.len(), 1);

    Ok(())
}

/// Tests counting a pilot's flights that were not rejected.
///
/// Expected: pending and approved flights count, rejected ones do not
#[tokio::test]
async fn counts_non_rejected_flights() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(0)
        .build()
        .await?;
    factory::create_flight(db, &pilot).await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(2)
        .build()
        .await?;

    let count = FlightRepository::new(db).count_non_rejected(pilot.id).await?;

    assert_eq!(count, 2);

    Ok(())
}
