use super::*;

/// Tests deleting an approved flight with ledger entries.
///
/// Expected: pilot statistics reduced and clamped, ledger entries for the flight removed
#[tokio::test]
async fn delete_reverses_statistics() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::PilotFactory::new(db)
        .hours(10.0)
        .flights(3)
        .build()
        .await?;
    let flight = factory::flight::FlightFactory::new(db, &pilot)
        .flight_time(120)
        .revenue(5000)
        .build()
        .await?;

    let finance = FinanceRepository::new(db);
    finance
        .log(CreateFinanceLogParam {
            pilot_id: Some(pilot.id),
            kind: "Flight Revenue",
            amount: 5000,
            description: "Flight revenue".to_string(),
            reference_id: Some(flight.id.to_string()),
        })
        .await?;
    finance
        .log(CreateFinanceLogParam {
            pilot_id: None,
            kind: "Daily Operations",
            amount: -100,
            description: "Catering".to_string(),
            reference_id: None,
        })
        .await?;

    ModerationService::new(db).delete(flight.id).await?;

    assert!(FlightRepository::new(db).find_by_id(flight.id).await?.is_none());

    let reversed = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(reversed.total_flights, 2);
    assert_eq!(reversed.total_hours, 8.0);
    assert_eq!(reversed.total_credits, 0);

    let remaining = entity::prelude::FinanceLog::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].kind, "Daily Operations");

    Ok(())
}

/// Tests deleting the flight that completed a tour on its final leg.
///
/// Expected: tour progress back to InProgress on the final leg
#[tokio::test]
async fn delete_reopens_completed_tour() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let (tour, _legs) =
        factory::create_tour_with_legs(db, 1000, &[("OERK", "OJAI"), ("OJAI", "OERK")]).await?;

    let tour_repo = TourRepository::new(db);
    let progress = tour_repo.start(tour.id, pilot.id).await?;
    tour_repo.advance(progress.id, 2, true).await?;

    let flight = factory::create_flight(db, &pilot).await?;

    ModerationService::new(db).delete(flight.id).await?;

    let reopened = entity::prelude::TourProgress::find()
        .filter(entity::tour_progress::Column::Id.eq(progress.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(reopened.status, TourStatus::InProgress.as_str());
    assert_eq!(reopened.current_leg, 1);
    assert!(reopened.completed_at.is_none());

    Ok(())
}

/// Tests deleting a flight that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_missing_flight_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ModerationService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
