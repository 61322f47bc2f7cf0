use super::*;

/// Tests starting and completing a tour.
///
/// Expected: progress starts at leg 0 and completion stamps the status and date
#[tokio::test]
async fn starts_and_completes_tour() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let (tour, _) =
        factory::create_tour_with_legs(db, 500, &[("OJAI", "OERK"), ("OERK", "OJAI")]).await?;

    let repo = TourRepository::new(db);
    let progress = repo.start(tour.id, pilot.id).await?;

    assert_eq!(progress.current_leg, 0);
    assert_eq!(progress.status, TourStatus::InProgress.as_str());

    repo.advance(progress.id, 1, false).await?;
    let mid = repo.find_progress(tour.id, pilot.id).await?.unwrap();
    assert_eq!(mid.current_leg, 1);
    assert!(mid.completed_at.is_none());

    repo.advance(progress.id, 2, true).await?;
    let done = repo.find_progress(tour.id, pilot.id).await?.unwrap();
    assert_eq!(done.status, TourStatus::Completed.as_str());
    assert!(done.completed_at.is_some());

    assert_eq!(repo.progress_for_pilot(pilot.id).await?.len(), 1);

    Ok(())
}
