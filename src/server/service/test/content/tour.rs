use super::*;

/// Tests starting a tour twice.
///
/// Expected: first start creates progress at leg 0, the second is a conflict
#[tokio::test]
async fn starts_tour_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = TourService::new(db);

    let pilot = pilot(db).await?;
    let (tour, _) = factory::create_tour_with_legs(db, 500, &[("OJAI", "OERK")]).await?;

    let progress = service.start(&pilot, tour.id).await?;
    assert_eq!(progress.current_leg, 0);

    assert!(matches!(
        service.start(&pilot, tour.id).await,
        Err(AppError::Conflict(_))
    ));

    let tours = service.list_for_pilot(pilot.id).await?;
    assert_eq!(tours.len(), 1);
    assert_eq!(tours[0].legs.len(), 1);
    assert!(tours[0].progress.is_some());

    Ok(())
}

/// Tests activity lookups with and without a signed-in pilot.
///
/// Expected: legs listed, progress only for the pilot who started it, unknown id 404
#[tokio::test]
async fn gets_activity_with_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ActivityService::new(db);

    let pilot = pilot(db).await?;
    let (activity, _) =
        factory::create_activity_with_legs(db, 100, true, &[("OJAI", "OERK"), ("OERK", "OMDB")])
            .await?;
    crate::server::data::activity::ActivityRepository::new(db)
        .start_progress(activity.id, pilot.id)
        .await?;

    let mine = service.get(activity.id, Some(pilot.id)).await?;
    assert_eq!(mine.legs.len(), 2);
    assert!(mine.progress.is_some());

    let anonymous = service.list(None).await?;
    assert_eq!(anonymous.len(), 1);
    assert!(anonymous[0].progress.is_none());

    assert!(matches!(
        service.get(999, None).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
