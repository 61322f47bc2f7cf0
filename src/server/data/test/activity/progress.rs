use super::*;

/// Tests loading an activity together with its legs.
///
/// Expected: legs are attached in leg order
#[tokio::test]
async fn loads_activity_with_legs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (activity, legs) =
        factory::create_activity_with_legs(db, 300, true, &[("OJAI", "OERK"), ("OERK", "OMDB")])
            .await?;

    let loaded = ActivityRepository::new(db)
        .find_by_id(activity.id)
        .await?
        .unwrap();

    let ids: Vec<_> = loaded.legs.iter().map(|l| l.id).collect();
    assert_eq!(ids, legs.iter().map(|l| l.id).collect::<Vec<_>>());
    assert!(loaded.legs_in_order);

    Ok(())
}

/// Tests saving progress on an activity.
///
/// Expected: completed legs and dates persist across reads
#[tokio::test]
async fn saves_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let (activity, legs) =
        factory::create_activity_with_legs(db, 300, false, &[("OJAI", "OERK"), ("OERK", "OMDB")])
            .await?;

    let repo = ActivityRepository::new(db);
    let mut progress = repo.start_progress(activity.id, pilot.id).await?;
    assert!(progress.completed_leg_ids.is_empty());

    progress.completed_leg_ids.push(legs[0].id);
    progress.legs_complete = 1;
    progress.percent_complete = 50.0;
    progress.last_leg_flown_date = Some(Utc::now());
    repo.save_progress(&progress).await?;

    let reloaded = repo.find_progress(activity.id, pilot.id).await?.unwrap();

    assert_eq!(reloaded.completed_leg_ids, vec![legs[0].id]);
    assert_eq!(reloaded.legs_complete, 1);
    assert_eq!(reloaded.percent_complete, 50.0);
    assert!(reloaded.last_leg_flown_date.is_some());
    assert!(reloaded.date_complete.is_none());

    Ok(())
}

/// Tests counting completions.
///
/// Expected: the counter grows and only the first finisher is remembered
#[tokio::test]
async fn records_first_finisher_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (activity, _) =
        factory::create_activity_with_legs(db, 300, false, &[("OJAI", "OERK")]).await?;

    let repo = ActivityRepository::new(db);
    repo.record_completion(activity.id, "First Finisher").await?;
    repo.record_completion(activity.id, "Second Finisher").await?;

    let loaded = repo.find_by_id(activity.id).await?.unwrap();

    assert_eq!(loaded.total_pilots_complete, 2);
    assert_eq!(
        loaded.first_pilot_to_complete.as_deref(),
        Some("First Finisher")
    );

    Ok(())
}
