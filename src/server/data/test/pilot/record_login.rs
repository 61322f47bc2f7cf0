use super::*;

/// Tests that a login restores a dormant pilot.
///
/// Verifies that an OnLeave pilot becomes Active and gets a last activity stamp.
///
/// Expected: Ok with status Active
#[tokio::test]
async fn reactivates_dormant_pilot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::pilot::PilotFactory::new(db)
        .status("OnLeave")
        .build()
        .await?;

    let repo = PilotRepository::new(db);
    let pilot = repo.find_by_id(model.id).await?.unwrap();
    let updated = repo.record_login(&pilot).await?;

    assert_eq!(updated.status, PilotStatus::Active);
    assert!(updated.last_activity.is_some());

    Ok(())
}

/// Tests that a login leaves a blacklisted pilot's status alone.
///
/// Expected: Ok with status still Blacklist
#[tokio::test]
async fn keeps_blacklist_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::pilot::PilotFactory::new(db)
        .status("Blacklist")
        .build()
        .await?;

    let repo = PilotRepository::new(db);
    let pilot = repo.find_by_id(model.id).await?.unwrap();
    let updated = repo.record_login(&pilot).await?;

    assert_eq!(updated.status, PilotStatus::Blacklist);

    Ok(())
}
