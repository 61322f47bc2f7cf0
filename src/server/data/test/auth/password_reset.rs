use super::*;

/// Tests that a reset token can be used only once.
///
/// Expected: first mark_used succeeds, the second reports false
#[tokio::test]
async fn uses_reset_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = PasswordResetRepository::new(db);
    let reset = repo
        .create("reset-hash".to_string(), pilot.id, Utc::now() + Duration::hours(1))
        .await?;

    assert!(!reset.used);
    assert!(repo.mark_used(reset.id).await?);
    assert!(!repo.mark_used(reset.id).await?);

    let stored = repo.find_by_hash("reset-hash").await?.unwrap();
    assert!(stored.used);

    Ok(())
}

/// Tests sweeping used and expired resets.
///
/// Expected: only the pending reset survives
#[tokio::test]
async fn sweeps_used_and_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = PasswordResetRepository::new(db);
    let later = Utc::now() + Duration::hours(1);

    repo.create("expired".to_string(), pilot.id, Utc::now() - Duration::minutes(1))
        .await?;
    let used = repo.create("used".to_string(), pilot.id, later).await?;
    repo.mark_used(used.id).await?;
    repo.create("pending".to_string(), pilot.id, later).await?;

    assert_eq!(repo.delete_expired(Utc::now()).await?, 2);
    assert!(repo.find_by_hash("pending").await?.is_some());

    Ok(())
}
