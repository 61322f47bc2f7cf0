use super::*;

/// Tests blacklisting and restoring a pilot.
///
/// Verifies that blacklisting records reason and moderator, that the pilot shows up in the
/// blacklist, and that unblacklisting returns them to Inactive with the fields cleared.
///
/// Expected: Ok with the status transitions applied
#[tokio::test]
async fn blacklists_and_restores() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_pilot(db).await?;
    let repo = PilotRepository::new(db);

    let banned = repo
        .blacklist(model.id, "Cheating".to_string(), "LVT001".to_string())
        .await?
        .unwrap();

    assert_eq!(banned.status, PilotStatus::Blacklist);
    assert_eq!(banned.blacklist_reason.as_deref(), Some("Cheating"));
    assert_eq!(banned.blacklisted_by.as_deref(), Some("LVT001"));
    assert!(banned.blacklisted_at.is_some());

    let listed = repo.get_blacklisted().await?;
    assert_eq!(listed.len(), 1);

    let restored = repo.unblacklist(model.id).await?.unwrap();

    assert_eq!(restored.status, PilotStatus::Inactive);
    assert!(restored.blacklist_reason.is_none());
    assert!(restored.blacklisted_at.is_none());
    assert!(repo.get_blacklisted().await?.is_empty());

    Ok(())
}
