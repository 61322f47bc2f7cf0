use super::*;

/// Tests marking selected notifications read.
///
/// Verifies that ids owned by another pilot are not touched.
///
/// Expected: only the caller's selected notification is marked
#[tokio::test]
async fn marks_only_own_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let other = factory::create_pilot(db).await?;
    let repo = NotificationRepository::new(db);

    let mine = repo.create(notice(pilot.id, "Mine")).await?;
    let theirs = repo.create(notice(other.id, "Theirs")).await?;

    let marked = repo.mark_read(pilot.id, &[mine.id, theirs.id]).await?;

    assert_eq!(marked, 1);
    assert!(repo.for_pilot(pilot.id, 10).await?[0].read);
    assert!(!repo.for_pilot(other.id, 10).await?[0].read);

    Ok(())
}

/// Tests marking all notifications read with an empty id list.
///
/// Expected: every unread notification of the pilot is marked
#[tokio::test]
async fn marks_all_when_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = NotificationRepository::new(db);
    repo.create(notice(pilot.id, "One")).await?;
    repo.create(notice(pilot.id, "Two")).await?;

    assert_eq!(repo.mark_read(pilot.id, &[]).await?, 2);
    assert!(repo.for_pilot(pilot.id, 10).await?.iter().all(|n| n.read));

    Ok(())
}

/// Tests sweeping old notifications.
///
/// Expected: a cutoff in the future removes everything, one in the past removes nothing
#[tokio::test]
async fn deletes_notifications_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = NotificationRepository::new(db);
    repo.create(notice(pilot.id, "Old")).await?;

    assert_eq!(repo.delete_older_than(Utc::now() - Duration::days(1)).await?, 0);
    assert_eq!(repo.delete_older_than(Utc::now() + Duration::seconds(1)).await?, 1);

    Ok(())
}
