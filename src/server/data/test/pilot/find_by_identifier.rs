use super::*;

/// Tests resolving a pilot by exact pilot id.
///
/// Expected: Ok(Some) for the matching pilot
#[tokio::test]
async fn finds_by_pilot_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::PilotFactory::new(db)
        .pilot_id("LVT123")
        .build()
        .await?;

    let found = PilotRepository::new(db).find_by_identifier("LVT123").await?;

    assert_eq!(found.map(|p| p.id), Some(pilot.id));

    Ok(())
}

/// Tests resolving a pilot by email and by a lowercase pilot id.
///
/// Expected: both identifiers resolve to the same pilot
#[tokio::test]
async fn finds_by_email_and_lowercase_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::PilotFactory::new(db)
        .pilot_id("LVT456")
        .email("captain@example.com")
        .build()
        .await?;

    let repo = PilotRepository::new(db);

    let by_email = repo.find_by_identifier("Captain@Example.com").await?;
    let by_lower = repo.find_by_identifier("lvt456").await?;

    assert_eq!(by_email.map(|p| p.id), Some(pilot.id));
    assert_eq!(by_lower.map(|p| p.id), Some(pilot.id));

    Ok(())
}

/// Tests resolving a pilot by numeric database id.
///
/// Expected: Ok(Some) when no pilot id or email matches first
#[tokio::test]
async fn falls_back_to_numeric_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;

    let found = PilotRepository::new(db)
        .find_by_identifier(&pilot.id.to_string())
        .await?;

    assert_eq!(found.map(|p| p.pilot_id), Some(pilot.pilot_id));

    Ok(())
}

/// Tests resolving an unknown or blank identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_pilot(db).await?;
    let repo = PilotRepository::new(db);

    assert!(repo.find_by_identifier("nobody").await?.is_none());
    assert!(repo.find_by_identifier("   ").await?.is_none());

    Ok(())
}
