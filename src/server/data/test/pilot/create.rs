use super::*;

/// Tests registering a pilot account.
///
/// Verifies that a new pilot starts as an Active Cadet at the chosen home base with an
/// empty route history and a lowercase email lookup.
///
/// Expected: Ok with defaults applied
#[tokio::test]
async fn creates_active_cadet_at_home_base() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PilotRepository::new(db);
    let pilot = repo
        .create(CreatePilotParam {
            pilot_id: "LVT100".to_string(),
            first_name: "Rana".to_string(),
            last_name: "Haddad".to_string(),
            email: "rana@example.com".to_string(),
            password_hash: "hash".to_string(),
            home_base: "OJAI".to_string(),
        })
        .await?;

    assert_eq!(pilot.rank, "Cadet");
    assert_eq!(pilot.status, PilotStatus::Active);
    assert_eq!(pilot.current_location, "OJAI");
    assert_eq!(pilot.home_base, "OJAI");
    assert!(pilot.routes_flown.is_empty());
    assert_eq!(pilot.balance, 0);

    let found = repo.find_by_email("RANA@example.com").await?;
    assert_eq!(found.map(|p| p.id), Some(pilot.id));

    Ok(())
}

/// Tests the uniqueness helpers used at registration.
///
/// Expected: taken pilot ids and emails report true, free ones false
#[tokio::test]
async fn reports_taken_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::pilot::PilotFactory::new(db)
        .pilot_id("LVT777")
        .email("taken@example.com")
        .build()
        .await?;

    let repo = PilotRepository::new(db);

    assert!(repo.pilot_id_exists(&pilot.pilot_id).await?);
    assert!(!repo.pilot_id_exists("LVT778").await?);
    assert!(repo.email_exists("Taken@Example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);

    Ok(())
}
