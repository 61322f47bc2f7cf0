use super::*;

/// Tests listing with a status filter and a search term.
///
/// Expected: only pending flights matching the search, newest first, with paging metadata
#[tokio::test]
async fn lists_filtered_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let older = factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("LVT100")
        .approved_status(0)
        .submitted_at(chrono::Utc::now() - chrono::Duration::hours(2))
        .build()
        .await?;
    let newer = factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("LVT101")
        .approved_status(0)
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("LVT102")
        .approved_status(1)
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("RJA200")
        .callsign("RJA200")
        .approved_status(0)
        .build()
        .await?;

    let page = ModerationService::new(db)
        .list(Some("pending"), Some("LVT1".to_string()), None, None)
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 20);
    assert_eq!(page.total_pages, 1);
    let ids: Vec<i32> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let denied = ModerationService::new(db)
        .list(Some("denied"), None, None, None)
        .await?;
    assert_eq!(denied.total, 0);

    Ok(())
}

/// Tests fetching a flight that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_missing_flight_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ModerationService::new(db).get(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests approving a pending manual PIREP of 60 minutes.
///
/// Expected: pilot credited 3000 CR with one flight and one hour, notification created,
/// reviewer stamped
#[tokio::test]
async fn approving_manual_pirep_credits_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = reviewer(db).await?;

    let pilot = factory::create_pilot(db).await?;
    let flight = factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(0)
        .manual(true)
        .flight_time(60)
        .build()
        .await?;

    let updated = ModerationService::new(db)
        .update(flight.id, approve(), &admin)
        .await?;

    assert_eq!(updated.status, ApprovalStatus::Approved);
    assert_eq!(updated.reviewed_by.as_deref(), Some(admin.pilot_id.as_str()));
    assert!(updated.reviewed_at.is_some());

    let credited = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(credited.balance, 3000);
    assert_eq!(credited.total_credits, 3000);
    assert_eq!(credited.total_flights, 1);
    assert_eq!(credited.total_hours, 1.0);

    let stored = FlightRepository::new(db).find_by_id(flight.id).await?.unwrap();
    assert_eq!(stored.credits_earned, 3000);

    let notifications = NotificationRepository::new(db).for_pilot(pilot.id, 10).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "PirepApproved");
    assert_eq!(
        notifications[0].link.as_deref(),
        Some(format!("/portal/reports/{}", flight.id).as_str())
    );

    Ok(())
}

/// Tests rejecting a flight with a reason and edited route fields.
///
/// Expected: fields uppercased, no credit, rejection notification carries the reason
#[tokio::test]
async fn rejecting_notifies_with_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = reviewer(db).await?;

    let pilot = factory::create_pilot(db).await?;
    let flight = factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(0)
        .manual(true)
        .build()
        .await?;

    let updated = ModerationService::new(db)
        .update(
            flight.id,
            UpdatePirepDto {
                arrival_icao: Some("olba".to_string()),
                route: Some("dct alm".to_string()),
                admin_comments: Some("Wrong arrival".to_string()),
                status: Some("rejected".to_string()),
                ..Default::default()
            },
            &admin,
        )
        .await?;

    assert_eq!(updated.status, ApprovalStatus::Rejected);
    assert_eq!(updated.arrival_icao, "OLBA");
    assert_eq!(updated.route.as_deref(), Some("DCT ALM"));

    let unchanged = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(unchanged.balance, 0);

    let notifications = NotificationRepository::new(db).for_pilot(pilot.id, 10).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, "PirepRejected");
    assert!(notifications[0].message.ends_with("Reason: Wrong arrival"));

    Ok(())
}

/// Tests re-sending Approved for an already approved flight.
///
/// Expected: pilot notified again, no second credit
#[tokio::test]
async fn reapproving_notifies_again() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = reviewer(db).await?;

    let pilot = factory::create_pilot(db).await?;
    let flight = factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(0)
        .manual(true)
        .flight_time(60)
        .build()
        .await?;

    let service = ModerationService::new(db);
    service.update(flight.id, approve(), &admin).await?;
    service.update(flight.id, approve(), &admin).await?;

    let credited = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(credited.balance, 3000);
    assert_eq!(credited.total_flights, 1);

    let notifications = NotificationRepository::new(db).for_pilot(pilot.id, 10).await?;
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|n| n.kind == "PirepApproved"));

    Ok(())
}

/// Tests approving a flight flown in an A380 family aircraft.
///
/// Expected: Err(AppError::BadRequest) and the flight left pending
#[tokio::test]
async fn approving_restricted_type_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = reviewer(db).await?;

    let pilot = factory::create_pilot(db).await?;
    let flight = factory::flight::FlightFactory::new(db, &pilot)
        .aircraft_type("A388")
        .approved_status(0)
        .build()
        .await?;

    let result = ModerationService::new(db)
        .update(flight.id, approve(), &admin)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = FlightRepository::new(db).find_by_id(flight.id).await?.unwrap();
    assert_eq!(stored.status, ApprovalStatus::Pending);

    Ok(())
}

/// Tests filing a manual PIREP from the portal.
///
/// Expected: pending manual flight with normalised fields; zero flight time rejected
#[tokio::test]
async fn files_manual_pirep() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = Pilot::from_entity(factory::create_pilot(db).await?);
    let dto = ManualPirepDto {
        flight_number: "lvt77".to_string(),
        departure_icao: "ojai".to_string(),
        arrival_icao: "oerk".to_string(),
        aircraft_type: "a320".to_string(),
        flight_time: 95,
        ..Default::default()
    };

    let flight = ModerationService::new(db)
        .file_manual(&pilot, dto.clone())
        .await?;

    assert!(flight.is_manual);
    assert_eq!(flight.status, ApprovalStatus::Pending);
    assert_eq!(flight.flight_number, "LVT77");
    assert_eq!(flight.callsign, "LVT77");
    assert_eq!(flight.departure_icao, "OJAI");
    assert_eq!(flight.aircraft_type, "A320");

    let result = ModerationService::new(db)
        .file_manual(&pilot, ManualPirepDto { flight_time: 0, ..dto })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
