use super::*;

/// Tests approving a flight through an admin edit.
///
/// Expected: status changes and the review is stamped with the reviewer
#[tokio::test]
async fn stamps_review_on_status_change() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let flight = factory::flight::FlightFactory::new(db, &pilot)
        .approved_status(0)
        .build()
        .await?;

    let updated = FlightRepository::new(db)
        .update(
            flight.id,
            UpdateFlightParam {
                status: Some(ApprovalStatus::Approved),
                admin_comments: Some("Nice landing".to_string()),
                reviewed_by: Some("LVT001".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ApprovalStatus::Approved);
    assert_eq!(updated.admin_comments.as_deref(), Some("Nice landing"));
    assert_eq!(updated.reviewed_by.as_deref(), Some("LVT001"));
    assert!(updated.reviewed_at.is_some());

    Ok(())
}

/// Tests that editing other fields leaves the review untouched.
///
/// Expected: flight time changes, reviewed_at stays empty
#[tokio::test]
async fn edits_without_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let flight = factory::create_flight(db, &pilot).await?;

    let updated = FlightRepository::new(db)
        .update(
            flight.id,
            UpdateFlightParam {
                flight_time: Some(120),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.flight_time, 120);
    assert!(updated.reviewed_at.is_none());

    Ok(())
}

/// Tests updating a missing flight.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_flight() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FlightRepository::new(db)
        .update(404, UpdateFlightParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
