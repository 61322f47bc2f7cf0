use super::*;

/// Tests booking an open event and listing it afterwards.
///
/// Expected: booking counted and reported as the caller's booking
#[tokio::test]
async fn books_open_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = pilot(db).await?;
    let event = factory::create_event(db).await?;

    EventService::new(db).book(&pilot, event.id).await?;

    let events = EventService::new(db).list_for_pilot(pilot.id).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].booking_count, 1);
    assert_eq!(events[0].my_booking.as_deref(), Some("Booked"));

    Ok(())
}

/// Tests the booking refusals.
///
/// Expected: 404 for inactive, 409 when booked twice, 400 when full or over
#[tokio::test]
async fn refuses_invalid_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let other = pilot(db).await?;
    let pilot = pilot(db).await?;

    let inactive = factory::event::EventFactory::new(db).active(false).build().await?;
    assert!(matches!(
        service.book(&pilot, inactive.id).await,
        Err(AppError::NotFound(_))
    ));

    let open = factory::create_event(db).await?;
    service.book(&pilot, open.id).await?;
    assert!(matches!(
        service.book(&pilot, open.id).await,
        Err(AppError::Conflict(_))
    ));

    let full = factory::event::EventFactory::new(db).slots(1).build().await?;
    service.book(&pilot, full.id).await?;
    assert!(matches!(
        service.book(&other, full.id).await,
        Err(AppError::BadRequest(_))
    ));

    let now = Utc::now();
    let ended = factory::event::EventFactory::new(db)
        .window(now - Duration::hours(6), Some(now - Duration::hours(1)))
        .build()
        .await?;
    assert!(matches!(
        service.book(&pilot, ended.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests cancelling and re-booking an event.
///
/// Expected: cancellation frees the slot, a second cancel is NotFound, re-booking works
#[tokio::test]
async fn cancel_then_rebook() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let pilot = pilot(db).await?;
    let event = factory::event::EventFactory::new(db).slots(1).build().await?;

    service.book(&pilot, event.id).await?;
    service.cancel(&pilot, event.id).await?;
    assert!(matches!(
        service.cancel(&pilot, event.id).await,
        Err(AppError::NotFound(_))
    ));

    let booking = service.book(&pilot, event.id).await?;
    assert_eq!(booking.status, "Booked");

    Ok(())
}
