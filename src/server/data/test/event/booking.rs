use super::*;

/// Tests booking, cancelling and rebooking an event.
///
/// Verifies that cancellation frees the slot count and that rebooking reuses the same row.
///
/// Expected: booking count follows the booking status
#[tokio::test]
async fn books_cancels_and_rebooks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let event = factory::create_event(db).await?;
    let repo = EventRepository::new(db);

    let booking = repo.book(event.id, pilot.id).await?;
    assert_eq!(booking.status, EventBookingStatus::Booked.as_str());
    assert_eq!(repo.booking_count(event.id).await?, 1);

    assert!(repo.cancel_booking(event.id, pilot.id).await?);
    assert!(!repo.cancel_booking(event.id, pilot.id).await?);
    assert_eq!(repo.booking_count(event.id).await?, 0);

    let rebooked = repo.book(event.id, pilot.id).await?;
    assert_eq!(rebooked.id, booking.id);
    assert_eq!(repo.booking_count(event.id).await?, 1);

    Ok(())
}

/// Tests marking a booking attended.
///
/// Expected: booking is no longer the pilot's latest Booked one and records the flight
#[tokio::test]
async fn marks_booking_attended() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let event = factory::create_event(db).await?;
    let repo = EventRepository::new(db);

    let booking = repo.book(event.id, pilot.id).await?;
    assert_eq!(
        repo.latest_booked_for_pilot(pilot.id).await?.map(|b| b.id),
        Some(booking.id)
    );

    repo.mark_attended(booking.id, 55).await?;

    assert!(repo.latest_booked_for_pilot(pilot.id).await?.is_none());
    let attended = repo.find_booking(event.id, pilot.id).await?.unwrap();
    assert_eq!(attended.status, EventBookingStatus::Attended.as_str());
    assert_eq!(attended.flight_id, Some(55));
    assert!(attended.attended_at.is_some());

    Ok(())
}

/// Tests picking the latest of several Booked bookings.
///
/// Expected: the booking made last is returned
#[tokio::test]
async fn latest_booking_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    let repo = EventRepository::new(db);

    repo.book(first.id, pilot.id).await?;
    let latest = repo.book(second.id, pilot.id).await?;

    let found = repo.latest_booked_for_pilot(pilot.id).await?.unwrap();
    assert_eq!(found.id, latest.id);
    assert_eq!(found.event_id, second.id);

    Ok(())
}

/// Tests that deleting an event removes its bookings.
///
/// Expected: Ok(true) and no booking remains
#[tokio::test]
async fn deletes_event_with_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let event = factory::create_event(db).await?;
    let repo = EventRepository::new(db);
    repo.book(event.id, pilot.id).await?;

    assert!(repo.delete(event.id).await?);
    assert!(repo.find_booking(event.id, pilot.id).await?.is_none());
    assert!(repo.find_by_id(event.id).await?.is_none());

    Ok(())
}
