use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::server::{
    data::{aircraft::AircraftRepository, bid::BidRepository},
    error::AppError,
    model::fleet::AircraftStatus,
    service::{acars::slew::SlewTracker, cleanup::CleanupService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests the sweep of a flight without a recent heartbeat.
///
/// Expected: stale flight and its bid deleted, aircraft Available, fresh flight kept
#[tokio::test]
async fn removes_stale_flight_and_releases_aircraft() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale_pilot = factory::create_pilot(db).await?;
    let live_pilot = factory::create_pilot(db).await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .status("InFlight")
        .build()
        .await?;
    factory::bid::BidFactory::new(db, &stale_pilot)
        .registration(&aircraft.registration)
        .status("InProgress")
        .build()
        .await?;
    factory::active_flight::ActiveFlightFactory::new(db, &stale_pilot)
        .registration(&aircraft.registration)
        .last_update(Utc::now() - Duration::minutes(11))
        .build()
        .await?;
    let live = factory::create_active_flight(db, &live_pilot).await?;

    let slew = SlewTracker::new();
    let result = CleanupService::new(db, &slew).run().await?;

    assert_eq!(result.stale_flights, 1);
    let remaining = entity::prelude::ActiveFlight::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, live.id);
    assert!(BidRepository::new(db)
        .get_open_for_pilot(stale_pilot.id)
        .await?
        .is_empty());

    let aircraft = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::Available);

    Ok(())
}

/// Tests a stale flight that never reported a registration.
///
/// Expected: an InFlight aircraft of the same type at the departure is released
#[tokio::test]
async fn releases_aircraft_by_type_at_departure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .aircraft_type("B738")
        .location("LLBG")
        .status("InFlight")
        .build()
        .await?;
    factory::active_flight::ActiveFlightFactory::new(db, &pilot)
        .aircraft_type("B738")
        .route_pair("LLBG", "OJAI")
        .last_update(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let slew = SlewTracker::new();
    CleanupService::new(db, &slew).run().await?;

    let aircraft = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(aircraft.status, AircraftStatus::Available);

    Ok(())
}

/// Tests removal of expired bookings and old notifications.
///
/// Expected: expired Active bid and month-old notification deleted, current rows kept
#[tokio::test]
async fn removes_expired_bids_and_old_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_flight_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let other = factory::create_pilot(db).await?;
    factory::bid::BidFactory::new(db, &pilot)
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;
    let current = factory::create_bid(db, &other).await?;

    for age in [Duration::days(31), Duration::days(2)] {
        entity::notification::ActiveModel {
            pilot_id: ActiveValue::Set(pilot.id),
            kind: ActiveValue::Set("system".to_string()),
            title: ActiveValue::Set("Notice".to_string()),
            message: ActiveValue::Set("Hello".to_string()),
            link: ActiveValue::Set(None),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now() - age),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    let slew = SlewTracker::new();
    let result = CleanupService::new(db, &slew).run().await?;

    assert_eq!(result.expired_bids, 1);
    assert_eq!(result.old_notifications, 1);
    assert_eq!(result.stale_flights, 0);
    assert!(BidRepository::new(db).find_by_id(current.id).await?.is_some());
    assert_eq!(entity::prelude::Notification::find().all(db).await?.len(), 1);

    Ok(())
}
