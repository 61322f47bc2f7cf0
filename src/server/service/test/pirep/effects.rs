use super::*;

/// Tests a landing harder than 600 fpm that stays under the auto-reject threshold.
///
/// Expected: aircraft damaged, put under a repair timer and a maintenance log written
#[tokio::test]
async fn very_hard_landing_starts_repair_timer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let (pilot, aircraft, bid) = factory::helpers::create_booked_pilot(db).await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, &bid.callsign, -650.0))
        .await?;

    // 0.5 base wear + (650 - 400) * 0.1
    assert_eq!(result.aircraft_health, 74.5);

    let damaged = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(damaged.status, AircraftStatus::Maintenance);
    assert_eq!(damaged.damaged_by_pilot.as_deref(), Some(pilot.pilot_id.as_str()));
    assert_eq!(damaged.damage_log.len(), 1);
    assert_eq!(damaged.damage_log[0].kind, "HARD_LANDING");

    // 12.5% damage at 2 hours per percent
    let remaining = damaged.repair_until.unwrap() - Utc::now();
    assert!(remaining > Duration::hours(24) && remaining <= Duration::hours(25));

    let logs = entity::prelude::MaintenanceLog::find()
        .filter(entity::maintenance_log::Column::AircraftRegistration.eq(&aircraft.registration))
        .all(db)
        .await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, "DAMAGE_FLIGHT");
    assert_eq!(logs[0].health_after, 74.5);

    Ok(())
}

/// Tests an activity leg flown from a bid linked to the activity.
///
/// Expected: progress started, the matching leg recorded and the leg count in the message
#[tokio::test]
async fn advances_booked_activity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let pilot = factory::pilot::create_pilot(db).await?;
    let (activity, legs) =
        factory::create_activity_with_legs(db, 500, false, &[("OJAI", "OERK"), ("OERK", "OJAI")])
            .await?;
    let bid = factory::bid::BidFactory::new(db, &pilot)
        .activity(activity.id)
        .build()
        .await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, &bid.callsign, -200.0))
        .await?;

    assert!(result
        .message
        .contains(&format!("Activity Leg 1 of 2 Completed! ({})", activity.title)));

    let progress = entity::prelude::ActivityProgress::find()
        .filter(entity::activity_progress::Column::PilotId.eq(pilot.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(progress.legs_complete, 1);
    assert_eq!(progress.percent_complete, 50.0);
    assert_eq!(progress.completed_leg_ids, format!("[{}]", legs[0].id));

    Ok(())
}

/// Tests flying the final leg of a tour.
///
/// Expected: tour completed, reward paid into balance and lifetime credits, Tour notification
#[tokio::test]
async fn completes_tour() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let pilot = factory::pilot::create_pilot(db).await?;
    let (tour, _) = factory::create_tour_with_legs(db, 1_000, &[("OJAI", "OERK")]).await?;
    TourRepository::new(db).start(tour.id, pilot.id).await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, "LVT1", -200.0))
        .await?;

    assert!(result.message.contains(&format!(
        "TOUR COMPLETED: {}! Bonus 1000 credits!",
        tour.name
    )));

    let progress = TourRepository::new(db)
        .find_progress(tour.id, pilot.id)
        .await?
        .unwrap();
    assert_eq!(progress.status, "Completed");
    assert_eq!(progress.current_leg, 1);
    assert!(progress.completed_at.is_some());

    let updated = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(
        updated.balance,
        result.credits_earned + result.bonus_credits + 1_000
    );
    assert_eq!(updated.total_credits, 41_000 + 1_000);

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::PilotId.eq(pilot.id))
        .all(db)
        .await?;
    assert!(notifications.iter().any(|n| n.kind == "Tour"));

    Ok(())
}

/// Tests a flight into an event airport while booked on the event.
///
/// Expected: booking attended, flight linked to the event and the event multiplier applied
#[tokio::test]
async fn attends_booked_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let pilot = factory::pilot::create_pilot(db).await?;
    let event = factory::event::EventFactory::new(db)
        .airport("OERK")
        .build()
        .await?;
    let booking = EventRepository::new(db).book(event.id, pilot.id).await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, "LVT1", -200.0))
        .await?;

    assert!(result
        .credits_breakdown
        .contains(&"Event flight: 2x multiplier".to_string()));

    let attended = EventRepository::new(db)
        .find_booking(event.id, pilot.id)
        .await?
        .unwrap();
    assert_eq!(attended.id, booking.id);
    assert_eq!(attended.status, "Attended");

    let flight = FlightRepository::new(db)
        .find_by_id(attended.flight_id.unwrap())
        .await?
        .unwrap();
    assert_eq!(flight.event_id, Some(event.id));

    Ok(())
}

/// Tests a flight matching only an older event booking.
///
/// The pilot booked an OERK event and later an LLBG event; only the latest booking is
/// checked against the flight.
///
/// Expected: neither booking attended, flight not linked and no event multiplier
#[tokio::test]
async fn ignores_older_event_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let pilot = factory::pilot::create_pilot(db).await?;
    let riyadh = factory::event::EventFactory::new(db)
        .airport("OERK")
        .build()
        .await?;
    let tel_aviv = factory::event::EventFactory::new(db)
        .airport("LLBG")
        .build()
        .await?;
    let event_repo = EventRepository::new(db);
    event_repo.book(riyadh.id, pilot.id).await?;
    event_repo.book(tel_aviv.id, pilot.id).await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, "LVT1", -200.0))
        .await?;

    assert!(!result
        .credits_breakdown
        .contains(&"Event flight: 2x multiplier".to_string()));

    let older = event_repo.find_booking(riyadh.id, pilot.id).await?.unwrap();
    assert_eq!(older.status, "Booked");
    assert!(older.flight_id.is_none());
    let latest = event_repo.find_booking(tel_aviv.id, pilot.id).await?.unwrap();
    assert_eq!(latest.status, "Booked");

    let flights = entity::prelude::Flight::find()
        .filter(entity::flight::Column::PilotId.eq(pilot.id))
        .all(db)
        .await?;
    assert_eq!(flights.len(), 1);
    assert!(flights[0].event_id.is_none());

    Ok(())
}

/// Tests the destination of the month bonus and expiry.
///
/// Expected: the current destination pays its bonus, a past one is deactivated
#[tokio::test]
async fn applies_destination_of_the_month() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let service = PirepService::new(db, &notifier, PirepPolicy::default());
    let dotm_repo = DotmRepository::new(db);
    let now = Utc::now();

    let pilot = factory::pilot::create_pilot(db).await?;
    let current = dotm_repo
        .create(UpsertDotmParam {
            month: month_name(now).to_string(),
            year: now.year(),
            airport_icao: "OERK".to_string(),
            bonus_points: 250,
            description: None,
            is_active: true,
        })
        .await?;

    let result = service
        .submit(submission(&pilot.pilot_id, "LVT1", -200.0))
        .await?;
    assert!(result.message.contains("(Includes 250 DOTM Bonus!)"));
    assert_eq!(result.revenue_breakdown.unwrap().dotm_bonus, 250);

    dotm_repo
        .update(
            current.id,
            UpsertDotmParam {
                month: month_name(now).to_string(),
                year: now.year() - 1,
                airport_icao: "OERK".to_string(),
                bonus_points: 250,
                description: None,
                is_active: true,
            },
        )
        .await?;

    let result = service
        .submit(submission(&pilot.pilot_id, "LVT2", -200.0))
        .await?;
    assert!(!result.message.contains("DOTM"));
    assert!(dotm_repo.find_active().await?.is_none());

    Ok(())
}
