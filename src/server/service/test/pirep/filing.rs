use super::*;

/// Tests filing a PIREP for a booked flight.
///
/// Expected: approved flight with economy and credits, pilot paid and moved, aircraft worn
/// and relocated, bid removed and six ledger entries written
#[tokio::test]
async fn accepts_booked_flight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let (pilot, aircraft, bid) = factory::helpers::create_booked_pilot(db).await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, &bid.callsign, -150.0))
        .await?;

    // 100 pax and 1000 lb over 500 nm, less 10% fuel tax
    assert!(result.success);
    assert_eq!(result.credits_earned, 36_900);
    // Base, greaser, hub-to-hub and new route, first flight ever x1.2
    assert_eq!(result.bonus_credits, 300);
    assert_eq!(result.aircraft_health, 99.5);
    assert!(result.message.starts_with("PIREP accepted. Airline Profit: +"));
    assert!(result.message.contains("You earned: 36900cr."));
    let breakdown = result.revenue_breakdown.unwrap();
    assert_eq!(breakdown.gross_revenue, 41_000);
    assert_eq!(breakdown.fuel_tax, 4_100);

    let updated = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(updated.total_flights, 1);
    assert_eq!(updated.total_hours, 1.5);
    assert_eq!(updated.total_credits, 41_000);
    assert_eq!(updated.balance, 36_900 + 300);
    assert_eq!(updated.current_location, "OERK");
    assert_eq!(updated.routes_flown, vec!["OJAI-OERK".to_string()]);
    assert!(updated.last_flight_date.is_some());

    let flown = AircraftRepository::new(db)
        .find_by_registration(&aircraft.registration)
        .await?
        .unwrap();
    assert_eq!(flown.current_location, "OERK");
    assert_eq!(flown.status, AircraftStatus::Available);
    assert_eq!(flown.flight_count, 1);
    assert!(flown.damage_log.is_empty());

    assert!(BidRepository::new(db).find_by_id(bid.id).await?.is_none());

    let flights = entity::prelude::Flight::find()
        .filter(entity::flight::Column::PilotId.eq(pilot.id))
        .all(db)
        .await?;
    assert_eq!(flights.len(), 1);
    let flight = FlightRepository::new(db)
        .find_by_id(flights[0].id)
        .await?
        .unwrap();
    assert_eq!(flight.status, ApprovalStatus::Approved);
    assert_eq!(flight.landing_grade, "Smooth");
    assert_eq!(flight.passenger_rating, 5);
    assert_eq!(flight.credits_earned, 300);
    assert_eq!(flight.credits_breakdown.last().unwrap(), "Total: 300 CR");

    let logs = entity::prelude::FinanceLog::find()
        .filter(entity::finance_log::Column::ReferenceId.eq(flight.id.to_string()))
        .all(db)
        .await?;
    assert_eq!(logs.len(), 6);

    let airline = FinanceRepository::new(db).get_airline().await?;
    assert_eq!(airline.total_revenue, 41_000);
    assert_eq!(
        airline.balance,
        INITIAL_AIRLINE_BALANCE + flight.real_profit + 4_100
    );

    Ok(())
}

/// Tests a landing at the auto-reject threshold.
///
/// Expected: rejected flight stored, open bids removed and no pay or career change
#[tokio::test]
async fn auto_rejects_hard_landing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let (pilot, _, bid) = factory::helpers::create_booked_pilot(db).await?;

    let result = PirepService::new(db, &notifier, PirepPolicy::default())
        .submit(submission(&pilot.pilot_id, &bid.callsign, -700.0))
        .await?;

    assert!(result.success);
    assert_eq!(
        result.message,
        "PIREP REJECTED! Landing rate of -700 fpm exceeds threshold of -700 fpm."
    );
    assert!(result.revenue_breakdown.is_none());

    let flights = entity::prelude::Flight::find().all(db).await?;
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].approved_status, ApprovalStatus::Rejected.as_i32());

    assert!(BidRepository::new(db)
        .find_open_for_pilot(pilot.id)
        .await?
        .is_none());
    let unchanged = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(unchanged.total_flights, 0);
    assert_eq!(unchanged.balance, 0);

    Ok(())
}

/// Tests checkride flights.
///
/// Expected: a hard checkride landing is rejected with a retry message, a clean one is
/// accepted and flagged as passed
#[tokio::test]
async fn grades_checkride() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let service = PirepService::new(db, &notifier, PirepPolicy::default());

    let pilot = factory::pilot::create_pilot(db).await?;

    let failed = service
        .submit(PirepSubmissionDto {
            flight_number: Some("CHK01".to_string()),
            ..submission(&pilot.pilot_id, "LVT1", -450.0)
        })
        .await?;
    assert_eq!(
        failed.message,
        "Checkride FAILED: Hard Landing. Please try again."
    );
    let rejected = entity::prelude::Flight::find().one(db).await?.unwrap();
    assert_eq!(
        rejected.comments.as_deref(),
        Some("CHECKRIDE FAILED: Hard Landing")
    );

    let passed = service
        .submit(PirepSubmissionDto {
            flight_number: Some("CHK01".to_string()),
            ..submission(&pilot.pilot_id, "LVT1", -200.0)
        })
        .await?;
    assert!(passed.message.contains("CHECKRIDE PASSED!"));

    Ok(())
}

/// Tests PIREPs from unknown or blacklisted pilots.
///
/// Expected: NotFound and Blacklisted
#[tokio::test]
async fn rejects_unknown_and_blacklisted_pilots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let service = PirepService::new(db, &notifier, PirepPolicy::default());

    let unknown = service.submit(submission("LVT999", "LVT999", -100.0)).await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let banned = factory::pilot::PilotFactory::new(db)
        .status("Blacklist")
        .build()
        .await?;
    let result = service
        .submit(submission(&banned.pilot_id, "LVT1", -100.0))
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Blacklisted(_)))
    ));

    Ok(())
}

/// Tests signature enforcement when an application key is configured.
///
/// Expected: unsigned and tampered submissions are refused, a fresh signed one is accepted
#[tokio::test]
async fn enforces_signatures() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pirep_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let service = PirepService::new(
        db,
        &notifier,
        PirepPolicy {
            app_key: Some("key".to_string()),
            ..PirepPolicy::default()
        },
    );

    let pilot = factory::pilot::create_pilot(db).await?;

    let unsigned = service
        .submit(submission(&pilot.pilot_id, "LVT1", -180.0))
        .await;
    assert!(matches!(
        unsigned,
        Err(AppError::AcarsErr(AcarsError::UnsignedData(_)))
    ));

    let timestamp = Utc::now().timestamp_millis();
    let tampered = service
        .submit(PirepSubmissionDto {
            timestamp: Some(timestamp),
            signature: Some(sign_pirep("key", &pilot.pilot_id, -100.0, timestamp)),
            ..submission(&pilot.pilot_id, "LVT1", -180.0)
        })
        .await;
    assert!(matches!(
        tampered,
        Err(AppError::AcarsErr(AcarsError::SignatureMismatch(_)))
    ));

    let signed = service
        .submit(PirepSubmissionDto {
            timestamp: Some(timestamp),
            signature: Some(sign_pirep("key", &pilot.pilot_id, -180.0, timestamp)),
            ..submission(&pilot.pilot_id, "LVT1", -180.0)
        })
        .await?;
    assert!(signed.success);

    Ok(())
}
