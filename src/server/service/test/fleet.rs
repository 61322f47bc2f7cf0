use crate::{
    model::fleet::{CreateAircraftDto, UpdateAircraftDto},
    server::{
        data::{finance::FinanceRepository, maintenance_log::MaintenanceLogRepository},
        error::AppError,
        model::{
            economy::{ledger, AirlineAdjustment, INITIAL_AIRLINE_BALANCE},
            fleet::AircraftStatus,
        },
        service::fleet::FleetService,
    },
};
use test_utils::{builder::TestBuilder, factory};

fn fleet_builder() -> TestBuilder {
    TestBuilder::new()
        .with_flight_tables()
        .with_finance_tables()
}

/// Tests adding an aircraft and a duplicate registration.
///
/// Expected: fields normalized, second insert conflicts
#[tokio::test]
async fn creates_aircraft_once() -> Result<(), AppError> {
    let test = fleet_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = FleetService::new(db);

    let dto = CreateAircraftDto {
        registration: " jy-lva ".to_string(),
        aircraft_type: "a320".to_string(),
        name: "Petra".to_string(),
        airline_code: "lvt".to_string(),
        current_location: "ojai".to_string(),
    };

    let aircraft = service.create(dto.clone()).await?;
    assert_eq!(aircraft.registration, "JY-LVA");
    assert_eq!(aircraft.aircraft_type, "A320");
    assert_eq!(aircraft.current_location, "OJAI");
    assert_eq!(aircraft.status, AircraftStatus::Available);

    let duplicate = service.create(dto).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests fleet filters and status updates.
///
/// Expected: location and status filters applied, unknown status rejected
#[tokio::test]
async fn filters_and_updates_fleet() -> Result<(), AppError> {
    let test = fleet_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = FleetService::new(db);

    let at_base = factory::create_aircraft_at(db, "OJAI").await?;
    factory::create_aircraft_at(db, "OERK").await?;

    let listed = service.list(Some("ojai".to_string()), None).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].registration, at_base.registration);

    service
        .update(
            &at_base.registration,
            UpdateAircraftDto {
                status: Some("Maintenance".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert!(service.available_at("OJAI").await?.is_empty());
    assert_eq!(
        service
            .list(None, Some("Maintenance".to_string()))
            .await?
            .len(),
        1
    );

    let unknown = service.list(None, Some("Parked".to_string())).await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the health check of a worn airframe.
///
/// Expected: aircraft below the threshold grounded with a reason and full repair cost
#[tokio::test]
async fn health_check_grounds_worn_aircraft() -> Result<(), AppError> {
    let test = fleet_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .condition(12.0)
        .build()
        .await?;

    let health = FleetService::new(db).health(&aircraft.registration).await?;

    assert!(health.grounded);
    assert_eq!(health.aircraft.status, AircraftStatus::Grounded);
    assert!(health.aircraft.grounded_reason.is_some());
    assert_eq!(health.repair_cost, 8_800);

    Ok(())
}

/// Tests a minimum repair paid by the airline.
///
/// Expected: health restored past the threshold, maintenance and ledger entries written,
/// airline charged
#[tokio::test]
async fn minimum_repair_charges_airline() -> Result<(), AppError> {
    let test = fleet_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .condition(12.0)
        .status("Grounded")
        .build()
        .await?;

    let outcome = FleetService::new(db)
        .repair(&aircraft.registration, "minimum", "Ops Admin".to_string())
        .await?;

    assert_eq!(outcome.aircraft.condition, 25.0);
    assert_eq!(outcome.aircraft.status, AircraftStatus::Available);
    assert_eq!(outcome.cost, 1_300);
    assert_eq!(outcome.airline_balance, INITIAL_AIRLINE_BALANCE - 1_300);

    let logs = MaintenanceLogRepository::new(db).recent(5).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].performed_by.as_deref(), Some("Ops Admin"));

    let ledger_entries = FinanceRepository::new(db).recent_logs(5).await?;
    assert_eq!(ledger_entries[0].kind, ledger::MAINTENANCE_REPAIR);
    assert_eq!(ledger_entries[0].amount, -1_300);

    Ok(())
}

/// Tests repairs the airline cannot afford or that are not needed.
///
/// Expected: Err(AppError::BadRequest) in both cases, aircraft unchanged
#[tokio::test]
async fn refuses_unaffordable_or_needless_repair() -> Result<(), AppError> {
    let test = fleet_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = FleetService::new(db);

    let worn = factory::aircraft::AircraftFactory::new(db)
        .condition(40.0)
        .build()
        .await?;
    let healthy = factory::create_aircraft(db).await?;

    let finance_repo = FinanceRepository::new(db);
    finance_repo.get_airline().await?;
    finance_repo
        .adjust_airline(AirlineAdjustment {
            balance: 1_000 - INITIAL_AIRLINE_BALANCE,
            revenue: 0,
            expenses: 0,
        })
        .await?;

    let result = service
        .repair(&worn.registration, "FULL", "Ops Admin".to_string())
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service
        .repair(&healthy.registration, "FULL", "Ops Admin".to_string())
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    assert!(MaintenanceLogRepository::new(db).recent(5).await?.is_empty());

    Ok(())
}
