use super::*;

/// Tests weekly payroll across ranks and statuses.
///
/// Expected: Active pilots paid by rank, unknown ranks at the cadet rate, inactive pilots
/// skipped and the total charged to the airline
#[tokio::test]
async fn pays_active_pilots_by_rank() -> Result<(), AppError> {
    let test = store_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let captain = factory::pilot::PilotFactory::new(db)
        .rank("Captain")
        .build()
        .await?;
    let unknown = factory::pilot::PilotFactory::new(db)
        .rank("Trainee")
        .build()
        .await?;
    let inactive = factory::pilot::PilotFactory::new(db)
        .rank("Captain")
        .status("Inactive")
        .build()
        .await?;

    let result = EconomyService::new(db, &notifier)
        .pay_weekly_salaries()
        .await?;

    assert_eq!(result.pilots_paid, 2);
    assert_eq!(result.total_paid, 3500);
    assert_eq!(result.airline_balance, INITIAL_AIRLINE_BALANCE - 3500);

    let pilot_repo = PilotRepository::new(db);
    assert_eq!(pilot_repo.find_by_id(captain.id).await?.unwrap().balance, 3000);
    assert_eq!(pilot_repo.find_by_id(unknown.id).await?.unwrap().balance, 500);
    assert_eq!(pilot_repo.find_by_id(inactive.id).await?.unwrap().balance, 0);

    let logs = FinanceRepository::new(db).recent_logs(10).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, ledger::WEEKLY_SALARY);
    assert_eq!(logs[0].amount, -3500);

    Ok(())
}

/// Tests payroll with salaries switched off.
///
/// Expected: nobody paid and no ledger entry
#[tokio::test]
async fn disabled_payroll_pays_nothing() -> Result<(), AppError> {
    let test = store_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let config = ConfigRepository::new(db).get_or_create().await?;
    ConfigRepository::new(db)
        .save(
            &EconomyConfig {
                salary_enabled: false,
                ..config
            },
            None,
        )
        .await?;
    factory::create_pilot(db).await?;

    let result = EconomyService::new(db, &notifier)
        .pay_weekly_salaries()
        .await?;

    assert_eq!(result.pilots_paid, 0);
    assert!(FinanceRepository::new(db).recent_logs(10).await?.is_empty());

    Ok(())
}

/// Tests the daily operations charge against a full airline account.
///
/// Expected: fuel and catering within their ranges, deduction equal to their sum
#[tokio::test]
async fn daily_operations_charge_airline() -> Result<(), AppError> {
    let test = store_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let result = EconomyService::new(db, &notifier)
        .run_daily_operations()
        .await?;

    assert!((50_000..=200_000).contains(&result.fuel_lbs));
    assert!((2_000..=8_000).contains(&result.catering_cost));
    assert_eq!(result.deducted, result.fuel_cost + result.catering_cost);
    assert_eq!(result.airline_balance, INITIAL_AIRLINE_BALANCE - result.deducted);

    let overview = EconomyService::new(db, &notifier).finance_overview().await?;
    assert_eq!(overview.total_expenses, result.deducted);
    assert_eq!(overview.recent.len(), 1);
    assert_eq!(overview.recent[0].kind, ledger::DAILY_OPERATIONS);

    Ok(())
}
