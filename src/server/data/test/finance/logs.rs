use super::*;

fn entry(kind: &'static str, amount: i64, reference: &str) -> CreateFinanceLogParam {
    CreateFinanceLogParam {
        pilot_id: None,
        kind,
        amount,
        description: format!("{} {}", kind, amount),
        reference_id: Some(reference.to_string()),
    }
}

/// Tests writing and reading back ledger entries.
///
/// Expected: recent logs come back newest first, capped by the limit
#[tokio::test]
async fn lists_recent_logs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceRepository::new(db);
    repo.log_many(vec![
        entry(ledger::FLIGHT_REVENUE, 1_000, "1"),
        entry(ledger::FUEL_COST, -300, "1"),
        entry(ledger::LANDING_FEE, -50, "1"),
    ])
    .await?;

    let recent = repo.recent_logs(2).await?;

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].kind, ledger::LANDING_FEE);
    assert_eq!(recent[1].kind, ledger::FUEL_COST);

    Ok(())
}

/// Tests deleting the ledger entries of one flight.
///
/// Expected: only entries with the matching reference are removed
#[tokio::test]
async fn deletes_logs_by_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceRepository::new(db);
    repo.log_many(vec![
        entry(ledger::FLIGHT_REVENUE, 1_000, "7"),
        entry(ledger::PILOT_PAY, -200, "7"),
        entry(ledger::FLIGHT_REVENUE, 900, "8"),
    ])
    .await?;

    let deleted = repo.delete_logs_by_reference("7").await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.recent_logs(10).await?.len(), 1);

    Ok(())
}
