use super::*;

/// Tests lazily creating the airline account.
///
/// Expected: first read returns the opening balance with zeroed totals
#[tokio::test]
async fn creates_account_with_opening_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceRepository::new(db);
    let airline = repo.get_airline().await?;

    assert_eq!(airline.balance, INITIAL_AIRLINE_BALANCE);
    assert_eq!(airline.total_revenue, 0);
    assert_eq!(airline.total_expenses, 0);

    // Second read must not create another row
    let again = repo.get_airline().await?;
    assert_eq!(again.balance, INITIAL_AIRLINE_BALANCE);

    Ok(())
}

/// Tests applying signed adjustments to the airline account.
///
/// Expected: balance and both totals move by the adjustment amounts
#[tokio::test]
async fn applies_adjustments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FinanceRepository::new(db);
    repo.adjust_airline(AirlineAdjustment {
        balance: 5_000,
        revenue: 8_000,
        expenses: 3_000,
    })
    .await?;
    let airline = repo
        .adjust_airline(AirlineAdjustment {
            balance: -1_000,
            revenue: 0,
            expenses: 1_000,
        })
        .await?;

    assert_eq!(airline.balance, INITIAL_AIRLINE_BALANCE + 4_000);
    assert_eq!(airline.total_revenue, 8_000);
    assert_eq!(airline.total_expenses, 4_000);

    Ok(())
}
