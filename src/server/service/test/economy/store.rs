use super::*;

/// Tests buying a limited item with half of the price going to the airline.
///
/// Expected: balance deducted, stock decremented, purchase recorded, 500 Cr store revenue
#[tokio::test]
async fn purchase_transfers_share_to_airline() -> Result<(), AppError> {
    let test = store_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();

    let config = ConfigRepository::new(db).get_or_create().await?;
    ConfigRepository::new(db)
        .save(
            &EconomyConfig {
                store_to_airline_percent: 50.0,
                ..config
            },
            None,
        )
        .await?;

    let pilot = factory::pilot::PilotFactory::new(db)
        .balance(1500)
        .build()
        .await?;
    let item = factory::store_item::StoreItemFactory::new(db)
        .price(1000)
        .stock(2)
        .build()
        .await?;

    let result = EconomyService::new(db, &notifier)
        .purchase(&Pilot::from_entity(pilot), item.id)
        .await?;

    assert_eq!(result.balance, 500);
    assert_eq!(result.item.id, item.id);

    let stored = StoreRepository::new(db).find_by_id(item.id).await?.unwrap();
    assert_eq!(stored.stock_quantity, 1);
    assert_eq!(entity::prelude::Purchase::find().all(db).await?.len(), 1);

    let finance = FinanceRepository::new(db);
    let airline = finance.get_airline().await?;
    assert_eq!(airline.balance, INITIAL_AIRLINE_BALANCE + 500);
    assert_eq!(airline.total_revenue, 500);

    let logs = finance.recent_logs(10).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].kind, ledger::STORE_REVENUE);
    assert_eq!(logs[0].amount, 500);

    Ok(())
}

/// Tests purchases that must be refused.
///
/// Expected: NotFound for inactive items, BadRequest when out of stock or short on balance
#[tokio::test]
async fn purchase_rejections() -> Result<(), AppError> {
    let test = store_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let notifier = DiscordNotifier::disabled();
    let service = EconomyService::new(db, &notifier);

    let pilot = Pilot::from_entity(
        factory::pilot::PilotFactory::new(db)
            .balance(100)
            .build()
            .await?,
    );

    let inactive = factory::store_item::StoreItemFactory::new(db)
        .active(false)
        .build()
        .await?;
    let sold_out = factory::store_item::StoreItemFactory::new(db)
        .price(10)
        .stock(0)
        .build()
        .await?;
    let expensive = factory::create_store_item(db, 5000).await?;

    assert!(matches!(
        service.purchase(&pilot, inactive.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.purchase(&pilot, sold_out.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.purchase(&pilot, expensive.id).await,
        Err(AppError::BadRequest(_))
    ));

    let unchanged = PilotRepository::new(db).find_by_id(pilot.id).await?.unwrap();
    assert_eq!(unchanged.balance, 100);

    Ok(())
}
