use super::*;

/// Tests crediting bonuses for a new route.
///
/// Expected: balance grows, the route key is recorded once and the flight date is stamped
#[tokio::test]
async fn records_route_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::pilot::PilotFactory::new(db)
        .balance(50)
        .flown_route("OJAI-OMDB")
        .build()
        .await?;

    let repo = PilotRepository::new(db);
    let now = Utc::now();

    repo.award_credits(model.id, 100, "OJAI-OERK", now).await?;
    let pilot = repo
        .award_credits(model.id, 25, "OJAI-OERK", now)
        .await?
        .unwrap();

    assert_eq!(pilot.balance, 175);
    assert_eq!(
        pilot.routes_flown,
        vec!["OJAI-OMDB".to_string(), "OJAI-OERK".to_string()]
    );
    assert!(pilot.last_flight_date.is_some());

    Ok(())
}
