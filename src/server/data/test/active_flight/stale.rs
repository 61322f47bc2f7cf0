use super::*;

/// Tests splitting live traffic from stale flights.
///
/// Verifies that flights without a recent heartbeat are reported stale and excluded from
/// the live list.
///
/// Expected: one live and one stale flight
#[tokio::test]
async fn separates_live_and_stale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let other = factory::create_pilot(db).await?;

    let live = factory::create_active_flight(db, &pilot).await?;
    let stale = factory::active_flight::ActiveFlightFactory::new(db, &other)
        .last_update(Utc::now() - Duration::minutes(30))
        .build()
        .await?;

    let repo = ActiveFlightRepository::new(db);
    let cutoff = Utc::now() - Duration::minutes(10);

    let live_ids: Vec<_> = repo.updated_since(cutoff).await?.iter().map(|f| f.id).collect();
    let stale_ids: Vec<_> = repo.stale(cutoff).await?.iter().map(|f| f.id).collect();

    assert_eq!(live_ids, vec![live.id]);
    assert_eq!(stale_ids, vec![stale.id]);

    Ok(())
}
