use super::*;

/// Tests sweeping expired bids.
///
/// Verifies that Active bids past their expiry are deleted while in-progress bids and
/// unexpired bids survive.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_only_expired_active_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let past = Utc::now() - Duration::hours(1);

    let expired = factory::bid::BidFactory::new(db, &pilot)
        .expires_at(past)
        .build()
        .await?;
    let flying = factory::bid::BidFactory::new(db, &pilot)
        .status("InProgress")
        .expires_at(past)
        .build()
        .await?;
    let fresh = factory::create_bid(db, &pilot).await?;

    let repo = BidRepository::new(db);
    let deleted = repo.delete_expired_active(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(expired.id).await?.is_none());
    assert!(repo.find_by_id(flying.id).await?.is_some());
    assert!(repo.find_by_id(fresh.id).await?.is_some());

    Ok(())
}
