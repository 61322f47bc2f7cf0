use super::*;

/// Tests that in-progress bids still count as open.
///
/// Expected: Ok(Some) for an InProgress bid, Ok(None) once it is Completed
#[tokio::test]
async fn treats_in_progress_as_open() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let bid = factory::bid::BidFactory::new(db, &pilot)
        .status("InProgress")
        .build()
        .await?;

    let repo = BidRepository::new(db);
    assert_eq!(repo.find_open_for_pilot(pilot.id).await?.map(|b| b.id), Some(bid.id));

    repo.set_status(bid.id, BidStatus::Completed).await?;
    assert!(repo.find_open_for_pilot(pilot.id).await?.is_none());

    Ok(())
}

/// Tests narrowing the active bid lookup by callsign.
///
/// Expected: the callsign filter picks the matching bid and rejects others
#[tokio::test]
async fn filters_active_bid_by_callsign() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let bid = factory::bid::BidFactory::new(db, &pilot)
        .callsign("LVT42")
        .build()
        .await?;

    let repo = BidRepository::new(db);

    let by_callsign = repo.find_active_for_pilot(pilot.id, Some("LVT42")).await?;
    assert_eq!(by_callsign.map(|b| b.id), Some(bid.id));
    assert!(repo
        .find_active_for_pilot(pilot.id, Some("LVT43"))
        .await?
        .is_none());
    assert!(repo.find_active_for_pilot(pilot.id, None).await?.is_some());

    Ok(())
}

/// Tests cancelling a pilot's active bids.
///
/// Expected: only Active bids of that pilot are cancelled
#[tokio::test]
async fn cancels_only_active_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let other = factory::create_pilot(db).await?;
    factory::create_bid(db, &pilot).await?;
    factory::bid::BidFactory::new(db, &pilot)
        .status("InProgress")
        .build()
        .await?;
    factory::create_bid(db, &other).await?;

    let repo = BidRepository::new(db);
    let cancelled = repo.cancel_active_for_pilot(pilot.id).await?;

    assert_eq!(cancelled, 1);
    assert!(repo.find_active_for_pilot(other.id, None).await?.is_some());
    assert_eq!(repo.get_open_for_pilot(pilot.id).await?.len(), 1);

    Ok(())
}
