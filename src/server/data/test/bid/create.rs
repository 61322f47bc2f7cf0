use super::*;

/// Tests creating a bid.
///
/// Verifies that a new bid is Active and expires after the bid lifetime.
///
/// Expected: Ok with status Active and expiry about BID_TTL_HOURS from now
#[tokio::test]
async fn creates_active_bid_with_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;

    let bid = BidRepository::new(db)
        .create(CreateBidParam {
            pilot_id: pilot.id,
            pilot_name: "Test Pilot".to_string(),
            callsign: "LVT9001".to_string(),
            flight_number: "LVT9001".to_string(),
            departure_icao: "OJAI".to_string(),
            arrival_icao: "OERK".to_string(),
            aircraft_type: "A320".to_string(),
            aircraft_registration: Some("JY-AYA".to_string()),
            route: Some("DCT".to_string()),
            estimated_flight_time: Some(150),
            pax: Some(150),
            cargo: None,
            planned_fuel: None,
            rotation_speed: None,
            simbrief_ofp_id: Some("ofp-1".to_string()),
            activity_id: None,
        })
        .await?;

    assert_eq!(bid.status, BidStatus::Active);
    let ttl = bid.expires_at - bid.created_at;
    assert_eq!(ttl.num_hours(), BID_TTL_HOURS);

    let repo = BidRepository::new(db);
    assert!(repo.active_ofp_exists("ofp-1").await?);
    assert!(repo.active_callsign_exists("LVT9001").await?);
    assert!(!repo.active_callsign_exists("LVT9002").await?);

    Ok(())
}
