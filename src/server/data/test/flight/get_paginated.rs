use super::*;

/// Tests paging through flights newest first.
///
/// Expected: total counts every row and pages are ordered by submission time
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let now = Utc::now();

    for hours in 0..5 {
        factory::flight::FlightFactory::new(db, &pilot)
            .flight_number(format!("LVT{}", 10 + hours))
            .submitted_at(now - Duration::hours(hours))
            .build()
            .await?;
    }

    let (page, total) = FlightRepository::new(db)
        .get_paginated(FlightFilter {
            status: None,
            search: None,
            page: 1,
            limit: 2,
        })
        .await?;

    assert_eq!(total, 5);
    let numbers: Vec<_> = page.iter().map(|f| f.flight_number.as_str()).collect();
    assert_eq!(numbers, vec!["LVT10", "LVT11"]);

    Ok(())
}

/// Tests filtering by status and searching flight numbers.
///
/// Expected: only pending flights whose number contains the search term
#[tokio::test]
async fn filters_by_status_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("RJA100")
        .approved_status(0)
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("RJA200")
        .approved_status(1)
        .build()
        .await?;
    factory::flight::FlightFactory::new(db, &pilot)
        .flight_number("LVT300")
        .approved_status(0)
        .build()
        .await?;

    let (page, total) = FlightRepository::new(db)
        .get_paginated(FlightFilter {
            status: Some(ApprovalStatus::Pending),
            search: Some("RJA".to_string()),
            page: 1,
            limit: 20,
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(page[0].flight_number, "RJA100");

    Ok(())
}
