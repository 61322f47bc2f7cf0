use super::*;

fn leg(number: i32, dep: &str, arr: &str) -> TourLeg {
    TourLeg {
        leg_number: number,
        departure_icao: dep.to_string(),
        arrival_icao: arr.to_string(),
        distance_nm: 0.0,
        aircraft_types: Vec::new(),
    }
}

fn param(legs: Vec<TourLeg>) -> UpsertTourParam {
    UpsertTourParam {
        name: "Levant Loop".to_string(),
        description: "Around the region".to_string(),
        banner: None,
        reward_credits: 1_500,
        difficulty: "easy".to_string(),
        is_active: true,
        start_date: None,
        end_date: None,
        legs,
    }
}

/// Tests creating a tour and replacing its legs.
///
/// Expected: legs come back ordered and an update swaps the whole list
#[tokio::test]
async fn creates_and_replaces_legs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    let tour = repo
        .create(param(vec![leg(1, "OJAI", "OLBA"), leg(2, "OLBA", "OSDI")]))
        .await?;

    assert_eq!(tour.legs.len(), 2);
    assert_eq!(tour.legs[0].departure_icao, "OJAI");

    let updated = repo
        .update(tour.id, param(vec![leg(1, "OJAI", "OERK")]))
        .await?
        .unwrap();

    assert_eq!(updated.legs.len(), 1);
    assert_eq!(updated.legs[0].arrival_icao, "OERK");

    let reloaded = repo.find_by_id(tour.id).await?.unwrap();
    assert_eq!(reloaded.legs, updated.legs);

    Ok(())
}

/// Tests that only active tours are listed publicly.
///
/// Expected: get_active hides the inactive tour, get_all shows both
#[tokio::test]
async fn lists_active_tours() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    repo.create(param(vec![leg(1, "OJAI", "OLBA")])).await?;
    let mut hidden = param(Vec::new());
    hidden.name = "Retired".to_string();
    hidden.is_active = false;
    repo.create(hidden).await?;

    assert_eq!(repo.get_active().await?.len(), 1);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
