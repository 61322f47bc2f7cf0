use super::*;

/// Tests recording post-flight wear with pilot-caused damage.
///
/// Verifies that hours and cycles accumulate, the damage log is stored, and the damaging
/// pilot is remembered.
///
/// Expected: Ok(Some) with updated counters and damage attribution
#[tokio::test]
async fn applies_wear_and_damage() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::create_aircraft(db).await?;
    let entry = DamageEntry {
        kind: DamageEntry::kind_for(12.0).to_string(),
        amount: 12.0,
        timestamp: Utc::now(),
        flight_id: Some(1),
    };

    let updated = AircraftRepository::new(db)
        .apply_wear(
            aircraft.id,
            AircraftWearParam {
                condition: 88.0,
                location: "OERK".to_string(),
                hours: 2.5,
                status: AircraftStatus::Available,
                grounded_reason: None,
                damage_log: vec![entry.clone()],
                repair_until: None,
                damaged_by_pilot: Some("LVT001".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.condition, 88.0);
    assert_eq!(updated.current_location, "OERK");
    assert_eq!(updated.flight_count, 1);
    assert!((updated.total_hours - 2.5).abs() < f64::EPSILON);
    assert_eq!(updated.damage_log, vec![entry]);
    assert_eq!(updated.damaged_by_pilot.as_deref(), Some("LVT001"));
    assert!(updated.damaged_at.is_some());

    Ok(())
}

/// Tests a maintenance repair.
///
/// Expected: condition restored, grounding cleared and service date stamped
#[tokio::test]
async fn repairs_grounded_aircraft() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_flight_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aircraft = factory::aircraft::AircraftFactory::new(db)
        .condition(20.0)
        .status("Grounded")
        .build()
        .await?;

    let repo = AircraftRepository::new(db);
    repo.ground(aircraft.id, "Severe damage".to_string()).await?;

    let repaired = repo.repair(aircraft.id, 100.0).await?.unwrap();

    assert_eq!(repaired.condition, 100.0);
    assert_eq!(repaired.status, AircraftStatus::Available);
    assert!(repaired.grounded_reason.is_none());
    assert!(repaired.last_service.is_some());

    Ok(())
}
