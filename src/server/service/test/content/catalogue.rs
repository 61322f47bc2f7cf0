use super::*;

/// Tests NOTAM ordering and the type filter.
///
/// Expected: highest priority first, inactive hidden, filter narrows by type
#[tokio::test]
async fn lists_active_notams() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notam)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = NotamService::new(db);

    let notam = |title: &str, kind: &str, priority: i32, is_active: bool| UpsertNotamDto {
        title: title.to_string(),
        content: String::new(),
        kind: kind.to_string(),
        airport_icao: None,
        priority,
        effective_from: None,
        effective_until: None,
        is_active,
    };

    service.create(notam("Low", "General", 1, true)).await?;
    service.create(notam("High", "Airport", 5, true)).await?;
    service.create(notam("Hidden", "General", 9, false)).await?;

    let active = service.active(None).await?;
    let titles: Vec<&str> = active.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["High", "Low"]);

    let airport = service.active(Some("Airport")).await?;
    assert_eq!(airport.len(), 1);

    assert!(matches!(
        service.create(notam(" ", "General", 0, true)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests rank creation with a duplicate name.
///
/// Expected: Err(AppError::Conflict) for the second rank
#[tokio::test]
async fn rejects_duplicate_rank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_pilot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = UpsertRankDto {
        name: "Captain".to_string(),
        description: None,
        requirement_hours: 500.0,
        requirement_flights: 100,
        auto_promote: true,
        allowed_aircraft: vec!["a320".to_string()],
        image_url: None,
        order: 5,
    };

    let rank = RankService::new(db).create(dto.clone()).await?;
    assert_eq!(rank.allowed_aircraft, vec!["A320".to_string()]);

    assert!(matches!(
        RankService::new(db).create(dto).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests the current destination of the month.
///
/// Expected: this month's destination returned, a past month's is not
#[tokio::test]
async fn current_dotm_matches_month() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = DotmService::new(db);
    let now = Utc::now();

    DotmRepository::new(db)
        .create(UpsertDotmParam {
            month: month_name(now).to_string(),
            year: now.year() - 1,
            airport_icao: "LLBG".to_string(),
            bonus_points: 100,
            description: None,
            is_active: true,
        })
        .await?;
    assert!(service.current().await?.is_none());

    service
        .create(UpsertDotmDto {
            month: month_name(now).to_string(),
            year: now.year(),
            airport_icao: "olba".to_string(),
            bonus_points: 250,
            description: None,
            is_active: true,
        })
        .await?;

    let current = service.current().await?.unwrap();
    assert_eq!(current.airport_icao, "OLBA");
    assert_eq!(current.bonus_points, 250);

    Ok(())
}

/// Tests the public staff roster.
///
/// Expected: members grouped under their role, duplicate assignment a conflict
#[tokio::test]
async fn groups_staff_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_table(entity::prelude::StaffRole)
        .with_table(entity::prelude::StaffMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = StaffService::new(db);

    let role = |name: &str, order: i32| UpsertStaffRoleDto {
        name: name.to_string(),
        description: None,
        permissions: Vec::new(),
        order,
        is_active: true,
    };
    let ceo = service.create_role(role("CEO", 1)).await?;
    service.create_role(role("Dispatcher", 2)).await?;

    let pilot = pilot(db).await?;
    let assign = AssignStaffDto {
        pilot_id: pilot.pilot_id.to_lowercase(),
        role_id: ceo.id,
    };
    service.assign(assign.clone()).await?;
    assert!(matches!(
        service.assign(assign).await,
        Err(AppError::Conflict(_))
    ));

    let roster = service.roster().await?;
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].role.name, "CEO");
    assert_eq!(roster[0].members.len(), 1);
    assert_eq!(roster[0].members[0].pilot_id, pilot.pilot_id);
    assert!(roster[1].members.is_empty());

    Ok(())
}
