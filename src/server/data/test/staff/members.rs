use super::*;

/// Tests role ordering and the active filter.
///
/// Expected: roles sorted by order, inactive roles hidden when requested
#[tokio::test]
async fn lists_roles_in_order() -> Result<(), DbErr> {
    let test = staff_db().await;
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    repo.create_role(role("Chief Pilot", 2, true)).await?;
    repo.create_role(role("CEO", 1, true)).await?;
    repo.create_role(role("Retired", 3, false)).await?;

    let active: Vec<_> = repo
        .get_roles(true)
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(active, vec!["CEO".to_string(), "Chief Pilot".to_string()]);
    assert_eq!(repo.get_roles(false).await?.len(), 3);

    Ok(())
}

/// Tests assigning and removing staff members.
///
/// Verifies that members come back joined with their pilot and that deleting a role
/// removes its members.
///
/// Expected: member listed after assignment, gone after the role is deleted
#[tokio::test]
async fn assigns_and_removes_members() -> Result<(), DbErr> {
    let test = staff_db().await;
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = StaffRepository::new(db);
    let ceo = repo.create_role(role("CEO", 1, true)).await?;

    repo.assign(ceo.id, pilot.id).await?;
    assert!(repo.member_exists(ceo.id, pilot.id).await?);

    let members = repo.get_members().await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].pilot.pilot_id, pilot.pilot_id);
    assert_eq!(members[0].role_id, ceo.id);

    assert!(repo.delete_role(ceo.id).await?);
    assert!(repo.get_members().await?.is_empty());

    Ok(())
}
