use super::*;

fn pending(pilot_id: i32, code: &str, expires_in: Duration) -> PendingAuth {
    PendingAuth {
        code: code.to_string(),
        pilot_id,
        code_challenge: "challenge".to_string(),
        challenge_method: "S256".to_string(),
        redirect_uri: "http://127.0.0.1:5000/callback".to_string(),
        expires_at: Utc::now() + expires_in,
    }
}

/// Tests that an authorization code can be taken only once.
///
/// Expected: first take returns the code, the second returns None
#[tokio::test]
async fn takes_code_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = PendingAuthRepository::new(db);
    repo.create(pending(pilot.id, "code-1", Duration::minutes(5)))
        .await?;

    let taken = repo.take("code-1").await?;
    assert_eq!(taken.map(|p| p.pilot_id), Some(pilot.id));
    assert!(repo.take("code-1").await?.is_none());

    Ok(())
}

/// Tests sweeping expired authorization codes.
///
/// Expected: only the expired code is removed
#[tokio::test]
async fn deletes_expired_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = PendingAuthRepository::new(db);
    repo.create(pending(pilot.id, "old", -Duration::minutes(1)))
        .await?;
    repo.create(pending(pilot.id, "new", Duration::minutes(5)))
        .await?;

    assert_eq!(repo.delete_expired(Utc::now()).await?, 1);
    assert!(repo.take("new").await?.is_some());

    Ok(())
}
