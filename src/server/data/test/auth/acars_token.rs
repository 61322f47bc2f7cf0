use super::*;

/// Tests storing and looking up a token by hash.
///
/// Expected: the stored token is live for its kind only
#[tokio::test]
async fn finds_live_token_by_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = AcarsTokenRepository::new(db);
    repo.create(
        "hash-a".to_string(),
        pilot.id,
        TokenKind::Access,
        Utc::now() + Duration::hours(1),
    )
    .await?;

    let token = repo.find_by_hash("hash-a").await?.unwrap();

    assert_eq!(token.pilot_id, pilot.id);
    assert!(token.is_live(TokenKind::Access, Utc::now()));
    assert!(!token.is_live(TokenKind::Refresh, Utc::now()));
    assert!(repo.find_by_hash("hash-b").await?.is_none());

    Ok(())
}

/// Tests revoking and expiring tokens.
///
/// Expected: expired tokens are swept and a pilot's tokens can be revoked together
#[tokio::test]
async fn revokes_and_sweeps_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pilot_tables()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_pilot(db).await?;
    let repo = AcarsTokenRepository::new(db);
    let later = Utc::now() + Duration::days(1);

    repo.create("expired".to_string(), pilot.id, TokenKind::Access, Utc::now() - Duration::seconds(1))
        .await?;
    repo.create("access".to_string(), pilot.id, TokenKind::Access, later)
        .await?;
    repo.create("refresh".to_string(), pilot.id, TokenKind::Refresh, later)
        .await?;

    assert_eq!(repo.delete_expired(Utc::now()).await?, 1);
    assert!(repo.delete_by_hash("access").await?);
    assert_eq!(repo.delete_for_pilot(pilot.id).await?, 1);
    assert!(repo.find_by_hash("refresh").await?.is_none());

    Ok(())
}
