use super::*;

/// Tests seeding and saving the economy configuration.
///
/// Verifies that the first read inserts defaults and a save persists edits along with
/// the editor's name.
///
/// Expected: saved values are returned by the next read
#[tokio::test]
async fn seeds_and_saves_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_finance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ConfigRepository::new(db);
    let mut config = repo.get_or_create().await?;

    config.fuel_tax_percent = 12.5;
    config.salary_enabled = false;
    repo.save(&config, Some("LVT001".to_string())).await?;

    let reloaded = repo.get_or_create().await?;

    assert_eq!(reloaded.fuel_tax_percent, 12.5);
    assert!(!reloaded.salary_enabled);
    assert_eq!(reloaded.updated_by.as_deref(), Some("LVT001"));

    Ok(())
}
