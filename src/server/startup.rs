use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::pilot::PilotRepository, error::AppError,
    service::admin::code::AdminCodeService,
};

/// Sessions expire after a week without requests.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// The tower-sessions table is migrated into the same Sqlite database. Cookies are HTTP-only
/// and `SameSite=Lax`, marked secure when the public URL is served over https.
///
/// # Arguments
/// - `db` - Connected database whose pool the store shares
/// - `config` - Used to decide whether cookies are secure
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to wrap the API router with
/// - `Err(AppError::DbErr)` - Failed to migrate the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_secure(config.app_url.starts_with("https://"))
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )));

    Ok(session)
}

/// HTTP client for outbound integrations.
///
/// Redirects are not followed so a feed or proxy URL can't bounce requests elsewhere.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("flightdeck/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

/// Logs a one-time admin bootstrap code when no admin pilot exists.
///
/// The code is valid for 60 seconds and grants admin to the first login presenting it.
///
/// # Returns
/// - `Ok(())` - Admin exists or a code was issued
/// - `Err(AppError::DbErr)` - Failed to query pilots
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_codes: &AdminCodeService,
) -> Result<(), AppError> {
    if PilotRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_codes.generate().await;
    tracing::info!(
        "No admin pilot found. Log in within 60 seconds with admin code {} to claim admin",
        code
    );

    Ok(())
}
